pub mod job;
pub mod scoring;

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::utils::math::vector::ZeroSpVec;
use crate::vectorizer::{config::VectorizerConfig, tfidf::DefaultTFIDFEngine, TFIDFVectorizer};

use self::job::{CandidateProfile, JobPosting};
use self::scoring::{skills_match, Hits, Recommendation};

/// A job paired with its key and its row of the document-vector matrix
#[derive(Debug, Clone)]
pub struct IndexedJob {
    pub key: String,
    pub job: JobPosting,
    pub vector: ZeroSpVec<f64>,
}

/// One training generation: the fitted model and the jobs it vectorized.
/// Immutable once built; readers hold it through an `Arc`.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    pub vectorizer: TFIDFVectorizer,
    pub entries: Vec<IndexedJob>,
    pub generation: u64,
}

/// Diagnostics from a successful training run
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    pub documents: usize,
    pub vocabulary_size: usize,
    /// the permissive configuration had to be used
    pub used_fallback: bool,
    /// percentage of zero cells in the document-vector matrix
    pub sparsity: f64,
    pub generation: u64,
}

/// Job recommendation engine.
///
/// `train` builds a complete [`TrainedModel`] off to the side and swaps it in
/// with a single pointer store; `recommend` clones the current `Arc` and works
/// on that generation only. Concurrent `train` calls are serialized.
#[derive(Debug, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
    state: RwLock<Option<Arc<TrainedModel>>>,
    train_lock: Mutex<()>,
}

impl RecommendationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: RwLock::new(None),
            train_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_trained(&self) -> bool {
        self.snapshot().is_some()
    }

    /// Current generation, if any
    pub fn snapshot(&self) -> Option<Arc<TrainedModel>> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Fit on `jobs`, replacing the previous model.
    ///
    /// On failure the previously trained generation (if any) stays active.
    pub fn train(&self, jobs: Vec<JobPosting>) -> Result<TrainReport> {
        let _writer = self.train_lock.lock().unwrap_or_else(PoisonError::into_inner);
        info!(num_jobs = jobs.len(), "training start");
        if jobs.is_empty() {
            warn!("no jobs provided");
            return Err(Error::InvalidInput("Jobs list is empty".to_string()));
        }

        let texts: Vec<String> = jobs
            .iter()
            .enumerate()
            .map(|(index, job)| {
                let text = job.document_text(index);
                if job.is_blank() {
                    warn!(index, "job has empty text, using placeholder");
                }
                debug!(index, id = %job.key(index), chars = text.len(), "job prepared");
                text
            })
            .collect();

        let attempts = VectorizerConfig::attempts(
            texts.len(),
            self.config.max_features,
            self.config.fallback_max_features,
        );
        let outcome = TFIDFVectorizer::<DefaultTFIDFEngine>::fit_with_fallback(&attempts, &texts).map_err(|e| {
            warn!(error = %e, "training failed");
            e
        })?;

        let vocabulary_size = outcome.vectorizer.vocab_size();
        let nnz: usize = outcome.vectors.iter().map(ZeroSpVec::nnz).sum();
        let cells = (outcome.vectors.len() * vocabulary_size).max(1);
        let sparsity = 100.0 * (1.0 - nnz as f64 / cells as f64);

        let entries: Vec<IndexedJob> = jobs
            .into_iter()
            .zip(outcome.vectors)
            .enumerate()
            .map(|(index, (job, vector))| IndexedJob { key: job.key(index), job, vector })
            .collect();

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let generation = state.as_ref().map_or(1, |model| model.generation + 1);
        let documents = entries.len();
        *state = Some(Arc::new(TrainedModel {
            vectorizer: outcome.vectorizer,
            entries,
            generation,
        }));
        drop(state);

        let report = TrainReport {
            documents,
            vocabulary_size,
            used_fallback: outcome.attempt > 0,
            sparsity,
            generation,
        };
        info!(
            documents,
            vocabulary_size,
            used_fallback = report.used_fallback,
            sparsity = %format!("{sparsity:.2}"),
            generation,
            "training success"
        );
        Ok(report)
    }

    /// `recommend` with the configured default window
    pub fn recommend_default(&self, profile: &CandidateProfile) -> Result<Vec<Recommendation>> {
        self.recommend(profile, self.config.default_top_n)
    }

    /// Rank the trained jobs against `profile` and return at most `top_n`.
    pub fn recommend(&self, profile: &CandidateProfile, top_n: usize) -> Result<Vec<Recommendation>> {
        let model = self.snapshot().ok_or(Error::NotTrained)?;
        if top_n == 0 {
            return Err(Error::InvalidInput("top_n must be a positive integer".to_string()));
        }
        if profile.skills.is_empty() {
            warn!(default_skill = %self.config.default_skill, "no skills provided");
        }
        let query_text = profile.query_text(&self.config.default_skill);
        debug!(query = %query_text.chars().take(100).collect::<String>(), "candidate text");

        let query = model.vectorizer.transform_one(&query_text);
        let mut hits = Hits::from_scores(
            model
                .entries
                .par_iter()
                .map(|entry| query.cosine(&entry.vector))
                .collect::<Vec<f64>>(),
        );
        let Some((min, max, mean)) = hits.stats() else {
            warn!("no scores calculated");
            return Ok(Vec::new());
        };
        debug!(scored = hits.len(), min, max, mean, "scores calculated");
        hits.sort_by_score_desc();

        let selected = hits.select(top_n, self.config.score_threshold, self.config.min_results);
        let recommendations: Vec<Recommendation> = selected
            .iter()
            .enumerate()
            .filter_map(|(rank, hit)| {
                let entry = model.entries.get(hit.index)?;
                debug!(rank = rank + 1, title = %entry.job.title, score = hit.score, "accepted");
                Some(Recommendation {
                    job_id: entry.key.clone(),
                    title: entry.job.title.clone(),
                    company_name: entry.job.company_name.clone(),
                    location: entry.job.location.clone(),
                    similarity_score: hit.score,
                    skills_match: skills_match(&profile.skills, &entry.job.required_skills),
                })
            })
            .collect();

        info!(count = recommendations.len(), generation = model.generation, "recommendation success");
        Ok(recommendations)
    }
}
