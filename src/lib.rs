//! This crate ranks job postings against a candidate profile using a
//! TF-IDF vector space built from the postings' text.

pub mod config;
pub mod error;
pub mod recommend;
pub mod utils;
pub mod vectorizer;

/// Error type shared by every operation, and its `Result` alias.
/// - `InvalidInput`: empty corpus, zero `top_n`
/// - `NotTrained`: query before any successful training run
/// - `VectorizationFailed`: no vectorizer configuration produced a vocabulary
pub use error::{Error, Result};

/// Engine configuration, layered from defaults, `recommender.toml` and
/// `RECOMMENDER_*` environment variables.
pub use config::EngineConfig;

/// Recommendation Engine
/// Owns the trained snapshot (fitted model plus the jobs it vectorized) and
/// serves ranked, explainable recommendations from it.
///
/// Training builds a new snapshot and swaps it in atomically, so a query
/// always sees one consistent generation. Trains are serialized; queries run
/// in parallel against whichever generation they picked up.
pub use recommend::{RecommendationEngine, TrainReport, TrainedModel};

/// Input and output records
/// - `JobPosting`: one job, tolerant of missing or null fields
/// - `CandidateProfile`: the query side
/// - `Recommendation`: one ranked result with similarity and skill overlap
pub use recommend::{job::{CandidateProfile, JobPosting}, scoring::Recommendation};

/// TF-IDF Vectorizer
/// A fitted term-weighting model: vocabulary of unigrams/bigrams, smoothed
/// IDF weights and the analyzer that produced them. Obtained only by
/// fitting, then used to transform any number of texts into unit vectors.
pub use vectorizer::{FitOutcome, TFIDFVectorizer};

/// Vectorizer configuration
/// `adaptive` relaxes the document-frequency ceiling on small corpora;
/// `fallback` is the permissive configuration tried when no terms survive.
pub use vectorizer::config::VectorizerConfig;

/// TF IDF Calculation Engine Trait
/// Plug a different weighting strategy into `TFIDFVectorizer<E>`.
/// `DefaultTFIDFEngine` uses smoothed IDF and optional `1 + ln(tf)`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Term counts for a single document
pub use vectorizer::token::TermFrequency;

/// Sparse vector with zero as the implicit element
pub use utils::math::vector::ZeroSpVec;
