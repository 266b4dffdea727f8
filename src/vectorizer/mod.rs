pub mod analyzer;
pub mod config;
pub mod corpus;
pub mod stop_words;
pub mod tfidf;
pub mod token;

use std::marker::PhantomData;

use indexmap::IndexSet;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::utils::math::vector::ZeroSpVec;
use crate::vectorizer::{
    analyzer::Analyzer,
    config::VectorizerConfig,
    corpus::{Corpus, PruneError},
    tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    token::TermFrequency,
};

/// Fitted TF-IDF model.
///
/// Only obtainable through fitting, so a value of this type always carries a
/// non-empty vocabulary. Transforming never refits: unknown terms are ignored
/// and a text with no known term maps to the zero vector.
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine + Send + Sync,
{
    config: VectorizerConfig,
    analyzer: Analyzer,
    /// term -> dimension (set position), alphabetical
    vocabulary: IndexSet<Box<str>>,
    idf: Vec<f64>,
    _marker: PhantomData<E>,
}

/// Result of fitting through an ordered list of configurations
#[derive(Debug, Clone)]
pub struct FitOutcome<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine + Send + Sync,
{
    pub vectorizer: TFIDFVectorizer<E>,
    /// one unit (or zero) row per input text, same order
    pub vectors: Vec<ZeroSpVec<f64>>,
    /// index of the configuration that succeeded
    pub attempt: usize,
}

impl<E> TFIDFVectorizer<E>
where
    E: TFIDFEngine + Send + Sync,
{
    /// Fit one configuration and transform the corpus
    pub fn fit_transform<S>(config: &VectorizerConfig, texts: &[S]) -> Result<(Self, Vec<ZeroSpVec<f64>>)>
    where
        S: AsRef<str> + Sync,
    {
        if texts.is_empty() {
            return Err(Error::InvalidInput("Cannot fit on an empty corpus".to_string()));
        }
        let analyzer = Analyzer::new(config)?;
        let freqs: Vec<TermFrequency> = texts
            .par_iter()
            .map(|text| analyzer.analyze(text.as_ref()))
            .collect();

        let mut corpus = Corpus::new();
        for freq in &freqs {
            corpus.add_doc(freq);
        }

        let vocabulary: IndexSet<Box<str>> = corpus
            .select_vocabulary(config)
            .map_err(|e| match e {
                PruneError::EmptyVocabulary => Error::VectorizationFailed(
                    "empty vocabulary; perhaps the documents only contain stop words".to_string(),
                ),
                PruneError::NoTermsRemain => Error::VectorizationFailed(format!(
                    "after pruning, no terms remain (min_df={}, max_df={}, candidate terms={})",
                    config.min_df,
                    config.max_df,
                    corpus.vocab_size()
                )),
            })?
            .into_iter()
            .collect();
        let idf = E::idf_vec(&corpus, &vocabulary);

        let vectorizer = Self {
            config: config.clone(),
            analyzer,
            vocabulary,
            idf,
            _marker: PhantomData,
        };
        let vectors = freqs.par_iter().map(|freq| vectorizer.vectorize(freq)).collect();
        Ok((vectorizer, vectors))
    }

    /// Try each configuration in order until one yields a vocabulary.
    ///
    /// An empty corpus fails immediately with `InvalidInput`; otherwise the
    /// last `VectorizationFailed` is returned when every attempt fails.
    pub fn fit_with_fallback<S>(attempts: &[VectorizerConfig], texts: &[S]) -> Result<FitOutcome<E>>
    where
        S: AsRef<str> + Sync,
    {
        let mut last_err = Error::VectorizationFailed("no vectorizer configuration supplied".to_string());
        for (attempt, config) in attempts.iter().enumerate() {
            debug!(
                attempt,
                min_df = config.min_df,
                max_df = config.max_df,
                ngram_max = config.ngram_range.1,
                stop_words = config.stop_words,
                num_docs = texts.len(),
                "fitting vectorizer"
            );
            match Self::fit_transform(config, texts) {
                Ok((vectorizer, vectors)) => {
                    if attempt > 0 {
                        info!(attempt, vocabulary = vectorizer.vocab_size(), "recovered with relaxed vectorizer");
                    }
                    return Ok(FitOutcome { vectorizer, vectors, attempt });
                }
                Err(Error::VectorizationFailed(reason)) => {
                    warn!(attempt, %reason, "vectorizer fit failed");
                    last_err = Error::VectorizationFailed(reason);
                }
                Err(other) => return Err(other),
            }
        }
        Err(last_err)
    }

    /// Vectorize texts with the fitted vocabulary
    pub fn transform<S>(&self, texts: &[S]) -> Vec<ZeroSpVec<f64>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.transform_one(text.as_ref()))
            .collect()
    }

    pub fn transform_one(&self, text: &str) -> ZeroSpVec<f64> {
        self.vectorize(&self.analyzer.analyze(text))
    }

    fn vectorize(&self, freq: &TermFrequency) -> ZeroSpVec<f64> {
        let mut vec = E::tfidf_vec(freq, &self.vocabulary, &self.idf, self.config.sublinear_tf);
        vec.l2_normalize();
        vec.shrink_to_fit();
        vec
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &IndexSet<Box<str>> {
        &self.vocabulary
    }

    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Check if the term is part of the fitted vocabulary
    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Vectorizer = TFIDFVectorizer<DefaultTFIDFEngine>;

    #[test]
    fn fit_produces_unit_rows_aligned_with_input() {
        let texts = ["rust systems programming", "python data science", "rust web services"];
        let (vectorizer, vectors) =
            Vectorizer::fit_transform(&VectorizerConfig::adaptive(texts.len(), 500), &texts).unwrap();
        assert_eq!(vectors.len(), 3);
        for v in &vectors {
            assert_eq!(v.len(), vectorizer.vocab_size());
            assert!((v.norm() - 1.0).abs() < 1e-9);
        }
        assert!(vectorizer.contains_term("rust"));
        assert!(vectorizer.contains_term("rust systems"));
    }

    #[test]
    fn vocabulary_is_capped() {
        let texts = ["alpha beta gamma delta epsilon zeta eta theta"];
        let config = VectorizerConfig::adaptive(1, 500).with_max_features(3);
        let (vectorizer, _) = Vectorizer::fit_transform(&config, &texts).unwrap();
        assert_eq!(vectorizer.vocab_size(), 3);
    }

    #[test]
    fn empty_corpus_is_invalid_input() {
        let texts: [&str; 0] = [];
        let err = Vectorizer::fit_with_fallback(&VectorizerConfig::attempts(0, 500, 1000), &texts).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn stop_word_corpus_recovers_with_fallback() {
        let texts = ["the and of", "it is what it is"];
        let outcome =
            Vectorizer::fit_with_fallback(&VectorizerConfig::attempts(2, 500, 1000), &texts).unwrap();
        assert_eq!(outcome.attempt, 1);
        assert!(outcome.vectorizer.contains_term("the"));
        assert!(!outcome.vectorizer.config().sublinear_tf);
        assert_eq!(outcome.vectors.len(), 2);
    }

    #[test]
    fn fully_pruned_corpus_recovers_with_fallback() {
        // every term appears in both documents, the strict ceiling removes all of them
        let texts = ["shared words", "shared words"];
        let attempts = vec![
            VectorizerConfig::adaptive(2, 500).with_max_df(0.5),
            VectorizerConfig::fallback(1000),
        ];
        let outcome = Vectorizer::fit_with_fallback(&attempts, &texts).unwrap();
        assert_eq!(outcome.attempt, 1);
        assert_eq!(outcome.vectorizer.vocab_size(), 2);
    }

    #[test]
    fn untokenizable_corpus_fails_both_attempts() {
        let texts = ["a b c", "- !"];
        let err = Vectorizer::fit_with_fallback(&VectorizerConfig::attempts(2, 500, 1000), &texts).unwrap_err();
        assert!(matches!(err, Error::VectorizationFailed(_)));
    }

    #[test]
    fn transform_ignores_unknown_terms() {
        let texts = ["rust developer", "java developer"];
        let (vectorizer, _) =
            Vectorizer::fit_transform(&VectorizerConfig::adaptive(2, 500), &texts).unwrap();
        let zero = vectorizer.transform_one("cobol fortran");
        assert_eq!(zero.len(), vectorizer.vocab_size());
        assert_eq!(zero.nnz(), 0);

        let rows = vectorizer.transform(&["rust", "nothing known"]);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].nnz() > 0);
        assert_eq!(rows[1].nnz(), 0);
    }

    #[test]
    fn transform_of_training_text_matches_fitted_row() {
        let texts = ["rust developer remote", "java developer onsite"];
        let (vectorizer, vectors) =
            Vectorizer::fit_transform(&VectorizerConfig::adaptive(2, 500), &texts).unwrap();
        let again = vectorizer.transform_one(texts[0]);
        assert!((again.cosine(&vectors[0]) - 1.0).abs() < 1e-9);
    }
}
