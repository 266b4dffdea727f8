use serde::{Deserialize, Serialize};

/// Parameters of one term-extraction attempt.
///
/// Built with `with_*` methods, or through [`VectorizerConfig::adaptive`] /
/// [`VectorizerConfig::fallback`] which encode the corpus-size table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// inclusive (min_n, max_n) word n-gram sizes
    pub ngram_range: (usize, usize),
    /// drop English stop words before building n-grams
    pub stop_words: bool,
    /// minimum number of documents a term must appear in
    pub min_df: usize,
    /// maximum fraction of documents a term may appear in (0.0 - 1.0)
    pub max_df: f64,
    /// vocabulary cap, highest corpus frequency first
    pub max_features: Option<usize>,
    /// use `1 + ln(tf)` instead of raw counts
    pub sublinear_tf: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            ngram_range: (1, 1),
            stop_words: false,
            min_df: 1,
            max_df: 1.0,
            max_features: None,
            sublinear_tf: false,
        }
    }
}

impl VectorizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary configuration, with the document-frequency ceiling relaxed on
    /// small corpora so the vocabulary cannot be pruned away entirely.
    ///
    /// | docs  | max_df |
    /// |-------|--------|
    /// | <= 5  | 1.0    |
    /// | 6-10  | 0.9    |
    /// | > 10  | 0.8    |
    pub fn adaptive(n_docs: usize, max_features: usize) -> Self {
        let max_df = match n_docs {
            0..=5 => 1.0,
            6..=10 => 0.9,
            _ => 0.8,
        };
        Self::new()
            .with_ngram_range(1, 2)
            .with_stop_words(true)
            .with_min_df(1)
            .with_max_df(max_df)
            .with_max_features(max_features)
            .with_sublinear_tf(true)
    }

    /// Maximally permissive configuration: unigrams, no stop words, no ceiling.
    pub fn fallback(max_features: usize) -> Self {
        Self::new()
            .with_ngram_range(1, 1)
            .with_stop_words(false)
            .with_min_df(1)
            .with_max_df(1.0)
            .with_max_features(max_features)
    }

    /// Ordered list of configurations tried by fitting.
    pub fn attempts(n_docs: usize, max_features: usize, fallback_max_features: usize) -> Vec<Self> {
        vec![
            Self::adaptive(n_docs, max_features),
            Self::fallback(fallback_max_features),
        ]
    }

    #[must_use]
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        let min_n = min_n.max(1);
        self.ngram_range = (min_n, max_n.max(min_n));
        self
    }

    #[must_use]
    pub fn with_stop_words(mut self, enable: bool) -> Self {
        self.stop_words = enable;
        self
    }

    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df.max(1);
        self
    }

    #[must_use]
    pub fn with_max_df(mut self, max_df: f64) -> Self {
        self.max_df = max_df.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    #[must_use]
    pub fn with_sublinear_tf(mut self, enable: bool) -> Self {
        self.sublinear_tf = enable;
        self
    }

    /// Upper bound on document frequency for a corpus of `n_docs`
    #[inline]
    pub fn max_doc_count(&self, n_docs: usize) -> f64 {
        self.max_df * n_docs as f64
    }
}
