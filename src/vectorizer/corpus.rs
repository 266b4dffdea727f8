use indexmap::IndexMap;

use crate::vectorizer::{config::VectorizerConfig, token::TermFrequency};

/// Corpus-wide term statistics gathered while fitting.
///
/// Stores, for every term seen:
/// - the number of documents containing it (document frequency)
/// - its total number of occurrences (used to rank terms for the vocabulary cap)
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    doc_num: u64,
    term_counts: IndexMap<Box<str>, TermStat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TermStat {
    pub doc_freq: u64,
    pub total_count: u64,
}

/// Why no vocabulary could be selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneError {
    /// nothing was tokenized at all (e.g. only stop words)
    EmptyVocabulary,
    /// terms existed but the document-frequency bounds removed all of them
    NoTermsRemain,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document's term counts
    pub fn add_doc(&mut self, freq: &TermFrequency) {
        self.doc_num += 1;
        for (term, count) in freq.iter() {
            let stat = self.term_counts.entry(term.into()).or_default();
            stat.doc_freq += 1;
            stat.total_count += u64::from(count);
        }
    }

    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `term`
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).map_or(0, |stat| stat.doc_freq)
    }

    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// Select the vocabulary for `config`.
    ///
    /// Keeps terms with `min_df <= df <= max_df * doc_num`, caps the list by
    /// total occurrences (ties alphabetical) and returns the survivors in
    /// alphabetical order, which defines the dimension indices.
    pub fn select_vocabulary(&self, config: &VectorizerConfig) -> Result<Vec<Box<str>>, PruneError> {
        if self.term_counts.is_empty() {
            return Err(PruneError::EmptyVocabulary);
        }
        let max_doc_count = config.max_doc_count(self.doc_num as usize);
        let mut kept: Vec<(&Box<str>, u64)> = self
            .term_counts
            .iter()
            .filter(|(_, stat)| {
                stat.doc_freq >= config.min_df as u64 && stat.doc_freq as f64 <= max_doc_count
            })
            .map(|(term, stat)| (term, stat.total_count))
            .collect();
        if kept.is_empty() {
            return Err(PruneError::NoTermsRemain);
        }

        if let Some(limit) = config.max_features {
            if kept.len() > limit {
                kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
                kept.truncate(limit);
            }
        }

        let mut vocabulary: Vec<Box<str>> = kept.into_iter().map(|(term, _)| term.clone()).collect();
        vocabulary.sort();
        Ok(vocabulary)
    }
}
