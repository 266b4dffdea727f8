use indexmap::IndexSet;

use crate::{utils::math::vector::ZeroSpVec, vectorizer::{corpus::Corpus, token::TermFrequency}};

/// Term-weighting strategy plugged into `TFIDFVectorizer<E>`.
pub trait TFIDFEngine {
    /// Build the IDF vector, one weight per vocabulary dimension
    ///
    /// # Arguments
    /// * `corpus` - fitted corpus statistics
    /// * `vocabulary` - term -> dimension (position in the set)
    fn idf_vec(corpus: &Corpus, vocabulary: &IndexSet<Box<str>>) -> Vec<f64>;

    /// Weight for a raw term count within one document
    fn tf(count: u32, sublinear: bool) -> f64;

    /// Build an (unnormalized) TF-IDF vector for one document.
    /// Terms outside the vocabulary are ignored.
    fn tfidf_vec(
        freq: &TermFrequency,
        vocabulary: &IndexSet<Box<str>>,
        idf: &[f64],
        sublinear: bool,
    ) -> ZeroSpVec<f64> {
        let entries: Vec<(usize, f64)> = freq
            .iter()
            .filter_map(|(term, count)| {
                let idx = vocabulary.get_index_of(term)?;
                let weight = idf.get(idx).copied()?;
                Some((idx, Self::tf(count, sublinear) * weight))
            })
            .collect();
        ZeroSpVec::from_entries(vocabulary.len(), entries)
    }
}

/// Default engine
/// - smoothed idf: `ln((1 + n) / (1 + df)) + 1`
/// - tf: raw count, or `1 + ln(count)` when sublinear
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    fn idf_vec(corpus: &Corpus, vocabulary: &IndexSet<Box<str>>) -> Vec<f64> {
        let doc_num = corpus.get_doc_num() as f64;
        vocabulary
            .iter()
            .map(|term| {
                let doc_freq = corpus.get_term_count(term) as f64;
                ((1.0 + doc_num) / (1.0 + doc_freq)).ln() + 1.0
            })
            .collect()
    }

    #[inline]
    fn tf(count: u32, sublinear: bool) -> f64 {
        if count == 0 {
            return 0.0;
        }
        if sublinear {
            1.0 + f64::from(count).ln()
        } else {
            f64::from(count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothed_idf_matches_formula() {
        let mut corpus = Corpus::new();
        let mut a = TermFrequency::new();
        a.add_terms(&["rust", "sql"]);
        let mut b = TermFrequency::new();
        b.add_terms(&["rust"]);
        corpus.add_doc(&a);
        corpus.add_doc(&b);

        let vocab: IndexSet<Box<str>> = [Box::<str>::from("rust"), Box::from("sql")].into_iter().collect();
        let idf = DefaultTFIDFEngine::idf_vec(&corpus, &vocab);
        assert!((idf[0] - 1.0).abs() < 1e-12);
        assert!((idf[1] - ((3.0_f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn sublinear_tf_dampens_counts() {
        assert_eq!(DefaultTFIDFEngine::tf(0, true), 0.0);
        assert_eq!(DefaultTFIDFEngine::tf(1, true), 1.0);
        assert!((DefaultTFIDFEngine::tf(4, true) - (1.0 + 4f64.ln())).abs() < 1e-12);
        assert_eq!(DefaultTFIDFEngine::tf(4, false), 4.0);
    }

    #[test]
    fn unknown_terms_contribute_nothing() {
        let vocab: IndexSet<Box<str>> = [Box::<str>::from("rust")].into_iter().collect();
        let mut freq = TermFrequency::new();
        freq.add_terms(&["rust", "cobol", "cobol"]);
        let v = DefaultTFIDFEngine::tfidf_vec(&freq, &vocab, &[2.0], false);
        assert_eq!(v.len(), 1);
        assert_eq!(v.nnz(), 1);
        assert_eq!(v.get(0), Some(&2.0));
    }
}
