use std::borrow::Cow;

use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::error::{Error, Result};
use crate::vectorizer::{config::VectorizerConfig, stop_words::is_stop_word, token::TermFrequency};

/// Word pattern: two or more word characters
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Turns raw text into term counts for one configuration.
///
/// Pipeline: lowercase -> accent folding -> word tokens -> stop word
/// removal -> n-grams (joined by a single space).
#[derive(Debug, Clone)]
pub struct Analyzer {
    token_re: Regex,
    ngram_range: (usize, usize),
    stop_words: bool,
}

impl Analyzer {
    pub fn new(config: &VectorizerConfig) -> Result<Self> {
        let token_re = Regex::new(TOKEN_PATTERN)
            .map_err(|e| Error::VectorizationFailed(format!("invalid token pattern: {e}")))?;
        Ok(Self {
            token_re,
            ngram_range: config.ngram_range,
            stop_words: config.stop_words,
        })
    }

    /// Lowercase and strip accents
    pub fn preprocess(text: &str) -> String {
        strip_accents_unicode(&text.to_lowercase())
    }

    /// Word tokens after preprocessing and stop word removal
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = Self::preprocess(text);
        self.token_re
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|tok| !(self.stop_words && is_stop_word(tok)))
            .map(str::to_string)
            .collect()
    }

    /// Term counts over every configured n-gram size
    pub fn analyze(&self, text: &str) -> TermFrequency {
        let tokens = self.tokenize(text);
        let mut freq = TermFrequency::new();
        let (min_n, max_n) = self.ngram_range;
        for n in min_n..=max_n {
            if n == 1 {
                freq.add_terms(&tokens);
                continue;
            }
            for gram in tokens.windows(n) {
                freq.add_term(&gram.join(" "));
            }
        }
        freq
    }

    /// Like [`Analyzer::analyze`] but for raw bytes; malformed UTF-8 is dropped
    pub fn analyze_bytes(&self, bytes: &[u8]) -> TermFrequency {
        self.analyze(&decode_ignore(bytes))
    }
}

/// Decode UTF-8, silently skipping invalid sequences
pub fn decode_ignore(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    Cow::Owned(out)
}

/// NFKD decomposition with combining marks removed ("café" -> "cafe")
pub fn strip_accents_unicode(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary() -> Analyzer {
        Analyzer::new(&VectorizerConfig::adaptive(3, 500)).unwrap()
    }

    #[test]
    fn strips_accents() {
        assert_eq!(strip_accents_unicode("café"), "cafe");
        assert_eq!(strip_accents_unicode("résumé"), "resume");
        assert_eq!(strip_accents_unicode("señor"), "senor");
        assert_eq!(strip_accents_unicode("plain"), "plain");
    }

    #[test]
    fn tokenize_drops_short_tokens_and_stop_words() {
        let tokens = primary().tokenize("The Senior C Developer, with 3 years of Rust");
        assert_eq!(tokens, vec!["senior", "developer", "years", "rust"]);
    }

    #[test]
    fn fallback_keeps_stop_words() {
        let analyzer = Analyzer::new(&VectorizerConfig::fallback(1000)).unwrap();
        let tokens = analyzer.tokenize("the and of");
        assert_eq!(tokens, vec!["the", "and", "of"]);
    }

    #[test]
    fn analyze_builds_bigrams_over_surviving_tokens() {
        let freq = primary().analyze("Backend Engineer and Backend Engineer");
        assert_eq!(freq.term_count("backend"), 2);
        assert_eq!(freq.term_count("engineer"), 2);
        assert_eq!(freq.term_count("backend engineer"), 2);
        // "and" is removed before n-grams, so the tokens join across it
        assert_eq!(freq.term_count("engineer backend"), 1);
    }

    #[test]
    fn accented_input_matches_plain_terms() {
        let freq = primary().analyze("Café Résumé");
        assert_eq!(freq.term_count("cafe"), 1);
        assert_eq!(freq.term_count("resume"), 1);
    }

    #[test]
    fn invalid_bytes_are_ignored() {
        let bytes = b"rust\xff\xfe developer";
        assert_eq!(decode_ignore(bytes), "rust developer");
        let freq = primary().analyze_bytes(bytes);
        assert_eq!(freq.term_count("rust"), 1);
        assert_eq!(freq.term_count("developer"), 1);
    }

    #[test]
    fn empty_text_has_no_terms() {
        assert_eq!(primary().analyze("   ").term_num(), 0);
    }
}
