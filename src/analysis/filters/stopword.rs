use std::collections::BTreeSet;
use crate::analysis::filter::TokenFilter;
use crate::analysis::token::{is_valid_word, Token};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::core::error::{Error, Result};

/// Immutable set of words excluded from indexing and from queries.
#[derive(Debug, Clone, Default)]
pub struct StopWordFilter {
    pub stop_words: BTreeSet<String>,
}

impl StopWordFilter {
    /// Builds the set from an explicit collection. Empty strings are dropped,
    /// duplicates collapse.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words: BTreeSet<String> = stop_words.into_iter()
            .map(|word| word.as_ref().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        if let Some(invalid) = stop_words.iter().find(|word| !is_valid_word(word)) {
            return Err(Error::invalid_argument(
                format!("Stop word {:?} contains a control character", invalid)));
        }

        Ok(StopWordFilter { stop_words })
    }

    /// Builds the set from space separated text.
    pub fn from_text(text: &str) -> Result<Self> {
        let tokens = WhitespaceTokenizer.tokenize(text);
        StopWordFilter::new(tokens.iter().map(|token| token.text.as_str()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl TokenFilter for StopWordFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .filter(|token| !self.stop_words.contains(&token.text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_deduplicates() {
        let filter = StopWordFilter::from_text("in  the in  and").unwrap();
        assert_eq!(filter.len(), 3);
        assert!(filter.contains("in"));
        assert!(filter.contains("and"));
        assert!(!filter.contains(""));
    }

    #[test]
    fn from_collection_skips_empty_strings() {
        let filter = StopWordFilter::new(vec!["", "a", "a", "of"]).unwrap();
        assert_eq!(filter.stop_words.iter().cloned().collect::<Vec<_>>(), vec!["a", "of"]);
    }

    #[test]
    fn rejects_control_characters() {
        let err = StopWordFilter::new(["in", "th\u{12}e"]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(StopWordFilter::from_text("and w\u{1}ith").is_err());
    }

    #[test]
    fn filters_tokens() {
        let filter = StopWordFilter::from_text("in the").unwrap();
        let tokens = WhitespaceTokenizer.tokenize("cat in the city");
        let kept: Vec<String> = filter.filter(tokens).into_iter().map(|t| t.text).collect();
        assert_eq!(kept, vec!["cat", "city"]);
    }
}
