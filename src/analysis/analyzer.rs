use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::core::error::{Error, Result};

/// Text analysis pipeline: split, validate, drop stop words.
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub stop_words: StopWordFilter,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("stop_words", &self.stop_words)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    pub fn new(tokenizer: Box<dyn Tokenizer>, stop_words: StopWordFilter) -> Self {
        Analyzer {
            tokenizer,
            stop_words,
        }
    }

    pub fn whitespace(stop_words: StopWordFilter) -> Self {
        Analyzer::new(Box::new(WhitespaceTokenizer), stop_words)
    }

    /// Document path. Fails on the first word containing a control character.
    pub fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        let tokens = self.tokenizer.tokenize(text);

        if let Some(invalid) = tokens.iter().find(|token| !token.is_valid()) {
            return Err(Error::invalid_argument(format!(
                "Word {:?} at byte {} is invalid", invalid.text, invalid.offset)));
        }

        Ok(self.stop_words.filter(tokens))
    }

    /// Raw split with no validation or filtering, used by the query parser.
    pub fn split(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokenize(text)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl Clone for Analyzer {
    fn clone(&self) -> Self {
        Analyzer {
            tokenizer: self.tokenizer.clone_box(),
            stop_words: self.stop_words.clone(),
        }
    }
}
