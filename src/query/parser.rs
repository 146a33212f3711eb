use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::is_valid_word;
use crate::core::error::{Error, Result};
use crate::query::types::{Query, QueryWord};

pub const MINUS_MARKER: char = '-';

/// Query parser for converting raw query text into plus/minus word sets
pub struct QueryParser<'a> {
    pub analyzer: &'a Analyzer,
}

impl<'a> QueryParser<'a> {
    pub fn new(analyzer: &'a Analyzer) -> Self {
        QueryParser { analyzer }
    }

    /// Parse a query string.
    /// Examples:
    /// - "fluffy cat" -> plus {cat, fluffy}
    /// - "cat -collar" -> plus {cat}, minus {collar}
    /// - "-" or "--cat" -> InvalidArgument
    pub fn parse(&self, input: &str) -> Result<Query> {
        let mut query = Query::default();

        for token in self.analyzer.split(input) {
            let word = self.parse_word(&token.text)?;
            if word.is_stop {
                continue;
            }
            if word.is_minus {
                query.minus_words.insert(word.data);
            } else {
                query.plus_words.insert(word.data);
            }
        }

        Ok(query)
    }

    pub fn parse_word(&self, text: &str) -> Result<QueryWord> {
        if text.is_empty() {
            return Err(Error::invalid_argument("Query word is empty"));
        }

        let (word, is_minus) = match text.strip_prefix(MINUS_MARKER) {
            Some(rest) => (rest, true),
            None => (text, false),
        };

        if word.is_empty() || word.starts_with(MINUS_MARKER) || !is_valid_word(word) {
            return Err(Error::invalid_argument(format!("Query word {:?} is invalid", text)));
        }

        Ok(QueryWord {
            data: word.to_string(),
            is_minus,
            is_stop: self.analyzer.is_stop_word(word),
        })
    }
}
