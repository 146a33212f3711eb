use std::collections::BTreeSet;

/// One parsed word of a raw query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWord {
    pub data: String,
    pub is_minus: bool,
    pub is_stop: bool,
}

/// Parsed query. Stop words are already removed from both sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,   // must contribute to relevance
    pub minus_words: BTreeSet<String>,  // exclude any document containing them
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}
