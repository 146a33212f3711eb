use serde::{Serialize, Deserialize};

/// Token representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,      // The token text
    pub position: u32,     // Word index in the source text
    pub offset: usize,     // Byte offset in original text
}

impl Token {
    pub fn new(text: String, position: u32, offset: usize) -> Self {
        Token {
            text,
            position,
            offset,
        }
    }

    /// A word is valid when it contains no control characters (`'\0'..' '`).
    pub fn is_valid(&self) -> bool {
        is_valid_word(&self.text)
    }
}

pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| c < ' ')
}
