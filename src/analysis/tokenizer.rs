use crate::analysis::token::Token;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Splits on the space character only. Runs of spaces never yield empty tokens;
/// tabs, newlines and other control characters stay inside the token.
#[derive(Clone, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut position = 0u32;
        let mut start: Option<usize> = None;

        for (offset, c) in text.char_indices() {
            if c == ' ' {
                if let Some(begin) = start.take() {
                    tokens.push(Token::new(text[begin..offset].to_string(), position, begin));
                    position += 1;
                }
            } else if start.is_none() {
                start = Some(offset);
            }
        }
        if let Some(begin) = start {
            tokens.push(Token::new(text[begin..].to_string(), position, begin));
        }

        tokens
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(WhitespaceTokenizer)
    }
}
