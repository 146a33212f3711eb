use crate::analysis::token::Token;

/// Post-tokenization stage of an `Analyzer`. Filters only drop tokens; they
/// never rewrite the text, so positions and offsets stay valid.
pub trait TokenFilter: Send + Sync {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token>;
}
