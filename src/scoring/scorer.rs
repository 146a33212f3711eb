/// TF-IDF Scorer
///
/// `tf` is stored pre-normalized (occurrences / document word count), so the
/// score of one term in one document is just `tf * idf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl TfIdfScorer {
    pub fn new() -> Self {
        TfIdfScorer
    }

    /// IDF = ln(N / df) where N is total docs, df is doc frequency
    pub fn idf(&self, total_docs: usize, doc_freq: usize) -> f64 {
        (total_docs as f64 / doc_freq as f64).ln()
    }

    pub fn score(&self, term_freq: f64, idf: f64) -> f64 {
        term_freq * idf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idf_is_natural_log_ratio() {
        let scorer = TfIdfScorer::new();
        assert!((scorer.idf(4, 1) - 4f64.ln()).abs() < 1e-12);
        assert_eq!(scorer.idf(3, 3), 0.0);
        assert!((scorer.score(0.5, scorer.idf(2, 1)) - 0.5 * 2f64.ln()).abs() < 1e-12);
    }
}
