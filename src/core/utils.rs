use std::time::{Duration, Instant};

/// Scoped timer. Emits an `info` event with the elapsed time when dropped.
pub struct LogDuration {
    operation: String,
    start: Instant,
}

impl LogDuration {
    pub fn new(operation: impl Into<String>) -> Self {
        LogDuration {
            operation: operation.into(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for LogDuration {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        tracing::info!(
            operation = %self.operation,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "operation time"
        );
    }
}
