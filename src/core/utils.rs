use std::time::Instant;
use tracing::debug;

/// Drop-guard that logs how long a scope took.
///
/// ```
/// use quaero::core::utils::ScopedTimer;
///
/// {
///     let _timer = ScopedTimer::new("batch queries");
///     // timed work
/// } // emits a debug event with the elapsed time
/// ```
pub struct ScopedTimer {
    label: String,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(label: impl Into<String>) -> Self {
        ScopedTimer {
            label: label.into(),
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        debug!(label = %self.label, elapsed_ms = elapsed.as_millis() as u64, "scope finished");
    }
}
