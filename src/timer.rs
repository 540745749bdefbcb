//! Elapsed-time report for guarded runs.

use std::time::{Duration, Instant};

/// Measures a job run and reports where and how long it ran.
#[derive(Debug, Clone)]
pub struct RunTimer {
    start: Instant,
    host: String,
}

impl RunTimer {
    /// Start timing now, on the current host.
    pub fn start() -> Self {
        let host = hostname::get()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_default();
        Self::with_host(&host)
    }

    /// Start timing now, reporting the given host name.
    pub fn with_host(host: &str) -> Self {
        Self {
            start: Instant::now(),
            host: short_host(host),
        }
    }

    /// Time elapsed since the timer started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Short upper-cased host name, empty when unknown.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Human-readable report, e.g. `Completed in 1.234s by WORKER01`.
    pub fn report(&self) -> String {
        format_report(self.elapsed(), &self.host)
    }
}

/// First label of a host name, upper-cased.
fn short_host(host: &str) -> String {
    host.split('.').next().unwrap_or("").trim().to_uppercase()
}

fn format_report(elapsed: Duration, host: &str) -> String {
    if host.is_empty() {
        format!("Completed in {:.3}s", elapsed.as_secs_f64())
    } else {
        format!("Completed in {:.3}s by {}", elapsed.as_secs_f64(), host)
    }
}
