//! Shared utilities used across all domain modules.

use std::time::Duration;

/// A response value together with the measured round-trip latency.
///
/// Every HTTP method in this SDK measures wall-clock time around the full
/// request/response cycle, including body deserialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    pub fn new(value: T, elapsed: Duration) -> Self {
        Self { value, elapsed }
    }

    /// Elapsed time in milliseconds, fractional.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }

    /// Map the inner value, keeping the measured latency.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Timed<U> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_ms_fractional() {
        let timed = Timed::new((), Duration::from_micros(1_234));
        assert!((timed.elapsed_ms() - 1.234).abs() < 1e-9);
    }

    #[test]
    fn test_map_keeps_latency() {
        let timed = Timed::new(2u32, Duration::from_millis(5));
        let mapped = timed.map(|v| v * 10);
        assert_eq!(mapped.value, 20);
        assert_eq!(mapped.elapsed, Duration::from_millis(5));
    }
}
