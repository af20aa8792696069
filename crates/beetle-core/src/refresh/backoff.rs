//! Delay between refresh cycles.

use std::time::Duration;

use crate::config::RefreshConfig;

/// Capped exponential backoff.
///
/// Each failed cycle doubles the delay up to `max`. By default a successful
/// cycle leaves the delay where it is, so after an outage the client keeps
/// polling at the slower rate. `reset_on_success` switches to the usual
/// behavior of returning to `initial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    initial: Duration,
    max: Duration,
    current: Duration,
    reset_on_success: bool,
}

impl Backoff {
    /// `initial` is clamped to `max`.
    pub fn new(initial: Duration, max: Duration) -> Self {
        let initial = initial.min(max);
        Self {
            initial,
            max,
            current: initial,
            reset_on_success: false,
        }
    }

    pub fn from_config(config: &RefreshConfig) -> Self {
        Self::new(
            Duration::from_millis(config.initial_backoff_ms()),
            Duration::from_millis(config.max_backoff_ms()),
        )
        .with_reset_on_success(config.reset_on_success())
    }

    pub fn with_reset_on_success(mut self, reset_on_success: bool) -> Self {
        self.reset_on_success = reset_on_success;
        self
    }

    pub fn current(&self) -> Duration {
        self.current
    }

    pub fn initial(&self) -> Duration {
        self.initial
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn resets_on_success(&self) -> bool {
        self.reset_on_success
    }

    /// Double the delay, capped at `max`. Returns the new delay.
    pub fn escalate(&mut self) -> Duration {
        self.current = self.current.saturating_mul(2).min(self.max);
        self.current
    }

    /// Record a cycle in which every fetch succeeded.
    pub fn record_success(&mut self) {
        if self.reset_on_success {
            self.current = self.initial;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_doubling_sequence_is_capped() {
        let mut backoff = Backoff::new(ms(500), ms(10_000));
        let sequence: Vec<u64> = (0..6).map(|_| backoff.escalate().as_millis() as u64).collect();
        assert_eq!(sequence, vec![1000, 2000, 4000, 8000, 10_000, 10_000]);
    }

    #[test]
    fn test_n_failures_formula() {
        for n in 0..12u32 {
            let mut backoff = Backoff::new(ms(300), ms(10_000));
            for _ in 0..n {
                backoff.escalate();
            }
            let expected = (300u64 * 2u64.pow(n)).min(10_000);
            assert_eq!(backoff.current(), ms(expected), "after {} failures", n);
        }
    }

    #[test]
    fn test_success_keeps_delay_by_default() {
        let mut backoff = Backoff::new(ms(500), ms(10_000));
        backoff.escalate();
        backoff.escalate();
        backoff.record_success();
        assert_eq!(backoff.current(), ms(2000));
    }

    #[test]
    fn test_success_resets_when_enabled() {
        let mut backoff = Backoff::new(ms(500), ms(10_000)).with_reset_on_success(true);
        backoff.escalate();
        backoff.escalate();
        backoff.record_success();
        assert_eq!(backoff.current(), ms(500));
    }

    #[test]
    fn test_initial_clamped_to_max() {
        let backoff = Backoff::new(ms(20_000), ms(10_000));
        assert_eq!(backoff.current(), ms(10_000));
        assert_eq!(backoff.initial(), ms(10_000));
    }

    #[test]
    fn test_from_config() {
        let config = RefreshConfig {
            initial_backoff_ms: Some(250),
            max_backoff_ms: Some(1000),
            reset_on_success: Some(true),
        };
        let backoff = Backoff::from_config(&config);
        assert_eq!(backoff.current(), ms(250));
        assert_eq!(backoff.max(), ms(1000));
        assert!(backoff.resets_on_success());
    }
}
