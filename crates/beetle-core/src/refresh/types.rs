use std::time::Duration;

use crate::source::FetchError;

/// How one fetch of a cycle settled.
#[derive(Debug)]
pub enum FetchOutcome {
    Updated,
    Failed(FetchError),
}

impl FetchOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchOutcome::Updated => None,
            FetchOutcome::Failed(e) => Some(e),
        }
    }
}

/// Result of one completed cycle.
#[derive(Debug)]
pub struct CycleReport {
    /// 1-based cycle number.
    pub cycle: u64,
    pub device: FetchOutcome,
    pub strips: FetchOutcome,
    /// Delay before the following cycle, taken after both fetches settled.
    pub next_delay: Duration,
}

impl CycleReport {
    pub fn is_success(&self) -> bool {
        !self.device.is_failed() && !self.strips.is_failed()
    }
}

/// Why [`super::RefreshLoop::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The suspend flag was set when a cycle was due.
    Suspended { cycles: u64 },
}
