use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "no-refresh" flag.
///
/// Checked by the refresh loop only when a cycle is about to start. Setting
/// it never interrupts a fetch in flight, and clearing it does not restart a
/// loop that already stopped.
#[derive(Debug, Clone, Default)]
pub struct SuspendHandle {
    suspended: Arc<AtomicBool>,
}

impl SuspendHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suspend(&self) {
        self.suspended.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.suspended.store(false, Ordering::SeqCst);
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended.load(Ordering::SeqCst)
    }
}
