//! The refresh loop: fetch device state, fetch strips, wait, repeat.
//!
//! ```text
//!   bootstrap ──► [suspended?] ──yes──► return
//!                      │ no
//!                      ▼
//!                 DoRefresh ─► device fetch ─► strip fetch ─► Refreshed
//!                      ▲                                         │
//!                      └────────────── sleep(backoff) ◄──────────┘
//! ```

pub mod backoff;
pub mod runner;
pub mod suspend;
pub mod types;

pub use backoff::Backoff;
pub use runner::{HttpRefreshLoop, RefreshLoop};
pub use suspend::SuspendHandle;
pub use types::{CycleReport, FetchOutcome, LoopExit};
