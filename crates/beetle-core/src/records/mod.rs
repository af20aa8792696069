//! In-memory copies of the two remote collections.
//!
//! Both sets are owned by the refresh loop and replaced from fetch results.
//! Each update reports what changed so observers can re-render selectively.

pub mod device_slot;
pub mod strip_set;

pub use device_slot::DeviceSlot;
pub use strip_set::{StripChanges, StripSet};

use crate::models::DeviceState;

/// Read-only view of both record sets handed to observers with each event.
#[derive(Debug, Clone, Copy)]
pub struct RecordsView<'a> {
    pub device: Option<&'a DeviceState>,
    pub strips: &'a StripSet,
}

impl<'a> RecordsView<'a> {
    pub fn new(device: &'a DeviceSlot, strips: &'a StripSet) -> Self {
        Self {
            device: device.get(),
            strips,
        }
    }
}
