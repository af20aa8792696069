use serde::{Deserialize, Serialize};

use crate::models::DeviceField;
use crate::records::StripChanges;

/// Notifications emitted by the bootstrap step and the refresh loop.
///
/// Within one cycle the order is: `DoRefresh`, then for the device fetch
/// either `DeviceChanged` (if anything changed) or `LostConnection`, then
/// the same for the strip fetch with `StripsChanged`, and finally exactly
/// one `Refreshed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// The server's type listing was loaded and both polled collections exist.
    TypesLoaded { collections: Vec<String> },
    /// A cycle is starting; the suspend flag was clear.
    DoRefresh { cycle: u64 },
    /// The device state was replaced and these fields differ.
    DeviceChanged { fields: Vec<DeviceField> },
    /// The strip collection was merged with these differences.
    StripsChanged { changes: StripChanges },
    /// A fetch of the collection at `url` failed; the next cycle waits `retry_in_ms`.
    LostConnection {
        url: String,
        error: String,
        retry_in_ms: u64,
    },
    /// Both fetches of a cycle settled; the next cycle starts after `next_delay_ms`.
    Refreshed { cycle: u64, next_delay_ms: u64 },
}

impl Event {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Event::TypesLoaded { .. } => "types_loaded",
            Event::DoRefresh { .. } => "do_refresh",
            Event::DeviceChanged { .. } => "device_changed",
            Event::StripsChanged { .. } => "strips_changed",
            Event::LostConnection { .. } => "lost_connection",
            Event::Refreshed { .. } => "refreshed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event = Event::Refreshed {
            cycle: 3,
            next_delay_ms: 1000,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"Refreshed":{"cycle":3,"next_delay_ms":1000}}"#);
    }

    #[test]
    fn test_device_changed_uses_snake_case_fields() {
        let event = Event::DeviceChanged {
            fields: vec![DeviceField::GraphData],
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("graph_data"));
        assert_eq!(event.name(), "device_changed");
    }
}
