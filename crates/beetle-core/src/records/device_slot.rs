use crate::models::{DeviceField, DeviceState};

/// Holder for the device-state singleton.
#[derive(Debug, Clone, Default)]
pub struct DeviceSlot {
    current: Option<DeviceState>,
}

impl DeviceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&DeviceState> {
        self.current.as_ref()
    }

    /// Replace the stored state wholesale and return the fields that changed.
    ///
    /// The first replacement reports every field.
    pub fn replace(&mut self, state: DeviceState) -> Vec<DeviceField> {
        let fields = match &self.current {
            Some(previous) => previous.changed_fields(&state),
            None => vec![
                DeviceField::Color,
                DeviceField::Tick,
                DeviceField::Spectrum,
                DeviceField::GraphData,
                DeviceField::Debug,
            ],
        };
        self.current = Some(state);
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_replace_reports_all_fields() {
        let mut slot = DeviceSlot::new();
        assert!(slot.get().is_none());
        let fields = slot.replace(DeviceState::default());
        assert_eq!(fields.len(), 5);
        assert!(slot.get().is_some());
    }

    #[test]
    fn test_replace_reports_only_changes() {
        let mut slot = DeviceSlot::new();
        slot.replace(DeviceState::default());

        let next = DeviceState {
            tick: 1,
            ..DeviceState::default()
        };
        assert_eq!(slot.replace(next.clone()), vec![DeviceField::Tick]);
        assert!(slot.replace(next).is_empty());
        assert_eq!(slot.get().map(|s| s.tick), Some(1));
    }
}
