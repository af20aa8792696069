use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::defaults::default_device_color;

/// One row of the device's bar chart: category name to magnitude.
pub type GraphRow = BTreeMap<String, f64>;

/// The singleton record describing overall device/UI status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceState {
    /// Display color, usually `rgb(r, g, b)`.
    #[serde(default = "default_device_color")]
    pub color: String,

    /// Monotonic step counter maintained by the server.
    #[serde(default)]
    pub tick: u64,

    /// Pre-rendered spectrum text block.
    #[serde(default)]
    pub spectrum: String,

    /// Bar chart rows. Missing or non-numeric values read as `0.0`.
    #[serde(default, deserialize_with = "deserialize_graph_rows")]
    pub graph_data: Vec<GraphRow>,

    /// Free-form diagnostic string set by the server.
    #[serde(default)]
    pub debug: String,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            color: default_device_color(),
            tick: 0,
            spectrum: String::new(),
            graph_data: Vec::new(),
            debug: String::new(),
        }
    }
}

/// Fields of [`DeviceState`] that can change between fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceField {
    Color,
    Tick,
    Spectrum,
    GraphData,
    Debug,
}

impl DeviceState {
    /// Fields whose value differs between `self` and `other`.
    pub fn changed_fields(&self, other: &DeviceState) -> Vec<DeviceField> {
        let mut fields = Vec::new();
        if self.color != other.color {
            fields.push(DeviceField::Color);
        }
        if self.tick != other.tick {
            fields.push(DeviceField::Tick);
        }
        if self.spectrum != other.spectrum {
            fields.push(DeviceField::Spectrum);
        }
        if self.graph_data != other.graph_data {
            fields.push(DeviceField::GraphData);
        }
        if self.debug != other.debug {
            fields.push(DeviceField::Debug);
        }
        fields
    }

    /// Category names across all graph rows, sorted.
    pub fn graph_categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .graph_data
            .iter()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

fn deserialize_graph_rows<'de, D>(deserializer: D) -> Result<Vec<GraphRow>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<BTreeMap<String, serde_json::Value>>>> =
        Option::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|row| {
            row.unwrap_or_default()
                .into_iter()
                .map(|(category, value)| (category, value.as_f64().unwrap_or(0.0)))
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let state: DeviceState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, DeviceState::default());
        assert_eq!(state.color, "rgb(100,30,50)");
    }

    #[test]
    fn test_graph_values_default_to_zero() {
        let state: DeviceState = serde_json::from_str(
            r#"{"tick": 4, "graph_data": [{"bass": 3, "treble": null, "mid": "loud"}, null]}"#,
        )
        .unwrap();
        assert_eq!(state.tick, 4);
        assert_eq!(state.graph_data.len(), 2);
        assert_eq!(state.graph_data[0]["bass"], 3.0);
        assert_eq!(state.graph_data[0]["treble"], 0.0);
        assert_eq!(state.graph_data[0]["mid"], 0.0);
        assert!(state.graph_data[1].is_empty());
    }

    #[test]
    fn test_null_graph_data_is_empty() {
        let state: DeviceState = serde_json::from_str(r#"{"graph_data": null}"#).unwrap();
        assert!(state.graph_data.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let state: DeviceState =
            serde_json::from_str(r#"{"id": 7, "tick": 1, "extra": [1, 2]}"#).unwrap();
        assert_eq!(state.tick, 1);
    }

    #[test]
    fn test_changed_fields() {
        let before = DeviceState::default();
        let mut after = before.clone();
        after.tick = 9;
        after.spectrum = "###".to_string();

        assert_eq!(
            before.changed_fields(&after),
            vec![DeviceField::Tick, DeviceField::Spectrum]
        );
        assert!(before.changed_fields(&before).is_empty());
    }

    #[test]
    fn test_graph_categories_are_sorted_and_unique() {
        let state: DeviceState = serde_json::from_str(
            r#"{"graph_data": [{"treble": 1, "bass": 2}, {"bass": 1, "mid": 5}]}"#,
        )
        .unwrap();
        assert_eq!(state.graph_categories(), vec!["bass", "mid", "treble"]);
    }
}
