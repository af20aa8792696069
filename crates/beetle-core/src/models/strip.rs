use serde::{Deserialize, Serialize};

use super::color::HtmlColor;
use super::defaults::default_copies;

/// Display data for one physical light strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripRecord {
    /// Stable strip identifier; the collection is ordered by it.
    #[serde(default)]
    pub sid: u32,

    /// One color string per pixel, in strip order.
    #[serde(default)]
    pub html_colors: Vec<String>,

    /// How many physical strips mirror this one.
    #[serde(default = "default_copies")]
    pub copies: u32,
}

impl StripRecord {
    pub fn new(sid: u32, html_colors: Vec<String>) -> Self {
        Self {
            sid,
            html_colors,
            copies: default_copies(),
        }
    }

    /// Parsed pixel colors; `None` where the server sent something unreadable.
    pub fn colors(&self) -> impl Iterator<Item = Option<HtmlColor>> + '_ {
        self.html_colors.iter().map(|c| c.parse().ok())
    }

    pub fn len(&self) -> usize {
        self.html_colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html_colors.is_empty()
    }
}
