use beetle_core::DeviceState;

const BAR_WIDTH: usize = 24;

/// Box-drawn bar chart of a device's graph rows, one line per category.
pub struct GraphTable<'a> {
    state: &'a DeviceState,
    categories: Vec<&'a str>,
    category_width: usize,
    value_width: usize,
    peak: f64,
}

impl<'a> GraphTable<'a> {
    pub fn new(state: &'a DeviceState) -> Self {
        let categories = state.graph_categories();
        let category_width = categories
            .iter()
            .map(|c| c.chars().count())
            .max()
            .unwrap_or(8)
            .clamp(8, 24); // "Category" header min, keep the bar on screen

        let peak = state
            .graph_data
            .iter()
            .flat_map(|row| row.values().copied())
            .filter(|v| v.is_finite())
            .fold(0.0_f64, |acc, v| acc.max(v.abs()));

        Self {
            state,
            categories,
            category_width,
            value_width: 9,
            peak,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Rendered table lines, without trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.top_border(), self.header_row(), self.separator()];
        for (index, row) in self.state.graph_data.iter().enumerate() {
            if index > 0 {
                lines.push(self.separator());
            }
            for category in &self.categories {
                let value = row.get(*category).copied().unwrap_or(0.0);
                lines.push(self.data_row(index, category, value));
            }
        }
        lines.push(self.bottom_border());
        lines
    }

    fn data_row(&self, index: usize, category: &str, value: f64) -> String {
        format!(
            "│ {:>3} │ {} │ {:>width_value$.2} │ {} │",
            index,
            truncate(category, self.category_width),
            value,
            bar(value, self.peak, BAR_WIDTH),
            width_value = self.value_width,
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:>3} │ {:<width_category$} │ {:>width_value$} │ {:<width_bar$} │",
            "Row",
            "Category",
            "Value",
            "",
            width_category = self.category_width,
            width_value = self.value_width,
            width_bar = BAR_WIDTH,
        )
    }

    fn top_border(&self) -> String {
        self.border('┌', '┬', '┐')
    }

    fn separator(&self) -> String {
        self.border('├', '┼', '┤')
    }

    fn bottom_border(&self) -> String {
        self.border('└', '┴', '┘')
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        format!(
            "{left}{}{mid}{}{mid}{}{mid}{}{right}",
            "─".repeat(3 + 2),
            "─".repeat(self.category_width + 2),
            "─".repeat(self.value_width + 2),
            "─".repeat(BAR_WIDTH + 2),
        )
    }
}

/// Horizontal bar scaled so `peak` fills `width` cells.
fn bar(value: f64, peak: f64, width: usize) -> String {
    let filled = if peak > 0.0 && value.is_finite() {
        let cells = ((value.abs() / peak) * width as f64).round() as usize;
        cells.min(width)
    } else {
        0
    };
    format!("{}{}", "█".repeat(filled), " ".repeat(width - filled))
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
