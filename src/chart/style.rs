//! Color hints attached to chart data.

use serde::{Serialize, Serializer};

/// Number of distinct series colors before the palette wraps.
pub const SERIES_PALETTE_LEN: usize = 4;

/// Bar color as a theme CSS variable, e.g. `positive` → `var(--color-positive)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartColor(String);

impl ChartColor {
    /// Reference the `--color-{name}` variable of the page theme.
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self(name.to_string())
    }

    #[must_use]
    pub fn primary() -> Self {
        Self::css_var("chart-primary")
    }

    #[must_use]
    pub fn positive() -> Self {
        Self::css_var("positive")
    }

    #[must_use]
    pub fn negative() -> Self {
        Self::css_var("negative")
    }

    /// Color for the `index`-th series of a grouped chart.
    #[must_use]
    pub fn series(index: usize) -> Self {
        Self(format!("series-{}", index % SERIES_PALETTE_LEN + 1))
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("var(--color-{})", self.0)
    }
}

impl Serialize for ChartColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
