//! Chart data model.

use super::style::ChartColor;

/// A single labeled value for a bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    /// Label shown next to the bar
    pub label: String,
    /// Numeric value; the sign is shown as styling, the magnitude drives bar length
    pub value: f64,
    /// Optional color override
    pub color: Option<ChartColor>,
    /// Optional annotation rendered under the label
    pub sub: Option<String>,
}

impl BarDatum {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
            sub: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_sub(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }
}

/// A named series for grouped bar charts: one value per category.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: ChartColor,
    pub values: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, color: ChartColor, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color,
            values,
        }
    }
}
