//! Presentation model shared by every output format.
//!
//! A [`Panel`] has four regions, rendered in order: the highlight, a KPI grid,
//! a chart and a detail table. Builders in the submodules turn calculator
//! results into panels; formatters in `crate::output` only render them.

mod cost;
mod roi;
mod tax;
mod visa;

pub use cost::cost_panel;
pub use roi::roi_panel;
pub use tax::tax_panel;
pub use visa::visa_panel;

use serde::Serialize;

use crate::chart::{ChartLayout, Highlight};

/// Element id of the highlight region in HTML output.
pub const REGION_HIGHLIGHT: &str = "highlight";
/// Element id of the KPI grid region in HTML output.
pub const REGION_KPI_GRID: &str = "kpi-grid";
/// Element id of the chart region in HTML output.
pub const REGION_CHART: &str = "chart";
/// Element id of the detail table region in HTML output.
pub const REGION_DETAIL_TABLE: &str = "detail-table";

/// Styling hint for a KPI or table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Neutral,
    Positive,
    Negative,
}

impl Tone {
    /// Positive for values above zero, negative below, neutral at zero.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub tone: Tone,
}

impl Kpi {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            note: None,
            tone: Tone::Neutral,
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    #[must_use]
    pub const fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub title: String,
    pub layout: ChartLayout,
}

/// One table row; `tone` styles the whole row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub tone: Tone,
    /// Summary rows (totals) are rendered emphasized
    pub emphasis: bool,
}

impl TableRow {
    #[must_use]
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            tone: Tone::Neutral,
            emphasis: false,
        }
    }

    #[must_use]
    pub const fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    #[must_use]
    pub const fn emphasized(mut self) -> Self {
        self.emphasis = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailTable {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl DetailTable {
    #[must_use]
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A fully rendered calculator result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    /// Calculator id: `tax`, `roi`, `cost` or `visa`
    pub kind: &'static str,
    pub title: String,
    /// Reference-table provenance, e.g. tax year and effective date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub highlight: Highlight,
    pub kpis: Vec<Kpi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartPanel>,
    pub table: DetailTable,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Panel {
    #[must_use]
    pub fn new(kind: &'static str, title: impl Into<String>, highlight: Highlight) -> Self {
        Self {
            kind,
            title: title.into(),
            subtitle: None,
            highlight,
            kpis: Vec::new(),
            chart: None,
            table: DetailTable::default(),
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
