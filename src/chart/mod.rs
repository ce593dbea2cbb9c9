//! Renderer-independent chart model.
//!
//! Calculators hand [`BarDatum`]s or [`Series`] to the layout functions and get
//! back a [`ChartLayout`]: the shared scale, per-row widths and a declared
//! reveal order for the entrance animation.

mod data;
mod highlight;
mod layout;
mod style;

pub use data::{BarDatum, Series};
pub use highlight::Highlight;
pub use layout::{
    BarRow, ChartLayout, ChartOptions, LegendEntry, RevealStep, RevealTiming,
    layout_bar_chart, layout_grouped_bar_chart,
};
pub use style::{ChartColor, SERIES_PALETTE_LEN};
