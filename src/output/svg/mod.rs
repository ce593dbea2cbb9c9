//! SVG chart rendering for HTML reports.
//!
//! Charts are drawn from a precomputed `ChartLayout`:
//! - viewBox-based scaling (renders at any size)
//! - CSS variable colors (`var(--color-*)`) so the page theme applies
//! - `<title>` elements for screen readers
//! - `<animate>` on each bar following the layout's reveal order

mod chart;
mod element;

pub use chart::HorizontalBarChart;
pub use element::{Bar, LegendItem, REVEAL_DURATION_MS, SvgElement, Text, TextAnchor};
