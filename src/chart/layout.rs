//! Bar chart layout: scaling, row widths and the staggered reveal order.
//!
//! Layout is pure data. Renderers in `crate::output` turn a [`ChartLayout`]
//! into terminal bars, SVG or JSON; none of them recompute widths.

use serde::{Deserialize, Serialize};

use super::data::{BarDatum, Series};
use super::style::ChartColor;
use crate::format::format_decimal;

/// Delays for the staggered entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTiming {
    /// Delay before the first row starts
    pub base_ms: u64,
    /// Per-row step for flat charts
    pub step_ms: u64,
    /// Per-category step for grouped charts
    pub category_step_ms: u64,
    /// Per-series step inside a category for grouped charts
    pub series_step_ms: u64,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            base_ms: 100,
            step_ms: 80,
            category_step_ms: 120,
            series_step_ms: 40,
        }
    }
}

/// Rendering options shared by flat and grouped charts.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    /// Prefix for value labels
    pub unit: String,
    /// Suffix for value labels
    pub suffix: String,
    /// Scale ceiling override; the data maximum still wins when larger
    pub max_value: Option<f64>,
    pub show_value: bool,
    /// Decimals shown in value labels
    pub decimals: usize,
    pub animate: bool,
    pub reveal: RevealTiming,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            unit: String::new(),
            suffix: String::new(),
            max_value: None,
            show_value: true,
            decimals: 0,
            animate: true,
            reveal: RevealTiming::default(),
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    #[must_use]
    pub const fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    #[must_use]
    pub const fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub const fn with_show_value(mut self, show: bool) -> Self {
        self.show_value = show;
        self
    }

    #[must_use]
    pub const fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    #[must_use]
    pub const fn with_reveal(mut self, reveal: RevealTiming) -> Self {
        self.reveal = reveal;
        self
    }

    fn value_text(&self, value: f64) -> Option<String> {
        self.show_value.then(|| {
            format!(
                "{}{}{}",
                self.unit,
                format_decimal(value, self.decimals),
                self.suffix
            )
        })
    }
}

/// One rendered bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarRow {
    pub label: String,
    pub value: f64,
    /// Bar length as a percentage of the chart width, in `[0, 100]`
    pub width_pct: f64,
    pub negative: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ChartColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_text: Option<String>,
    /// Category index for grouped charts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<usize>,
    /// Series index for grouped charts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: ChartColor,
}

/// When a row starts its entrance transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealStep {
    pub row: usize,
    pub delay_ms: u64,
}

/// Fully computed chart, ready for any renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub scale: f64,
    /// Category labels; empty for flat charts
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legend: Vec<LegendEntry>,
    pub rows: Vec<BarRow>,
    /// Reveal order; empty when animation is off
    pub reveal: Vec<RevealStep>,
}

impl ChartLayout {
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        !self.groups.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reveal delay for a row, if animation is on.
    #[must_use]
    pub fn delay_for(&self, row: usize) -> Option<u64> {
        self.reveal
            .iter()
            .find(|step| step.row == row)
            .map(|step| step.delay_ms)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// `max(max_value, max |v|, 1)`; the floor of 1 keeps all-zero data at 0% width.
fn compute_scale(values: impl Iterator<Item = f64>, max_value: Option<f64>) -> f64 {
    let data_max = values
        .map(|v| finite_or_zero(v).abs())
        .fold(0.0_f64, f64::max);
    let ceiling = max_value.map_or(0.0, finite_or_zero);
    data_max.max(ceiling).max(1.0)
}

fn width_pct(value: f64, scale: f64) -> f64 {
    (finite_or_zero(value).abs() / scale * 100.0).min(100.0)
}

/// Lay out a flat horizontal bar chart.
#[must_use]
pub fn layout_bar_chart(data: &[BarDatum], options: &ChartOptions) -> ChartLayout {
    let scale = compute_scale(data.iter().map(|d| d.value), options.max_value);

    let rows: Vec<BarRow> = data
        .iter()
        .map(|d| {
            let value = finite_or_zero(d.value);
            BarRow {
                label: d.label.clone(),
                value,
                width_pct: width_pct(value, scale),
                negative: value < 0.0,
                color: d.color.clone(),
                sub: d.sub.clone(),
                value_text: options.value_text(value),
                group: None,
                series: None,
            }
        })
        .collect();

    let reveal = if options.animate {
        let timing = options.reveal;
        (0..rows.len())
            .map(|row| RevealStep {
                row,
                delay_ms: timing
                    .base_ms
                    .saturating_add((row as u64).saturating_mul(timing.step_ms.max(1))),
            })
            .collect()
    } else {
        Vec::new()
    };

    ChartLayout {
        scale,
        groups: Vec::new(),
        legend: Vec::new(),
        rows,
        reveal,
    }
}

/// Lay out a grouped chart: one row per (category, series), category-major,
/// all rows sharing a single scale.
#[must_use]
pub fn layout_grouped_bar_chart(
    categories: &[String],
    series: &[Series],
    options: &ChartOptions,
) -> ChartLayout {
    for s in series {
        if s.values.len() != categories.len() {
            tracing::warn!(
                series = %s.name,
                expected = categories.len(),
                actual = s.values.len(),
                "series length does not match category count; missing values read as 0"
            );
        }
    }

    let value_at = |s: &Series, ci: usize| s.values.get(ci).copied().map_or(0.0, finite_or_zero);

    let scale = compute_scale(
        (0..categories.len()).flat_map(|ci| series.iter().map(move |s| value_at(s, ci))),
        options.max_value,
    );

    let legend = series
        .iter()
        .map(|s| LegendEntry {
            name: s.name.clone(),
            color: s.color.clone(),
        })
        .collect();

    let timing = options.reveal;
    let series_step = timing.series_step_ms.max(1);
    // A category never starts before the previous category's last row.
    let category_step = timing
        .category_step_ms
        .max(series_step.saturating_mul(series.len() as u64));

    let mut rows = Vec::with_capacity(categories.len() * series.len());
    let mut reveal = Vec::new();
    for (ci, _) in categories.iter().enumerate() {
        for (si, s) in series.iter().enumerate() {
            let value = value_at(s, ci);
            if options.animate {
                reveal.push(RevealStep {
                    row: rows.len(),
                    delay_ms: timing
                        .base_ms
                        .saturating_add((ci as u64).saturating_mul(category_step))
                        .saturating_add((si as u64).saturating_mul(series_step)),
                });
            }
            rows.push(BarRow {
                label: s.name.clone(),
                value,
                width_pct: width_pct(value, scale),
                negative: value < 0.0,
                color: Some(s.color.clone()),
                sub: None,
                value_text: options.value_text(value),
                group: Some(ci),
                series: Some(si),
            });
        }
    }

    ChartLayout {
        scale,
        groups: categories.to_vec(),
        legend,
        rows,
        reveal,
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
