//! Horizontal bar chart rendered from a precomputed [`ChartLayout`].

use std::fmt::Write;

use crate::chart::{ChartColor, ChartLayout};
use crate::format::html_escape;

use super::element::{Bar, LegendItem, SvgElement, Text, TextAnchor};

/// Horizontal bar chart; flat or grouped depending on the layout.
#[derive(Debug)]
pub struct HorizontalBarChart<'a> {
    pub title: &'a str,
    pub layout: &'a ChartLayout,
    pub width: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub bar_height: f64,
    pub bar_gap: f64,
    /// Vertical space for a category label in grouped charts
    pub group_label_height: f64,
    pub legend_height: f64,
}

impl<'a> HorizontalBarChart<'a> {
    #[must_use]
    pub const fn new(title: &'a str, layout: &'a ChartLayout) -> Self {
        Self {
            title,
            layout,
            width: 560.0,
            padding_left: 140.0,
            padding_right: 90.0,
            padding_top: 10.0,
            padding_bottom: 10.0,
            bar_height: 22.0,
            bar_gap: 6.0,
            group_label_height: 22.0,
            legend_height: 24.0,
        }
    }

    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    fn legend_space(&self) -> f64 {
        if self.layout.legend.is_empty() {
            0.0
        } else {
            self.legend_height
        }
    }

    /// Total drawing height for the layout's rows, group labels and legend.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // row counts are small
    pub fn height(&self) -> f64 {
        if self.layout.is_empty() {
            return 60.0;
        }
        let rows = self.layout.rows.len() as f64;
        let groups = self.layout.groups.len() as f64;
        (self.bar_height + self.bar_gap).mul_add(
            rows,
            self.group_label_height.mul_add(
                groups,
                self.padding_top + self.padding_bottom + self.legend_space(),
            ),
        )
    }

    fn default_color(negative: bool) -> ChartColor {
        if negative {
            ChartColor::negative()
        } else {
            ChartColor::primary()
        }
    }
}

impl SvgElement for HorizontalBarChart<'_> {
    fn render(&self) -> String {
        let mut output = String::new();
        let height = self.height();

        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {} {height}" xmlns="http://www.w3.org/2000/svg" role="img">"#,
            self.width
        );
        let _ = writeln!(output, r"    <title>{}</title>", html_escape(self.title));

        if self.layout.is_empty() {
            let empty = Text::new(self.width / 2.0, height / 2.0, "No data available")
                .with_anchor(TextAnchor::Middle)
                .with_font_size(14.0)
                .with_color(ChartColor::css_var("text-muted"));
            let _ = writeln!(output, "    {}", empty.render());
            output.push_str("</svg>");
            return output;
        }

        let mut y = self.padding_top;

        if !self.layout.legend.is_empty() {
            let mut x = self.padding_left;
            for entry in &self.layout.legend {
                let item = LegendItem {
                    x,
                    y: y + 2.0,
                    size: 10.0,
                    color: entry.color.clone(),
                    name: entry.name.clone(),
                };
                let _ = writeln!(output, "    {}", item.render());
                #[allow(clippy::cast_precision_loss)]
                let advance = 7.0_f64.mul_add(entry.name.chars().count() as f64, 28.0);
                x += advance;
            }
            y += self.legend_height;
        }

        let chart_width = self.width - self.padding_left - self.padding_right;
        let mut current_group = None;

        for (i, row) in self.layout.rows.iter().enumerate() {
            if row.group != current_group {
                current_group = row.group;
                if let Some(name) = row.group.and_then(|g| self.layout.groups.get(g)) {
                    let label = Text::new(8.0, y + self.group_label_height / 2.0, name).bold();
                    let _ = writeln!(output, "    {}", label.render());
                    y += self.group_label_height;
                }
            }

            let bar_width = row.width_pct / 100.0 * chart_width;
            let value_text = row.value_text.clone().unwrap_or_default();
            let mut title = format!("{}: {value_text}", row.label);
            if let Some(sub) = &row.sub {
                let _ = write!(title, " ({sub})");
            }
            let bar = Bar {
                x: self.padding_left,
                y,
                width: bar_width,
                height: self.bar_height,
                color: row
                    .color
                    .clone()
                    .unwrap_or_else(|| Self::default_color(row.negative)),
                title,
                reveal_delay_ms: self.layout.delay_for(i),
            };
            let _ = writeln!(output, "    {}", bar.render());

            let mid = y + self.bar_height / 2.0;
            let label = Text::new(self.padding_left - 8.0, mid, &row.label)
                .with_anchor(TextAnchor::End);
            let _ = writeln!(output, "    {}", label.render());

            if !value_text.is_empty() {
                let value = Text::new(self.padding_left + bar_width + 6.0, mid, value_text)
                    .with_font_size(11.0)
                    .with_color(ChartColor::css_var("text-muted"));
                let _ = writeln!(output, "    {}", value.render());
            }

            y += self.bar_height + self.bar_gap;
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
