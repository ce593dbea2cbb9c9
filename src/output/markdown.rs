use std::fmt::Write;

use crate::chart::ChartLayout;
use crate::error::Result;
use crate::report::{DetailTable, Panel, Tone};

use super::PanelFormatter;

/// Width of the inline text bars in the chart table.
const MD_BAR_CELLS: usize = 20;

/// GitHub-flavored Markdown renderer.
pub struct MarkdownFormatter {
    bar_cells: usize,
}

impl MarkdownFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bar_cells: MD_BAR_CELLS,
        }
    }

    const fn tone_icon(tone: Tone) -> &'static str {
        match tone {
            Tone::Positive => "🟢 ",
            Tone::Negative => "🔴 ",
            Tone::Neutral => "",
        }
    }

    /// Pipes would split a cell.
    fn cell(text: &str) -> String {
        text.replace('|', "\\|")
    }

    fn bar(&self, width_pct: f64) -> String {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let filled =
            ((width_pct.clamp(0.0, 100.0) / 100.0) * self.bar_cells as f64).round() as usize;
        "█".repeat(filled)
    }

    fn format_chart(&self, title: &str, layout: &ChartLayout, output: &mut String) {
        writeln!(output, "## {title}\n").ok();
        if layout.is_empty() {
            writeln!(output, "_No data_\n").ok();
            return;
        }

        if layout.is_grouped() {
            writeln!(output, "| Category | Series | Bar | Value |").ok();
            writeln!(output, "|----------|--------|-----|------:|").ok();
        } else {
            writeln!(output, "| Item | Bar | Value |").ok();
            writeln!(output, "|------|-----|------:|").ok();
        }
        for row in &layout.rows {
            let value = row.value_text.as_deref().unwrap_or_default();
            let bar = self.bar(row.width_pct);
            if layout.is_grouped() {
                let group = row
                    .group
                    .and_then(|g| layout.groups.get(g))
                    .map_or("", String::as_str);
                writeln!(
                    output,
                    "| {} | {} | `{bar}` | {} |",
                    Self::cell(group),
                    Self::cell(&row.label),
                    Self::cell(value)
                )
                .ok();
            } else {
                writeln!(
                    output,
                    "| {} | `{bar}` | {} |",
                    Self::cell(&row.label),
                    Self::cell(value)
                )
                .ok();
            }
        }
        output.push('\n');
    }

    fn format_table(table: &DetailTable, output: &mut String) {
        writeln!(output, "## Details\n").ok();
        let headers: Vec<String> = table.headers.iter().map(|h| Self::cell(h)).collect();
        writeln!(output, "| {} |", headers.join(" | ")).ok();
        let align: Vec<&str> = (0..table.headers.len())
            .map(|i| if i == 0 { "---" } else { "--:" })
            .collect();
        writeln!(output, "|{}|", align.join("|")).ok();
        for row in &table.rows {
            let cells: Vec<String> = row
                .cells
                .iter()
                .map(|c| {
                    let c = Self::cell(c);
                    if row.emphasis { format!("**{c}**") } else { c }
                })
                .collect();
            writeln!(output, "| {} |", cells.join(" | ")).ok();
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelFormatter for MarkdownFormatter {
    fn format(&self, panel: &Panel) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# {}\n", panel.title).ok();
        if let Some(subtitle) = &panel.subtitle {
            writeln!(output, "_{subtitle}_\n").ok();
        }

        writeln!(output, "> **{}**", panel.highlight.primary).ok();
        if let Some(secondary) = &panel.highlight.secondary {
            writeln!(output, ">\n> {secondary}").ok();
        }
        output.push('\n');

        if !panel.kpis.is_empty() {
            writeln!(output, "| Metric | Value | Note |").ok();
            writeln!(output, "|--------|------:|------|").ok();
            for kpi in &panel.kpis {
                writeln!(
                    output,
                    "| {} | {}{} | {} |",
                    Self::cell(&kpi.label),
                    Self::tone_icon(kpi.tone),
                    Self::cell(&kpi.value),
                    Self::cell(kpi.note.as_deref().unwrap_or_default())
                )
                .ok();
            }
            output.push('\n');
        }

        if let Some(chart) = &panel.chart {
            self.format_chart(&chart.title, &chart.layout, &mut output);
        }

        if !panel.table.is_empty() {
            Self::format_table(&panel.table, &mut output);
        }

        for note in &panel.notes {
            writeln!(output, "- {note}").ok();
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
