use std::fmt::Write;

use crate::chart::ChartLayout;
use crate::config::{DEFAULT_TEXT_BAR_WIDTH, MAX_TEXT_BAR_WIDTH};
use crate::error::Result;
use crate::report::{DetailTable, Panel, Tone};

use super::{ColorMode, PanelFormatter, ansi};

const BAR_FILL: char = '█';
const BAR_EMPTY: char = '░';

/// Terminal renderer: highlight, KPI list, unicode bar chart and an aligned table.
pub struct TextFormatter {
    use_colors: bool,
    bar_width: usize,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            bar_width: DEFAULT_TEXT_BAR_WIDTH,
        }
    }

    /// Number of cells a 100% bar occupies, clamped to `1..=MAX_TEXT_BAR_WIDTH`.
    #[must_use]
    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.clamp(1, MAX_TEXT_BAR_WIDTH);
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn paint_tone(&self, text: &str, tone: Tone) -> String {
        match tone {
            Tone::Positive => self.paint(text, ansi::GREEN),
            Tone::Negative => self.paint(text, ansi::RED),
            Tone::Neutral => text.to_string(),
        }
    }

    fn bar(&self, width_pct: f64) -> String {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let filled = ((width_pct.clamp(0.0, 100.0) / 100.0) * self.bar_width as f64).round()
            as usize;
        let mut bar = String::with_capacity(self.bar_width.saturating_mul(BAR_FILL.len_utf8()));
        bar.extend(std::iter::repeat_n(BAR_FILL, filled));
        bar.extend(std::iter::repeat_n(BAR_EMPTY, self.bar_width - filled.min(self.bar_width)));
        bar
    }

    fn format_chart(&self, title: &str, layout: &ChartLayout, output: &mut String) {
        writeln!(output, "{}", self.paint(title, ansi::BOLD)).ok();
        if layout.is_empty() {
            writeln!(output, "  (no data)").ok();
            return;
        }

        let label_width = layout
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);
        let indent = if layout.is_grouped() { "    " } else { "  " };
        let mut current_group = None;

        for row in &layout.rows {
            if row.group != current_group {
                current_group = row.group;
                if let Some(name) = row.group.and_then(|g| layout.groups.get(g)) {
                    writeln!(output, "  {name}").ok();
                }
            }
            let bar = self.bar(row.width_pct);
            let bar = if row.negative {
                self.paint(&bar, ansi::RED)
            } else {
                self.paint(&bar, ansi::CYAN)
            };
            let pad = label_width - row.label.chars().count();
            write!(output, "{indent}{}{} {bar}", row.label, " ".repeat(pad)).ok();
            if let Some(value) = &row.value_text {
                write!(output, " {value}").ok();
            }
            if let Some(sub) = &row.sub {
                write!(output, " {}", self.paint(&format!("({sub})"), ansi::DIM)).ok();
            }
            output.push('\n');
        }
    }

    fn format_table(&self, table: &DetailTable, output: &mut String) {
        let columns = table
            .rows
            .iter()
            .map(|r| r.cells.len())
            .chain(std::iter::once(table.headers.len()))
            .max()
            .unwrap_or(0);
        let mut widths = vec![0; columns];
        for cells in std::iter::once(&table.headers).chain(table.rows.iter().map(|r| &r.cells)) {
            for (i, cell) in cells.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let render = |cells: &[String]| -> String {
            let mut line = String::from(" ");
            for (i, width) in widths.iter().enumerate() {
                let cell = cells.get(i).map_or("", String::as_str);
                let pad = " ".repeat(width - cell.chars().count());
                // First column is a label; the rest are figures.
                if i == 0 {
                    write!(line, " {cell}{pad}").ok();
                } else {
                    write!(line, "  {pad}{cell}").ok();
                }
            }
            line.trim_end().to_string()
        };

        writeln!(output, "{}", self.paint(&render(&table.headers), ansi::BOLD)).ok();
        let rule_len = widths.iter().sum::<usize>() + 2 * columns;
        writeln!(output, "  {}", "─".repeat(rule_len.saturating_sub(1))).ok();
        for row in &table.rows {
            let line = render(&row.cells);
            let line = if row.emphasis {
                self.paint(&line, ansi::BOLD)
            } else {
                line
            };
            writeln!(output, "{}", self.paint_tone(&line, row.tone)).ok();
        }
    }
}

impl PanelFormatter for TextFormatter {
    fn format(&self, panel: &Panel) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "{}", self.paint(&panel.title, ansi::BOLD)).ok();
        if let Some(subtitle) = &panel.subtitle {
            writeln!(output, "{}", self.paint(subtitle, ansi::DIM)).ok();
        }
        output.push('\n');

        let primary = self.paint(&panel.highlight.primary, ansi::GREEN);
        writeln!(output, "  {}", self.paint(&primary, ansi::BOLD)).ok();
        if let Some(secondary) = &panel.highlight.secondary {
            writeln!(output, "  {secondary}").ok();
        }

        if !panel.kpis.is_empty() {
            output.push('\n');
            let label_width = panel
                .kpis
                .iter()
                .map(|k| k.label.chars().count())
                .max()
                .unwrap_or(0);
            for kpi in &panel.kpis {
                let pad = " ".repeat(label_width - kpi.label.chars().count());
                let value = self.paint_tone(&kpi.value, kpi.tone);
                write!(output, "  {}{pad}  {value}", kpi.label).ok();
                if let Some(note) = &kpi.note {
                    write!(output, "  {}", self.paint(note, ansi::DIM)).ok();
                }
                output.push('\n');
            }
        }

        if let Some(chart) = &panel.chart {
            output.push('\n');
            self.format_chart(&chart.title, &chart.layout, &mut output);
        }

        if !panel.table.is_empty() {
            output.push('\n');
            self.format_table(&panel.table, &mut output);
        }

        if !panel.notes.is_empty() {
            output.push('\n');
            for note in &panel.notes {
                writeln!(output, "{}", self.paint(&format!("note: {note}"), ansi::YELLOW)).ok();
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
