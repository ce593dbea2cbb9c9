use std::fmt::Write;

use crate::error::Result;
use crate::format::html_escape;
use crate::report::{
    DetailTable, Panel, REGION_CHART, REGION_DETAIL_TABLE, REGION_HIGHLIGHT, REGION_KPI_GRID,
    Tone,
};

use super::PanelFormatter;
use super::html_template::{HTML_FOOTER, HTML_HEAD_CLOSE, HTML_HEAD_OPEN};
use super::svg::{HorizontalBarChart, SvgElement};

/// Standalone HTML page with an inline SVG chart.
pub struct HtmlFormatter {
    chart_width: f64,
}

impl HtmlFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { chart_width: 560.0 }
    }

    #[must_use]
    pub const fn with_chart_width(mut self, width: f64) -> Self {
        self.chart_width = width;
        self
    }

    const fn tone_class(tone: Tone) -> &'static str {
        match tone {
            Tone::Neutral => "",
            Tone::Positive => " positive",
            Tone::Negative => " negative",
        }
    }

    fn write_table(table: &DetailTable, output: &mut String) {
        let _ = writeln!(
            output,
            r#"        <section id="{REGION_DETAIL_TABLE}" class="table-container">"#
        );
        output.push_str("            <table>\n                <thead><tr>");
        for header in &table.headers {
            let _ = write!(output, "<th>{}</th>", html_escape(header));
        }
        output.push_str("</tr></thead>\n                <tbody>\n");
        for row in &table.rows {
            let mut class = String::new();
            if row.emphasis {
                class.push_str("emphasis");
            }
            class.push_str(Self::tone_class(row.tone));
            let class = class.trim();
            if class.is_empty() {
                output.push_str("                    <tr>");
            } else {
                let _ = write!(output, r#"                    <tr class="{class}">"#);
            }
            for cell in &row.cells {
                let _ = write!(output, "<td>{}</td>", html_escape(cell));
            }
            output.push_str("</tr>\n");
        }
        output.push_str("                </tbody>\n            </table>\n        </section>\n");
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelFormatter for HtmlFormatter {
    fn format(&self, panel: &Panel) -> Result<String> {
        let mut output = String::new();
        output.push_str(HTML_HEAD_OPEN);
        let _ = write!(output, "{} - reloc-sim", html_escape(&panel.title));
        output.push_str(HTML_HEAD_CLOSE);

        let _ = writeln!(
            output,
            r#"        <h1 data-kind="{}">{}</h1>"#,
            panel.kind,
            html_escape(&panel.title)
        );
        if let Some(subtitle) = &panel.subtitle {
            let _ = writeln!(
                output,
                r#"        <p class="subtitle">{}</p>"#,
                html_escape(subtitle)
            );
        }

        let _ = writeln!(output, r#"        <section id="{REGION_HIGHLIGHT}">"#);
        let _ = writeln!(
            output,
            r#"            <span class="primary">{}</span>"#,
            html_escape(&panel.highlight.primary)
        );
        if let Some(secondary) = &panel.highlight.secondary {
            let _ = writeln!(
                output,
                r#"            <span class="secondary">{}</span>"#,
                html_escape(secondary)
            );
        }
        output.push_str("        </section>\n");

        let _ = writeln!(output, r#"        <section id="{REGION_KPI_GRID}">"#);
        for kpi in &panel.kpis {
            let _ = writeln!(
                output,
                r#"            <div class="kpi{}"><span class="label">{}</span><span class="value">{}</span>{}</div>"#,
                Self::tone_class(kpi.tone),
                html_escape(&kpi.label),
                html_escape(&kpi.value),
                kpi.note.as_deref().map_or_else(String::new, |n| format!(
                    r#"<span class="note">{}</span>"#,
                    html_escape(n)
                ))
            );
        }
        output.push_str("        </section>\n");

        let _ = writeln!(
            output,
            r#"        <section id="{REGION_CHART}" class="chart-container">"#
        );
        if let Some(chart) = &panel.chart {
            let _ = writeln!(output, "            <h2>{}</h2>", html_escape(&chart.title));
            let svg = HorizontalBarChart::new(&chart.title, &chart.layout)
                .with_width(self.chart_width)
                .render();
            output.push_str(&svg);
            output.push('\n');
        }
        output.push_str("        </section>\n");

        Self::write_table(&panel.table, &mut output);

        if !panel.notes.is_empty() {
            output.push_str("        <ul class=\"notes\">\n");
            for note in &panel.notes {
                let _ = writeln!(output, "            <li>{}</li>", html_escape(note));
            }
            output.push_str("        </ul>\n");
        }

        output.push_str(HTML_FOOTER);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
