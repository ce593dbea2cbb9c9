use crate::calc::roi::RoiResult;
use crate::chart::{ChartColor, ChartOptions, Highlight, Series, layout_grouped_bar_chart};
use crate::format::{MANEN_SUFFIX, format_manen, format_percent};

use super::{ChartPanel, DetailTable, Kpi, Panel, TableRow, Tone};

/// Years shown in the chart; the table always lists every projection year.
const CHART_YEAR_STEP: usize = 2;

fn years_text(years: f64) -> String {
    format!("{years:.1} years")
}

/// Build the real-estate ROI panel: yield metrics and the asset projection.
#[must_use]
pub fn roi_panel(result: &RoiResult, options: &ChartOptions) -> Panel {
    let highlight = Highlight::new(format!(
        "{} annual ROI",
        format_percent(result.annual_roi, 2)
    ))
    .with_secondary(format!(
        "cap rate {}, NOI {}/year",
        format_percent(result.cap_rate, 2),
        format_manen(result.noi)
    ));
    let mut panel = Panel::new("roi", "Real-estate ROI", highlight);

    panel.kpis = vec![
        Kpi::new("Gross rent", format_manen(result.gross_rent))
            .with_note(format!("effective {}", format_manen(result.effective_rent))),
        Kpi::new("Net operating income", format_manen(result.noi))
            .with_note(format!("management {}", format_manen(result.management_cost)))
            .with_tone(Tone::of(result.noi)),
        Kpi::new("Monthly cash flow", format_manen(result.monthly_cash_flow))
            .with_tone(Tone::of(result.monthly_cash_flow)),
        Kpi::new("Total investment", format_manen(result.total_investment))
            .with_note(format!("incl. {} purchase costs", format_manen(result.purchase_costs))),
        Kpi::new(
            "Payback",
            result
                .payback_years
                .map_or_else(|| "never".to_string(), years_text),
        ),
        Kpi::new(
            "Break-even",
            result
                .break_even_year
                .map_or_else(|| "beyond horizon".to_string(), |y| format!("year {y}")),
        ),
    ];

    let shown: Vec<_> = result
        .projection
        .iter()
        .enumerate()
        .filter(|(i, _)| i % CHART_YEAR_STEP == 0 || *i + 1 == result.projection.len())
        .map(|(_, p)| p)
        .collect();
    let categories: Vec<String> = shown.iter().map(|p| format!("Year {}", p.year)).collect();
    let series = vec![
        Series::new(
            "Property value",
            ChartColor::series(0),
            shown.iter().map(|p| p.property_value).collect(),
        ),
        Series::new(
            "Cumulative rent",
            ChartColor::series(1),
            shown.iter().map(|p| p.cumulative_rent).collect(),
        ),
    ];
    let options = options.clone().with_suffix(MANEN_SUFFIX);
    panel.chart = Some(ChartPanel {
        title: "Projected asset value".to_string(),
        layout: layout_grouped_bar_chart(&categories, &series, &options),
    });

    let mut table = DetailTable::new([
        "Year",
        "Property value",
        "Cumulative rent",
        "Total asset",
        "Gain",
    ]);
    for p in &result.projection {
        table.push(
            TableRow::new(vec![
                p.year.to_string(),
                format_manen(p.property_value),
                format_manen(p.cumulative_rent),
                format_manen(p.total_asset),
                format_manen(p.gain),
            ])
            .with_tone(Tone::of(p.gain)),
        );
    }
    panel.table = table;

    panel.notes.push(format!(
        "Rent is not indexed; property value grows {}/year from a {} purchase.",
        format_percent(result.input.appreciation, 1),
        format_manen(result.input.price)
    ));
    panel
}

#[cfg(test)]
#[path = "roi_tests.rs"]
mod tests;
