use crate::calc::tax::{JurisdictionResult, TaxBreakdown, TaxComparison};
use crate::chart::{BarDatum, ChartColor, ChartOptions, Highlight, layout_bar_chart};
use crate::format::{MANEN_SUFFIX, format_manen, format_percent};

use super::{ChartPanel, DetailTable, Kpi, Panel, TableRow, Tone};

fn highlight(cmp: &TaxComparison) -> Highlight {
    match cmp.best_comparator() {
        Some(best) => {
            let savings = best.savings.unwrap_or(0.0);
            Highlight::new(format!("{}/year", format_manen(savings))).with_secondary(format!(
                "saved in {} compared with {}",
                best.name, cmp.reference.name
            ))
        }
        None => Highlight::new(format_manen(cmp.reference.net_income))
            .with_secondary(format!("net income in {}", cmp.reference.name)),
    }
}

fn jurisdiction_kpi(j: &JurisdictionResult) -> Kpi {
    let kpi = Kpi::new(
        format!("{} net income", j.name),
        format_manen(j.net_income),
    )
    .with_note(format!("effective rate {}", format_percent(j.effective_rate, 1)));
    match j.savings {
        Some(savings) => kpi.with_tone(Tone::of(savings)),
        None => kpi,
    }
}

fn breakdown_row(label: &str, all: &[&JurisdictionResult], item: fn(&TaxBreakdown) -> f64) -> TableRow {
    let mut cells = vec![label.to_string()];
    cells.extend(all.iter().map(|j| format_manen(item(&j.breakdown))));
    TableRow::new(cells)
}

fn detail_table(cmp: &TaxComparison) -> DetailTable {
    let all: Vec<&JurisdictionResult> = std::iter::once(&cmp.reference)
        .chain(&cmp.comparators)
        .collect();

    let mut table = DetailTable::new(
        std::iter::once("Item".to_string()).chain(all.iter().map(|j| j.name.clone())),
    );
    table.push(breakdown_row("Income tax", &all, |b| b.income_tax));
    table.push(breakdown_row("Reconstruction surtax", &all, |b| b.surtax));
    table.push(breakdown_row("Resident tax", &all, |b| b.resident));
    table.push(breakdown_row("Social insurance", &all, |b| b.social));
    table.push(breakdown_row("Corporate tax", &all, |b| b.corp_tax));
    table.push(breakdown_row("Total", &all, |b| b.total).emphasized());

    let mut net = vec!["Net income".to_string()];
    net.extend(all.iter().map(|j| format_manen(j.net_income)));
    table.push(TableRow::new(net).emphasized());

    let mut rate = vec!["Effective rate".to_string()];
    rate.extend(all.iter().map(|j| format_percent(j.effective_rate, 1)));
    table.push(TableRow::new(rate));

    let mut savings = vec!["Savings".to_string()];
    savings.extend(all.iter().map(|j| j.savings.map_or_else(|| "-".to_string(), format_manen)));
    table.push(TableRow::new(savings).with_tone(Tone::Positive));
    table
}

/// Build the tax comparison panel: total burden per jurisdiction.
#[must_use]
pub fn tax_panel(cmp: &TaxComparison, options: &ChartOptions) -> Panel {
    let mut panel = Panel::new("tax", "Tax comparison", highlight(cmp));

    panel.kpis.push(Kpi::new("Gross income", format_manen(cmp.input.income)).with_note(format!(
        "{}, {}",
        cmp.input.employment.as_str(),
        cmp.input.family.as_str()
    )));
    panel
        .kpis
        .push(Kpi::new("Taxable income", format_manen(cmp.taxable_income)).with_note(format!(
            "after {} salary deduction",
            format_manen(cmp.salary_deduction)
        )));
    panel.kpis.push(jurisdiction_kpi(&cmp.reference));
    panel.kpis.extend(cmp.comparators.iter().map(jurisdiction_kpi));

    let data: Vec<BarDatum> = std::iter::once((&cmp.reference, ChartColor::negative()))
        .chain(cmp.comparators.iter().map(|c| (c, ChartColor::positive())))
        .map(|(j, color)| {
            BarDatum::new(j.name.clone(), j.breakdown.total)
                .with_color(color)
                .with_sub(format_percent(j.effective_rate, 1))
        })
        .collect();
    let options = options.clone().with_suffix(MANEN_SUFFIX);
    panel.chart = Some(ChartPanel {
        title: "Total tax and social insurance per year".to_string(),
        layout: layout_bar_chart(&data, &options),
    });

    panel.table = detail_table(cmp);
    panel.notes.push(
        "Social insurance is approximated as a flat share of gross income.".to_string(),
    );
    panel
}

#[cfg(test)]
#[path = "tax_tests.rs"]
mod tests;
