use crate::calc::cost::CostComparison;
use crate::chart::{ChartColor, ChartOptions, Highlight, Series, layout_grouped_bar_chart};
use crate::format::{format_manen, format_manen_decimal, format_percent};

use super::{ChartPanel, DetailTable, Kpi, Panel, TableRow, Tone};

/// Decimals shown for cost figures; category values such as 1.5万円 are not whole.
const COST_DECIMALS: usize = 1;

fn cost_cell(value: f64) -> String {
    format_manen_decimal(value, COST_DECIMALS)
}

fn highlight(cmp: &CostComparison) -> Highlight {
    match (cmp.cheapest_city(), cmp.most_expensive_city()) {
        (Some(lo), Some(hi)) if cmp.monthly_difference > 0.0 => Highlight::new(format!(
            "{}/month",
            format_manen(cmp.monthly_difference)
        ))
        .with_secondary(format!(
            "{} costs less than {} ({} per year)",
            lo.name,
            hi.name,
            format_manen(cmp.annual_difference)
        )),
        (Some(lo), _) => Highlight::new(format!("{}/month", cost_cell(lo.monthly_total)))
            .with_secondary(format!("{} living costs", lo.name)),
        _ => Highlight::new(format_manen(0.0)).with_secondary("no cities configured"),
    }
}

/// Build the cost-of-living panel: per-category spend grouped by city.
#[must_use]
pub fn cost_panel(cmp: &CostComparison, options: &ChartOptions) -> Panel {
    let title = format!("Cost of living ({})", cmp.tier.as_str());
    let mut panel = Panel::new("cost", title, highlight(cmp));

    let first_name = cmp.cities.first().map(|c| c.name.as_str()).unwrap_or_default();
    for (i, city) in cmp.cities.iter().enumerate() {
        let kpi = Kpi::new(
            city.name.clone(),
            format!("{}/month", cost_cell(city.monthly_total)),
        );
        let annual = format!("{}/year", cost_cell(city.annual_total));
        // Cheaper than the first city reads as positive.
        let kpi = if i == 0 {
            kpi.with_note(annual)
        } else {
            kpi.with_note(format!(
                "{annual}, {:+.0}% vs {first_name}",
                city.relative_to_first_pct
            ))
            .with_tone(Tone::of(-city.relative_to_first_pct))
        };
        panel.kpis.push(kpi);
    }

    let categories: Vec<String> = cmp.categories.iter().map(|c| c.label.clone()).collect();
    let series: Vec<Series> = cmp
        .cities
        .iter()
        .enumerate()
        .map(|(i, city)| Series::new(city.name.clone(), ChartColor::series(i), city.categories.clone()))
        .collect();
    let options = options
        .clone()
        .with_suffix(crate::format::MANEN_SUFFIX)
        .with_decimals(COST_DECIMALS);
    panel.chart = Some(ChartPanel {
        title: "Monthly spend by category".to_string(),
        layout: layout_grouped_bar_chart(&categories, &series, &options),
    });

    let mut table = DetailTable::new(
        std::iter::once("Category".to_string()).chain(cmp.cities.iter().map(|c| c.name.clone())),
    );
    for (ci, category) in cmp.categories.iter().enumerate() {
        let mut cells = vec![category.label.clone()];
        cells.extend(
            cmp.cities
                .iter()
                .map(|c| cost_cell(c.categories.get(ci).copied().unwrap_or(0.0))),
        );
        table.push(TableRow::new(cells));
    }
    let mut monthly = vec!["Monthly total".to_string()];
    monthly.extend(cmp.cities.iter().map(|c| cost_cell(c.monthly_total)));
    table.push(TableRow::new(monthly).emphasized());
    let mut annual = vec!["Annual total".to_string()];
    annual.extend(cmp.cities.iter().map(|c| cost_cell(c.annual_total)));
    table.push(TableRow::new(annual).emphasized());
    let mut relative = vec!["vs first city".to_string()];
    relative.extend(
        cmp.cities
            .iter()
            .map(|c| format_percent(c.relative_to_first_pct, 1)),
    );
    table.push(TableRow::new(relative));
    panel.table = table;

    panel
}

#[cfg(test)]
#[path = "cost_tests.rs"]
mod tests;
