use crate::calc::visa::VisaAssessment;
use crate::chart::{BarDatum, ChartColor, ChartOptions, Highlight, layout_bar_chart};

use super::{ChartPanel, DetailTable, Kpi, Panel, TableRow, Tone};

const PASS_MARK: &str = "✓";
const FAIL_MARK: &str = "✗";

/// Build the visa eligibility panel: one checklist per program.
#[must_use]
pub fn visa_panel(assessment: &VisaAssessment, options: &ChartOptions) -> Panel {
    let eligible = assessment.eligible_count();
    let total = assessment.programs.len();
    let secondary = match assessment.eligible().next() {
        Some(first) if eligible == 1 => format!("you likely qualify for {}", first.name),
        Some(_) => "programs you likely qualify for".to_string(),
        None => "no program matches this profile yet".to_string(),
    };
    let mut panel = Panel::new(
        "visa",
        "Visa eligibility",
        Highlight::new(format!("{eligible} / {total}")).with_secondary(secondary),
    );

    panel.kpis = assessment
        .programs
        .iter()
        .map(|p| {
            let verdict = if p.eligible { "Likely eligible" } else { "Not yet" };
            Kpi::new(p.name.clone(), verdict)
                .with_note(format!(
                    "{} of {} required, {}",
                    p.pass_count, p.min_pass, p.duration
                ))
                .with_tone(if p.eligible {
                    Tone::Positive
                } else {
                    Tone::Negative
                })
        })
        .collect();

    let data: Vec<BarDatum> = assessment
        .programs
        .iter()
        .map(|p| {
            #[allow(clippy::cast_precision_loss)] // criterion counts are tiny
            let passed = p.pass_count as f64;
            let color = if p.eligible {
                ChartColor::positive()
            } else {
                ChartColor::negative()
            };
            BarDatum::new(p.name.clone(), passed)
                .with_color(color)
                .with_sub(format!("{} of {} needed", p.pass_count, p.min_pass))
        })
        .collect();
    #[allow(clippy::cast_precision_loss)]
    let most_criteria = assessment
        .programs
        .iter()
        .map(|p| p.criteria.len())
        .max()
        .unwrap_or(0) as f64;
    let options = options
        .clone()
        .with_max_value(most_criteria)
        .with_suffix(" met");
    panel.chart = Some(ChartPanel {
        title: "Criteria met per program".to_string(),
        layout: layout_bar_chart(&data, &options),
    });

    let mut table = DetailTable::new(["Program", "Criterion", "Status"]);
    for program in &assessment.programs {
        for criterion in &program.criteria {
            let (mark, tone) = if criterion.passed {
                (PASS_MARK, Tone::Positive)
            } else {
                (FAIL_MARK, Tone::Negative)
            };
            table.push(
                TableRow::new(vec![
                    program.name.clone(),
                    criterion.label.clone(),
                    mark.to_string(),
                ])
                .with_tone(tone),
            );
        }
    }
    panel.table = table;
    panel
        .notes
        .push("Eligibility is indicative; programs also review documents in person.".to_string());
    panel
}

#[cfg(test)]
#[path = "visa_tests.rs"]
mod tests;
