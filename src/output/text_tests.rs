use super::*;
use crate::calc::cost::{CostInput, CostTables, Tier, compare};
use crate::chart::{BarDatum, ChartOptions, Highlight, layout_bar_chart};
use crate::report::{ChartPanel, Kpi, TableRow, cost_panel};

fn cost() -> Panel {
    let cmp = compare(
        &CostInput {
            tier: Tier::Standard,
        },
        &CostTables::default(),
    );
    cost_panel(&cmp, &ChartOptions::default())
}

fn plain() -> TextFormatter {
    TextFormatter::new(ColorMode::Never)
}

fn bar_panel(values: &[(&str, f64)]) -> Panel {
    let data: Vec<BarDatum> = values.iter().map(|(l, v)| BarDatum::new(*l, *v)).collect();
    let mut panel = Panel::new("tax", "Bars", Highlight::new("x"));
    panel.chart = Some(ChartPanel {
        title: "Chart".to_string(),
        layout: layout_bar_chart(&data, &ChartOptions::default()),
    });
    panel
}

#[test]
fn renders_regions_in_order() {
    let out = plain().format(&cost()).unwrap();
    let title = out.find("Cost of living (standard)").unwrap();
    let highlight = out.find("12万円/month").unwrap();
    let chart = out.find("Monthly spend by category").unwrap();
    let table = out.find("Monthly total").unwrap();
    assert!(title < highlight && highlight < chart && chart < table);
}

#[test]
fn never_mode_has_no_escape_codes() {
    let out = plain().format(&cost()).unwrap();
    assert!(!out.contains('\x1b'));
}

#[test]
fn always_mode_colors_output() {
    let out = TextFormatter::new(ColorMode::Always)
        .format(&cost())
        .unwrap();
    assert!(out.contains(ansi::RESET));
    assert!(out.contains(ansi::GREEN));
}

#[test]
fn grouped_chart_prints_category_headers() {
    let out = plain().format(&cost()).unwrap();
    assert!(out.contains("\n  Housing\n"));
    assert!(out.contains("\n    Tokyo "));
}

#[test]
fn full_bar_fills_configured_width() {
    let out = plain()
        .with_bar_width(10)
        .format(&bar_panel(&[("a", 50.0), ("b", 100.0)]))
        .unwrap();
    assert!(out.contains(&format!("b {} 100", "█".repeat(10))));
    assert!(out.contains(&format!("a {}{} 50", "█".repeat(5), "░".repeat(5))));
}

#[test]
fn zero_data_draws_empty_bars() {
    let out = plain()
        .with_bar_width(4)
        .format(&bar_panel(&[("a", 0.0)]))
        .unwrap();
    assert!(out.contains("a ░░░░ 0"));
}

#[test]
fn zero_bar_width_is_clamped() {
    let out = plain()
        .with_bar_width(0)
        .format(&bar_panel(&[("a", 1.0)]))
        .unwrap();
    assert!(out.contains("a █ 1"));
}

#[test]
fn huge_bar_width_is_clamped() {
    let out = plain()
        .with_bar_width(usize::MAX)
        .format(&bar_panel(&[("a", 1.0)]))
        .unwrap();
    let bar_line = out.lines().find(|l| l.contains('█')).unwrap();
    assert_eq!(bar_line.matches('█').count(), crate::config::MAX_TEXT_BAR_WIDTH);
}

#[test]
fn empty_chart_says_no_data() {
    let out = plain().format(&bar_panel(&[])).unwrap();
    assert!(out.contains("(no data)"));
}

#[test]
fn table_columns_are_aligned() {
    let mut panel = Panel::new("cost", "T", Highlight::new("x"));
    panel.table = DetailTable::new(["Item", "Value"]);
    panel
        .table
        .push(TableRow::new(vec!["Rent".to_string(), "12".to_string()]));
    panel
        .table
        .push(TableRow::new(vec!["Groceries".to_string(), "3".to_string()]));
    let out = plain().format(&panel).unwrap();
    assert!(out.contains(&format!("  Rent{}12\n", " ".repeat(10))));
    assert!(out.contains(&format!("  Groceries{}3\n", " ".repeat(6))));
}

#[test]
fn kpi_notes_follow_values() {
    let mut panel = Panel::new("roi", "T", Highlight::new("x"));
    panel.kpis.push(Kpi::new("NOI", "299万円").with_note("per year"));
    let out = plain().format(&panel).unwrap();
    assert!(out.contains("  NOI  299万円  per year\n"));
}

#[test]
fn notes_are_printed_last() {
    let out = plain().format(&cost()).unwrap();
    let mut panel = cost();
    panel.notes.push("indicative only".to_string());
    let with_note = plain().format(&panel).unwrap();
    assert!(!out.contains("note:"));
    assert!(with_note.trim_end().ends_with("note: indicative only"));
}
