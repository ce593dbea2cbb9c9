use super::*;
use crate::calc::roi::{RoiInput, calculate};
use crate::chart::ChartOptions;
use crate::report::roi_panel;

fn roi_json(animate: bool) -> serde_json::Value {
    let input = RoiInput {
        price: 5000.0,
        gross_yield: 6.5,
        management_fee: 3.0,
        vacancy: 5.0,
        purchase_cost: 7.0,
        appreciation: 3.0,
    };
    let result = calculate(&input, 10).unwrap();
    let panel = roi_panel(&result, &ChartOptions::default().with_animate(animate));
    let text = JsonFormatter.format(&panel).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn carries_generator_and_panel_fields() {
    let json = roi_json(true);
    assert_eq!(json["generator"], "reloc-sim");
    assert_eq!(json["kind"], "roi");
    assert!(json["highlight"]["primary"].as_str().unwrap().ends_with("annual ROI"));
    assert!(json["kpis"].as_array().unwrap().len() >= 4);
}

#[test]
fn includes_reveal_order() {
    let json = roi_json(true);
    let layout = &json["chart"]["layout"];
    let rows = layout["rows"].as_array().unwrap().len();
    let reveal = layout["reveal"].as_array().unwrap();
    assert_eq!(reveal.len(), rows);
    assert_eq!(reveal[0]["row"], 0);
    assert!(reveal[0]["delay_ms"].as_u64().is_some());
}

#[test]
fn reveal_is_empty_without_animation() {
    let json = roi_json(false);
    assert!(json["chart"]["layout"]["reveal"].as_array().unwrap().is_empty());
}

#[test]
fn colors_serialize_as_css() {
    let json = roi_json(true);
    let legend = json["chart"]["layout"]["legend"].as_array().unwrap();
    assert_eq!(legend[0]["color"], "var(--color-series-1)");
}

#[test]
fn output_ends_with_newline() {
    let panel = Panel::new("visa", "V", crate::chart::Highlight::new("0 / 0"));
    assert!(JsonFormatter.format(&panel).unwrap().ends_with("}\n"));
}
