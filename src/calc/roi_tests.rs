use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn example() -> RoiInput {
    RoiInput {
        price: 5_000.0,
        gross_yield: 6.5,
        management_fee: 3.0,
        vacancy: 5.0,
        purchase_cost: 7.0,
        appreciation: 0.0,
    }
}

#[test]
fn worked_example() {
    let r = calculate(&example(), 10).unwrap();

    assert!(close(r.gross_rent, 325.0));
    assert!(close(r.effective_rent, 308.75));
    assert!(close(r.noi, 299.4875));
    assert!(close(r.total_investment, 5_350.0));
    assert!((r.annual_roi - 5.598).abs() < 1e-3);
    assert!((r.cap_rate - 5.990).abs() < 1e-3);
}

#[test]
fn year_zero_gain_is_minus_purchase_costs() {
    for appreciation in [0.0, 3.0, -2.0] {
        let input = RoiInput {
            appreciation,
            ..example()
        };
        let r = calculate(&input, 10).unwrap();
        assert_eq!(r.projection[0].year, 0);
        assert!(close(r.projection[0].gain, -350.0));
    }
}

#[test]
fn projection_covers_horizon_inclusive() {
    let r = calculate(&example(), 10).unwrap();
    assert_eq!(r.projection.len(), 11);
    assert_eq!(r.projection.last().unwrap().year, 10);

    let r = calculate(&example(), 0).unwrap();
    assert_eq!(r.projection.len(), 1);
}

#[test]
fn projection_rent_is_linear_and_value_compounds() {
    let input = RoiInput {
        appreciation: 10.0,
        ..example()
    };
    let r = calculate(&input, 2).unwrap();
    let y2 = r.projection[2];

    assert!(close(y2.cumulative_rent, r.noi * 2.0));
    assert!((y2.property_value - 6_050.0).abs() < 1e-6);
    assert!(close(y2.total_asset, y2.property_value + y2.cumulative_rent));
    assert!((y2.gain - (y2.total_asset - r.total_investment)).abs() < 1e-6);
}

#[test]
fn break_even_is_first_non_negative_gain() {
    let r = calculate(&example(), 10).unwrap();
    // 350 of purchase costs at ~299.49 NOI per year
    assert_eq!(r.break_even_year, Some(2));
}

#[test]
fn break_even_absent_when_never_recovered() {
    let input = RoiInput {
        gross_yield: 0.0,
        ..example()
    };
    let r = calculate(&input, 10).unwrap();
    assert_eq!(r.break_even_year, None);
    assert_eq!(r.payback_years, None);
}

#[test]
fn monthly_cash_flow_and_payback() {
    let r = calculate(&example(), 10).unwrap();
    assert!(close(r.monthly_cash_flow, 299.4875 / 12.0));
    assert!(close(r.payback_years.unwrap(), 5_350.0 / 299.4875));
}

#[test]
fn non_positive_price_is_skipped() {
    let input = RoiInput {
        price: 0.0,
        ..example()
    };
    let err = calculate(&input, 10).unwrap_err();
    assert!(matches!(
        err,
        RelocSimError::NonPositiveInput { field: "price", .. }
    ));
}

#[test]
fn from_form_defaults_missing_to_zero() {
    let form = FormState::from_pairs(["price=3000", "gross_yield=4"]).unwrap();
    let input = RoiInput::from_form(&form);
    assert!(close(input.price, 3_000.0));
    assert!(close(input.gross_yield, 4.0));
    assert!(close(input.vacancy, 0.0));
}

#[test]
fn preset_seeds_form_and_fields_override() {
    let config = RoiConfig::default();
    let preset = &config.presets["tokyo-condo"];
    let overlay = FormState::from_pairs(["vacancy=10"]).unwrap();
    let input = RoiInput::from_form(&preset.input.to_form().merged_with(&overlay));

    assert!(close(input.gross_yield, 3.5));
    assert!(close(input.vacancy, 10.0));
}

#[test]
fn default_presets_are_ordered() {
    let config = RoiConfig::default();
    let names: Vec<&str> = config.presets.keys().map(String::as_str).collect();
    assert_eq!(names, ["dubai-marina", "tokyo-condo"]);
    assert_eq!(config.horizon_years, 10);
}
