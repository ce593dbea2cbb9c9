//! Integration tests for the calculator commands.

mod common;

use common::{EXTRA_CITY_CONFIG, JP_2025_CONFIG, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Tax
// =============================================================================

#[test]
fn tax_text_output() {
    reloc_sim!()
        .args(["--no-config", "--color", "never", "tax", "income=1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tax comparison"))
        .stdout(predicate::str::contains("Tax tables 2024 (effective 2024-01-01)"))
        .stdout(predicate::str::contains("saved in"));
}

#[test]
fn tax_zero_income_is_skipped() {
    reloc_sim!()
        .args(["--no-config", "--color", "never", "tax", "income=0"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Calculation skipped"));
}

#[test]
fn tax_skip_warning_is_silenced_by_quiet() {
    reloc_sim!()
        .args(["-q", "--no-config", "tax"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn skipped_calculation_leaves_output_file_untouched() {
    let fixture = TestFixture::new();
    fixture.create_file("report.html", "<p>previous result</p>\n");

    reloc_sim!()
        .current_dir(fixture.path())
        .args(["-q", "--no-config", "tax", "income=0", "-f", "html", "-o", "report.html"])
        .assert()
        .code(1);

    assert_eq!(fixture.read("report.html"), "<p>previous result</p>\n");
}

#[test]
fn tax_uses_extended_preset_tables() {
    let fixture = TestFixture::new();
    fixture.create_config(JP_2025_CONFIG);

    reloc_sim!()
        .current_dir(fixture.path())
        .args(["--color", "never", "tax", "income=1000", "-c", ".reloc-sim.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tax tables 2025"));
}

#[test]
fn tax_json_output() {
    let output = reloc_sim!()
        .args(["--no-config", "tax", "income=1000", "family=married", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["generator"], "reloc-sim");
    assert_eq!(value["kind"], "tax");
    assert!(value["chart"]["layout"]["rows"].as_array().unwrap().len() >= 2);
}

#[test]
fn tax_reads_input_file() {
    let fixture = TestFixture::new();
    fixture.create_file("form.json", r#"{"income": 1500, "employment": "business"}"#);

    reloc_sim!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "tax", "-i", "form.json", "-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Tax comparison"))
        .stdout(predicate::str::contains("business"));
}

#[test]
fn malformed_field_is_an_error() {
    reloc_sim!()
        .args(["--no-config", "--color", "never", "tax", "income"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn invalid_config_is_an_error() {
    let fixture = TestFixture::new();
    fixture.create_config(common::INVALID_RATE_CONFIG);

    reloc_sim!()
        .current_dir(fixture.path())
        .args(["--color", "never", "tax", "income=1000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("tax.social_rate"));
}

// =============================================================================
// HTML output
// =============================================================================

#[test]
fn html_report_written_to_file() {
    let fixture = TestFixture::new();

    reloc_sim!()
        .current_dir(fixture.path())
        .args(["--no-config", "tax", "income=1000", "-f", "html", "-o", "out/tax.html"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fixture.read("out/tax.html");
    assert!(html.starts_with("<!DOCTYPE html>"));
    for region in ["highlight", "kpi-grid", "chart", "detail-table"] {
        assert!(html.contains(&format!("<section id=\"{region}\"")), "missing {region}");
    }
    assert!(html.contains("<animate attributeName=\"width\""));
}

#[test]
fn html_report_without_animation() {
    let output = reloc_sim!()
        .args(["--no-config", "tax", "income=1000", "-f", "html", "--no-animate"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let html = String::from_utf8(output.stdout).unwrap();
    assert!(!html.contains("<animate"));
}

// =============================================================================
// ROI
// =============================================================================

#[test]
fn roi_with_preset() {
    reloc_sim!()
        .args(["--no-config", "--color", "never", "roi", "--preset", "dubai-marina"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dubai Marina 1BR, 10-year projection"))
        .stdout(predicate::str::contains("annual ROI"));
}

#[test]
fn roi_horizon_from_config() {
    let fixture = TestFixture::new();
    fixture.create_config(JP_2025_CONFIG);

    reloc_sim!()
        .current_dir(fixture.path())
        .args(["--color", "never", "roi", "--preset", "tokyo-condo", "-c", ".reloc-sim.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5-year projection"));
}

#[test]
fn roi_unknown_preset_lists_available() {
    reloc_sim!()
        .args(["--no-config", "--color", "never", "roi", "--preset", "paris"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown preset 'paris'"))
        .stderr(predicate::str::contains("dubai-marina, tokyo-condo"));
}

#[test]
fn roi_zero_price_is_skipped() {
    reloc_sim!()
        .args(["--no-config", "--color", "never", "roi", "price=0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'price' must be greater than zero"));
}

// =============================================================================
// Cost and visa
// =============================================================================

#[test]
fn cost_compares_cities() {
    reloc_sim!()
        .args(["--no-config", "--color", "never", "cost", "tier=luxury"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost of living (luxury)"))
        .stdout(predicate::str::contains("Tokyo"))
        .stdout(predicate::str::contains("Riyadh"));
}

#[test]
fn cost_includes_configured_city() {
    let fixture = TestFixture::new();
    fixture.create_config(EXTRA_CITY_CONFIG);

    reloc_sim!()
        .current_dir(fixture.path())
        .args(["--color", "never", "cost", "-c", ".reloc-sim.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bangkok"));
}

#[test]
fn visa_reports_eligible_programs() {
    reloc_sim!()
        .args([
            "--no-config",
            "--color",
            "never",
            "visa",
            "assets=12000",
            "investment=9000",
            "income=500",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Visa eligibility"))
        .stdout(predicate::str::contains("Likely eligible"));
}

#[test]
fn oversized_reveal_timing_is_rejected() {
    let fixture = TestFixture::new();
    fixture.create_config("[chart.reveal]\ncategory_step_ms = 9223372036854775807\n");

    reloc_sim!()
        .current_dir(fixture.path())
        .args(["--color", "never", "cost"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("chart.reveal.category_step_ms"));
}
