use super::*;

#[test]
fn default_config_uses_builtin_tables() {
    let config = Config::default();
    assert!(config.version.is_none());
    assert!(config.extends.is_none());
    assert_eq!(config.tax.tax_year, 2024);
    assert_eq!(config.cost.cities.len(), 3);
    assert_eq!(config.visa.programs.len(), 5);
    assert_eq!(config.chart.text_bar_width, DEFAULT_TEXT_BAR_WIDTH);
}

#[test]
fn partial_toml_fills_defaults() {
    let config: Config = toml::from_str(
        r"
[tax]
basic_deduction = 58

[chart]
text_bar_width = 40
",
    )
    .unwrap();

    assert!((config.tax.basic_deduction - 58.0).abs() < f64::EPSILON);
    assert!((config.tax.social_rate - 0.15).abs() < f64::EPSILON);
    assert_eq!(config.tax.brackets.len(), 7);
    assert_eq!(config.chart.text_bar_width, 40);
    assert_eq!(config.chart.reveal, RevealTiming::default());
}

#[test]
fn default_config_survives_toml_round_trip() {
    let config = Config::default();
    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn city_order_is_preserved_through_toml() {
    let text = toml::to_string(&Config::default()).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    let ids: Vec<&str> = parsed.cost.cities.keys().map(String::as_str).collect();
    assert_eq!(ids, ["tokyo", "dubai", "riyadh"]);
}

#[test]
fn fingerprint_is_stable_hex() {
    let a = Config::default().fingerprint().unwrap();
    let b = Config::default().fingerprint().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn fingerprint_tracks_table_changes() {
    let base = Config::default();
    let mut changed = Config::default();
    changed.tax.resident_rate = 0.11;
    assert_ne!(base.fingerprint().unwrap(), changed.fingerprint().unwrap());
}

#[test]
fn fingerprint_ignores_version_and_extends() {
    let base = Config::default();
    let labelled = Config {
        version: Some(CONFIG_VERSION.to_string()),
        extends: Some("jp-2024".to_string()),
        ..Config::default()
    };
    assert_eq!(base.fingerprint().unwrap(), labelled.fingerprint().unwrap());
}

#[test]
fn tables_label_shows_year_and_date() {
    assert_eq!(
        Config::default().tables_label(),
        "2024 (effective 2024-01-01)"
    );
}
