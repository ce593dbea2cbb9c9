use std::fmt::Write;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, resolve_value, validate_config_semantics};
use crate::format::{format_manen, format_percent};
use crate::{RelocSimError, Result};

use super::context::load_config;
use super::finish;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|fingerprint| {
            if !cli.quiet {
                println!("Configuration is valid: {}", config.display());
                println!("Tables fingerprint: {fingerprint}");
            }
        }),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), format, cli.no_config).map(|output| {
                print!("{output}");
            })
        }
    };
    finish(result, cli)
}

/// Validate a configuration file and return its tables fingerprint.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<String> {
    if !config_path.exists() {
        return Err(RelocSimError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|source| RelocSimError::FileRead {
        path: config_path.to_path_buf(),
        source,
    })?;
    let value: toml::Value = toml::from_str(&content)?;
    let (config, _) = resolve_value(value)?;
    validate_config_semantics(&config)?;
    config.fingerprint()
}

#[derive(Serialize)]
struct ShowJson<'a> {
    fingerprint: String,
    config: &'a Config,
}

/// Render the effective configuration as `text` or `json`.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded, the format is
/// unknown, or serialization fails.
pub fn run_config_show_impl(config_path: Option<&Path>, format: &str, no_config: bool) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;
    let config = &loaded.config;

    match format.to_lowercase().as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&ShowJson {
                fingerprint: config.fingerprint()?,
                config,
            })?;
            Ok(format!("{json}\n"))
        }
        "text" => {
            let mut output = String::new();
            match (&loaded.source, &loaded.preset_used) {
                (Some(path), Some(preset)) => {
                    let _ = writeln!(output, "# source: {} (extends {preset})", path.display());
                }
                (Some(path), None) => {
                    let _ = writeln!(output, "# source: {}", path.display());
                }
                (None, _) => output.push_str("# source: built-in defaults\n"),
            }
            output.push_str(&format_config_text(config)?);
            Ok(output)
        }
        other => Err(RelocSimError::InvalidField {
            field: "format".to_string(),
            reason: format!("unknown config format '{other}', expected text or json"),
        }),
    }
}

fn bound_text(up_to: Option<f64>) -> String {
    up_to.map_or_else(|| "and above".to_string(), |u| format!("up to {}", format_manen(u)))
}

/// Human-readable summary of every reference table.
///
/// # Errors
/// Returns an error if the fingerprint cannot be computed.
pub fn format_config_text(config: &Config) -> Result<String> {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");
    let _ = writeln!(output, "fingerprint = {}", config.fingerprint()?);

    let tax = &config.tax;
    let _ = writeln!(output, "\n[tax]  # {}", config.tables_label());
    let _ = writeln!(output, "  reference = {} ({})", tax.reference_name, tax.reference_id);
    let _ = writeln!(output, "  basic_deduction = {}", format_manen(tax.basic_deduction));
    let _ = writeln!(
        output,
        "  surtax / resident / social = {} / {} / {}",
        format_percent(tax.surtax_rate * 100.0, 1),
        format_percent(tax.resident_rate * 100.0, 1),
        format_percent(tax.social_rate * 100.0, 1)
    );
    for bracket in &tax.brackets {
        let _ = writeln!(
            output,
            "  bracket {:<14} {:>4}  - {}",
            bound_text(bracket.up_to),
            format_percent(bracket.rate * 100.0, 0),
            format_manen(bracket.deduction)
        );
    }
    for comparator in &tax.comparators {
        let exempt = comparator
            .exempt_threshold
            .map_or_else(String::new, |t| format!(", exempt below {}", format_manen(t)));
        let _ = writeln!(
            output,
            "  comparator {} ({}): corporate {}{exempt}",
            comparator.name,
            comparator.id,
            format_percent(comparator.corporate_rate * 100.0, 0)
        );
    }

    output.push_str("\n[cost]\n");
    let categories: Vec<&str> = config.cost.categories.iter().map(|c| c.key.as_str()).collect();
    let _ = writeln!(output, "  categories = {}", categories.join(", "));
    for (id, city) in &config.cost.cities {
        let _ = writeln!(output, "  city {id} = {}", city.name);
    }

    output.push_str("\n[visa]\n");
    for program in &config.visa.programs {
        let _ = writeln!(
            output,
            "  {} = {} ({}), {} of {} criteria",
            program.id,
            program.name,
            program.country,
            program.min_pass,
            program.criteria.len()
        );
    }

    output.push_str("\n[roi]\n");
    let _ = writeln!(output, "  horizon_years = {}", config.roi.horizon_years);
    for (id, preset) in &config.roi.presets {
        let _ = writeln!(output, "  preset {id} = {}", preset.label);
    }

    output.push_str("\n[chart]\n");
    let _ = writeln!(output, "  text_bar_width = {}", config.chart.text_bar_width);
    let reveal = &config.chart.reveal;
    let _ = writeln!(
        output,
        "  reveal = base {}ms, step {}ms, category {}ms, series {}ms",
        reveal.base_ms, reveal.step_ms, reveal.category_step_ms, reveal.series_step_ms
    );

    Ok(output)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
