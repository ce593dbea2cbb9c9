//! Configuration semantic validation.
//!
//! Parsing only checks shapes. These checks catch tables that parse but would
//! make a calculator produce nonsense: unordered or discontinuous brackets,
//! rates outside `[0, 1]`, incomplete cost tables, unreachable visa thresholds.

use std::collections::HashSet;

use crate::calc::cost::CostTables;
use crate::calc::roi::RoiConfig;
use crate::calc::tax::{SalaryDeductionBand, TaxBracket, TaxTables};
use crate::calc::visa::VisaTables;
use crate::chart::RevealTiming;
use crate::config::{Config, MAX_TEXT_BAR_WIDTH};
use crate::error::{RelocSimError, Result};

/// Longest supported ROI projection.
pub const MAX_HORIZON_YEARS: u32 = 100;

/// Upper bound for every reveal timing field, in milliseconds.
pub const MAX_REVEAL_MS: u64 = 60_000;

/// Tolerance for bracket continuity, in 万円.
const CONTINUITY_EPSILON: f64 = 1e-6;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns the first problem found as a `Config` error naming the offending key.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_tax_section(&config.tax)?;
    validate_cost_section(&config.cost)?;
    validate_visa_section(&config.visa)?;
    validate_roi_section(&config.roi)?;
    validate_chart_section(config)
}

fn validate_chart_section(config: &Config) -> Result<()> {
    let width = config.chart.text_bar_width;
    if !(1..=MAX_TEXT_BAR_WIDTH).contains(&width) {
        return Err(invalid(format!(
            "chart.text_bar_width must be between 1 and {MAX_TEXT_BAR_WIDTH}, got {width}"
        )));
    }

    let RevealTiming {
        base_ms,
        step_ms,
        category_step_ms,
        series_step_ms,
    } = config.chart.reveal;
    for (key, value) in [
        ("base_ms", base_ms),
        ("step_ms", step_ms),
        ("category_step_ms", category_step_ms),
        ("series_step_ms", series_step_ms),
    ] {
        if value > MAX_REVEAL_MS {
            return Err(invalid(format!(
                "chart.reveal.{key} must be at most {MAX_REVEAL_MS}, got {value}"
            )));
        }
    }
    Ok(())
}

fn invalid(msg: String) -> RelocSimError {
    RelocSimError::Config(msg)
}

fn check_rate(key: &str, rate: f64) -> Result<()> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(invalid(format!("{key} must be between 0.0 and 1.0, got {rate}")))
    }
}

fn check_non_negative(key: &str, value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{key} must be non-negative, got {value}")))
    }
}

fn validate_tax_section(tax: &TaxTables) -> Result<()> {
    check_rate("tax.surtax_rate", tax.surtax_rate)?;
    check_rate("tax.resident_rate", tax.resident_rate)?;
    check_rate("tax.social_rate", tax.social_rate)?;
    check_non_negative("tax.basic_deduction", tax.basic_deduction)?;
    check_non_negative("tax.family_deduction.single", tax.family_deduction.single)?;
    check_non_negative("tax.family_deduction.married", tax.family_deduction.married)?;
    check_non_negative("tax.family_deduction.family", tax.family_deduction.family)?;

    validate_brackets(&tax.brackets)?;
    validate_salary_bands(&tax.salary_deduction)?;

    let mut ids = HashSet::new();
    for (i, comparator) in tax.comparators.iter().enumerate() {
        check_rate(
            &format!("tax.comparators[{i}].corporate_rate"),
            comparator.corporate_rate,
        )?;
        if let Some(threshold) = comparator.exempt_threshold {
            check_non_negative(&format!("tax.comparators[{i}].exempt_threshold"), threshold)?;
        }
        if !ids.insert(comparator.id.as_str()) {
            return Err(invalid(format!(
                "tax.comparators has duplicate id '{}'",
                comparator.id
            )));
        }
    }
    Ok(())
}

/// Limits must increase strictly, only the last bracket may be unbounded, and
/// adjacent brackets must agree at their shared limit.
fn validate_brackets(brackets: &[TaxBracket]) -> Result<()> {
    let Some(last) = brackets.last() else {
        return Err(invalid("tax.brackets must not be empty".to_string()));
    };
    if last.up_to.is_some() {
        return Err(invalid(
            "tax.brackets: the last bracket must omit up_to".to_string(),
        ));
    }

    for (i, bracket) in brackets.iter().enumerate() {
        check_rate(&format!("tax.brackets[{i}].rate"), bracket.rate)?;
    }

    let mut previous: Option<f64> = None;
    for (i, pair) in brackets.windows(2).enumerate() {
        let (lower, upper) = (&pair[0], &pair[1]);
        let Some(limit) = lower.up_to else {
            return Err(invalid(format!(
                "tax.brackets[{i}] omits up_to but is not the last bracket"
            )));
        };
        if previous.is_some_and(|p| limit <= p) {
            return Err(invalid(format!(
                "tax.brackets[{i}].up_to ({limit}) must be greater than the previous limit"
            )));
        }
        previous = Some(limit);

        let below = limit.mul_add(lower.rate, -lower.deduction);
        let above = limit.mul_add(upper.rate, -upper.deduction);
        if (below - above).abs() > CONTINUITY_EPSILON {
            return Err(invalid(format!(
                "tax.brackets are discontinuous at {limit}: {below} vs {above}"
            )));
        }
    }
    Ok(())
}

fn validate_salary_bands(bands: &[SalaryDeductionBand]) -> Result<()> {
    let mut previous: Option<f64> = None;
    for (i, band) in bands.iter().enumerate() {
        check_non_negative(&format!("tax.salary_deduction[{i}].rate"), band.rate)?;
        match band.up_to {
            Some(limit) => {
                if previous.is_some_and(|p| limit <= p) {
                    return Err(invalid(format!(
                        "tax.salary_deduction[{i}].up_to ({limit}) must be greater than the previous limit"
                    )));
                }
                previous = Some(limit);
            }
            None if i + 1 != bands.len() => {
                return Err(invalid(format!(
                    "tax.salary_deduction[{i}] omits up_to but is not the last band"
                )));
            }
            None => {}
        }
    }
    Ok(())
}

fn validate_cost_section(cost: &CostTables) -> Result<()> {
    if cost.categories.is_empty() {
        return Err(invalid("cost.categories must not be empty".to_string()));
    }
    let mut keys = HashSet::new();
    for category in &cost.categories {
        if !keys.insert(category.key.as_str()) {
            return Err(invalid(format!(
                "cost.categories has duplicate key '{}'",
                category.key
            )));
        }
    }

    for (id, city) in &cost.cities {
        for tier in crate::calc::Tier::ALL {
            let values = city.tier(tier);
            for category in &cost.categories {
                let key = format!("cost.cities.{id}.{}.{}", tier.as_str(), category.key);
                let Some(value) = values.get(&category.key) else {
                    return Err(invalid(format!("{key} is missing")));
                };
                check_non_negative(&key, *value)?;
            }
        }
    }
    Ok(())
}

fn validate_visa_section(visa: &VisaTables) -> Result<()> {
    let mut ids = HashSet::new();
    for program in &visa.programs {
        if !ids.insert(program.id.as_str()) {
            return Err(invalid(format!(
                "visa.programs has duplicate id '{}'",
                program.id
            )));
        }
        if program.min_pass == 0 || program.min_pass > program.criteria.len() {
            return Err(invalid(format!(
                "visa program '{}': min_pass must be between 1 and {} (the number of criteria), got {}",
                program.id,
                program.criteria.len(),
                program.min_pass
            )));
        }
    }
    Ok(())
}

fn validate_roi_section(roi: &RoiConfig) -> Result<()> {
    if roi.horizon_years > MAX_HORIZON_YEARS {
        return Err(invalid(format!(
            "roi.horizon_years must be at most {MAX_HORIZON_YEARS}, got {}",
            roi.horizon_years
        )));
    }
    for (name, preset) in &roi.presets {
        if preset.input.price.is_nan() || preset.input.price <= 0.0 {
            return Err(invalid(format!(
                "roi.presets.{name}.price must be greater than zero, got {}",
                preset.input.price
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
