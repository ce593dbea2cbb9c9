use crate::calc::{cost, roi, tax, visa};
use crate::chart::ChartOptions;
use crate::cli::{CalcArgs, Cli, RoiArgs};
use crate::config::Config;
use crate::input::FormState;
use crate::report::{Panel, cost_panel, roi_panel, tax_panel, visa_panel};
use crate::{RelocSimError, Result};

use super::context::{chart_options, emit_panel, load_config, read_form};
use super::finish;

/// Shared pipeline: config, form state, panel, output.
fn run_calculator<B>(args: &CalcArgs, cli: &Cli, build: B) -> Result<()>
where
    B: FnOnce(&Config, &FormState, &ChartOptions) -> Result<Panel>,
{
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    let form = read_form(args)?;
    let options = chart_options(&loaded.config, args);
    let panel = build(&loaded.config, &form, &options)?;
    emit_panel(&panel, &loaded.config, args, cli)
}

/// # Errors
/// Returns `NonPositiveInput` when income is not above zero.
pub fn build_tax_panel(config: &Config, form: &FormState, options: &ChartOptions) -> Result<Panel> {
    let input = tax::TaxInput::from_form(form);
    let comparison = tax::compare(&input, &config.tax)?;
    Ok(tax_panel(&comparison, options).with_subtitle(format!("Tax tables {}", config.tables_label())))
}

/// Form defaults from the named ROI preset, overridden by `form`.
///
/// # Errors
/// Returns `UnknownPreset` if the config has no such preset.
pub fn roi_form(config: &Config, form: &FormState, preset: Option<&str>) -> Result<FormState> {
    let Some(name) = preset else {
        return Ok(form.clone());
    };
    let preset = config
        .roi
        .presets
        .get(name)
        .ok_or_else(|| RelocSimError::UnknownPreset {
            name: name.to_string(),
            available: config.roi.presets.keys().cloned().collect(),
        })?;
    tracing::debug!(preset = %name, "applying ROI preset");
    Ok(preset.input.to_form().merged_with(form))
}

/// # Errors
/// Returns `UnknownPreset` for a missing preset or `NonPositiveInput` when the
/// price is not above zero.
pub fn build_roi_panel(
    config: &Config,
    form: &FormState,
    preset: Option<&str>,
    options: &ChartOptions,
) -> Result<Panel> {
    let form = roi_form(config, form, preset)?;
    let input = roi::RoiInput::from_form(&form);
    let result = roi::calculate(&input, config.roi.horizon_years)?;
    let horizon = format!("{}-year projection", config.roi.horizon_years);
    let subtitle = match preset.and_then(|name| config.roi.presets.get(name)) {
        Some(p) => format!("{}, {horizon}", p.label),
        None => horizon,
    };
    Ok(roi_panel(&result, options).with_subtitle(subtitle))
}

#[must_use]
pub fn build_cost_panel(config: &Config, form: &FormState, options: &ChartOptions) -> Panel {
    let input = cost::CostInput::from_form(form);
    let comparison = cost::compare(&input, &config.cost);
    cost_panel(&comparison, options)
}

#[must_use]
pub fn build_visa_panel(config: &Config, form: &FormState, options: &ChartOptions) -> Panel {
    let profile = visa::ApplicantProfile::from_form(form);
    let assessment = visa::assess(&profile, &config.visa);
    visa_panel(&assessment, options)
}

#[must_use]
pub fn run_tax(args: &CalcArgs, cli: &Cli) -> i32 {
    finish(run_calculator(args, cli, build_tax_panel), cli)
}

#[must_use]
pub fn run_roi(args: &RoiArgs, cli: &Cli) -> i32 {
    let preset = args.preset.as_deref();
    finish(
        run_calculator(&args.calc, cli, |config, form, options| {
            build_roi_panel(config, form, preset, options)
        }),
        cli,
    )
}

#[must_use]
pub fn run_cost(args: &CalcArgs, cli: &Cli) -> i32 {
    finish(
        run_calculator(args, cli, |config, form, options| {
            Ok(build_cost_panel(config, form, options))
        }),
        cli,
    )
}

#[must_use]
pub fn run_visa(args: &CalcArgs, cli: &Cli) -> i32 {
    finish(
        run_calculator(args, cli, |config, form, options| {
            Ok(build_visa_panel(config, form, options))
        }),
        cli,
    )
}

#[cfg(test)]
#[path = "calc_tests.rs"]
mod tests;
