use std::path::Path;

use crate::chart::ChartOptions;
use crate::cli::{CalcArgs, Cli};
use crate::config::{
    Config, ConfigLoader, FileConfigLoader, LoadResult, validate_config_semantics,
};
use crate::input::FormState;
use crate::output::{ColorMode, format_panel, write_output};
use crate::report::Panel;

/// Load and validate the effective configuration.
///
/// `--no-config` skips discovery and any explicit path; built-in tables are used.
///
/// # Errors
/// Returns an error if the config cannot be read, parsed or fails validation.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<LoadResult> {
    if no_config {
        tracing::debug!("--no-config given, using built-in tables");
        return Ok(LoadResult::defaults());
    }

    let loader = FileConfigLoader::new();
    let result = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    validate_config_semantics(&result.config)?;

    if let Some(preset) = &result.preset_used {
        tracing::info!(preset = %preset, "using table preset");
    }
    Ok(result)
}

/// Input fields from `--input` overlaid with positional `KEY=VALUE` fields.
///
/// # Errors
/// Returns an error if the input file cannot be read or a field is malformed.
pub(crate) fn read_form(args: &CalcArgs) -> crate::Result<FormState> {
    let base = match &args.input {
        Some(path) => FormState::from_file(path)?,
        None => FormState::new(),
    };
    let fields = FormState::from_pairs(&args.fields)?;
    let form = base.merged_with(&fields);
    tracing::debug!(fields = ?form.keys().collect::<Vec<_>>(), "form state");
    Ok(form)
}

/// Chart options from the configured reveal timing and `--no-animate`.
#[must_use]
pub(crate) fn chart_options(config: &Config, args: &CalcArgs) -> ChartOptions {
    ChartOptions::default()
        .with_reveal(config.chart.reveal)
        .with_animate(!args.no_animate)
}

/// Format `panel` as requested and write it to `--output` or stdout.
///
/// # Errors
/// Returns an error if formatting or writing fails.
pub(crate) fn emit_panel(panel: &Panel, config: &Config, args: &CalcArgs, cli: &Cli) -> crate::Result<()> {
    let content = format_panel(
        args.format,
        panel,
        ColorMode::from(cli.color),
        config.chart.text_bar_width,
    )?;
    write_output(args.output.as_deref(), &content, cli.quiet)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
