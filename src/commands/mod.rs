pub mod calc;
pub mod config;
mod context;
pub mod init;
pub mod presets;

pub use calc::{
    build_cost_panel, build_roi_panel, build_tax_panel, build_visa_panel, roi_form, run_cost,
    run_roi, run_tax, run_visa,
};
pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use presets::{format_presets, run_presets};

use crate::cli::{Cli, Commands};
use crate::output::{ColorMode, ErrorOutput};
use crate::{EXIT_CONFIG_ERROR, EXIT_SKIPPED, EXIT_SUCCESS, RelocSimError, Result};

/// Dispatch a parsed command line and return the process exit code.
#[must_use]
pub fn run(cli: &Cli) -> i32 {
    match &cli.command {
        Commands::Tax(args) => run_tax(args, cli),
        Commands::Roi(args) => run_roi(args, cli),
        Commands::Cost(args) => run_cost(args, cli),
        Commands::Visa(args) => run_visa(args, cli),
        Commands::Presets => run_presets(cli),
        Commands::Init(args) => run_init(args, cli),
        Commands::Config(args) => run_config(args, cli),
    }
}

/// Exit code for a command outcome: skipped calculations are not failures.
#[must_use]
pub const fn exit_code_for(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(RelocSimError::NonPositiveInput { .. }) => EXIT_SKIPPED,
        Err(_) => EXIT_CONFIG_ERROR,
    }
}

/// Report the error, if any, and map the outcome to an exit code.
pub(crate) fn finish(result: Result<()>, cli: &Cli) -> i32 {
    let out = ErrorOutput::new(ColorMode::from(cli.color));
    match &result {
        Err(err @ RelocSimError::NonPositiveInput { .. }) => {
            tracing::debug!(error = %err, "calculation skipped");
            if !cli.quiet {
                out.print_warning(
                    &format!("Calculation skipped: {}", err.message()),
                    None,
                    err.suggestion(),
                );
            }
        }
        Err(err) => out.print(err),
        Ok(()) => {}
    }
    exit_code_for(&result)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
