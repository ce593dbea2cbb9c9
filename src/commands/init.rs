use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::{RelocSimError, Result};

use super::finish;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    let result = run_init_impl(args).map(|()| {
        if !cli.quiet {
            println!("Created configuration file: {}", args.output.display());
        }
    });
    finish(result, cli)
}

/// Write the commented configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(RelocSimError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    tracing::info!(path = %output_path.display(), "wrote config template");
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# reloc-sim configuration file
# Only the keys you set here override the built-in tables.
# Arrays (brackets, comparators, programs) replace the built-in list as a whole.

version = "1"

# Layer this file on a built-in table preset (see `reloc-sim presets`)
# extends = "jp-2025"

[tax]
# Year and effective date shown with every tax result
# tax_year = 2024
# effective_date = "2024-01-01"

# Flat social insurance approximation on gross income
social_rate = 0.15

# Basic deduction (万円)
# basic_deduction = 48

# Progressive brackets: `up_to` is the upper bound of taxable income (万円),
# omit it on the last bracket. Listing brackets replaces the whole table.
# [[tax.brackets]]
# up_to = 195
# rate = 0.05
# deduction = 0

# Tax-free jurisdictions to compare against
# [[tax.comparators]]
# id = "uae"
# name = "UAE"
# corporate_rate = 0.09
# exempt_threshold = 1500

[roi]
# Years projected by `reloc-sim roi`
horizon_years = 10

# Named form defaults for `reloc-sim roi --preset NAME`
# [roi.presets.my-flat]
# label = "My flat"
# price = 4000
# gross_yield = 5.0
# management_fee = 4.0
# vacancy = 5.0
# purchase_cost = 7.0
# appreciation = 1.0

# Monthly living costs per city and tier (万円); every tier needs every category
# [cost.cities.bangkok]
# name = "Bangkok"
# standard = { housing = 8, food = 5, transport = 1, utilities = 1.5, education = 3, healthcare = 1, entertainment = 2, other = 1 }
# comfort = { housing = 14, food = 7, transport = 2, utilities = 2, education = 8, healthcare = 2, entertainment = 4, other = 2 }
# luxury = { housing = 30, food = 12, transport = 4, utilities = 3, education = 20, healthcare = 4, entertainment = 8, other = 4 }

[chart]
# Width of the longest bar in terminal output
text_bar_width = 30

# Entrance animation for HTML output (milliseconds)
[chart.reveal]
base_ms = 100
step_ms = 80
category_step_ms = 120
series_step_ms = 40
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
