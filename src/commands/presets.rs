use std::fmt::Write;

use crate::cli::Cli;
use crate::config::Config;
use crate::config::presets::{AVAILABLE_PRESETS, describe};
use crate::format::format_manen;

use super::context::load_config;
use super::finish;

#[must_use]
pub fn run_presets(cli: &Cli) -> i32 {
    let result = load_config(None, cli.no_config).map(|loaded| {
        if !cli.quiet {
            print!("{}", format_presets(&loaded.config));
        }
    });
    finish(result, cli)
}

/// Table presets usable with `extends`, then the ROI presets of `config`.
#[must_use]
pub fn format_presets(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("Table presets (set `extends` in .reloc-sim.toml):\n");
    let width = AVAILABLE_PRESETS.iter().map(|p| p.len()).max().unwrap_or(0);
    for name in AVAILABLE_PRESETS {
        let _ = writeln!(
            output,
            "  {name:<width$}  {}",
            describe(name).unwrap_or_default()
        );
    }

    output.push_str("\nROI presets (use `reloc-sim roi --preset NAME`):\n");
    if config.roi.presets.is_empty() {
        output.push_str("  (none configured)\n");
    }
    let width = config.roi.presets.keys().map(String::len).max().unwrap_or(0);
    for (name, preset) in &config.roi.presets {
        let _ = writeln!(
            output,
            "  {name:<width$}  {} (price {}, yield {}%)",
            preset.label,
            format_manen(preset.input.price),
            preset.input.gross_yield
        );
    }
    output
}

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
