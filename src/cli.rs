use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "reloc-sim")]
#[command(author, version, about = "Relocation simulator - compare taxes, property returns, living costs and visas")]
#[command(long_about = "Relocation simulator for people weighing a move from Japan.\n\n\
    Calculators: tax, roi, cost, visa. Inputs are KEY=VALUE fields and/or an input file;\n\
    reference tables come from built-in defaults, presets and .reloc-sim.toml.\n\n\
    Exit codes:\n  \
    0 - Result rendered\n  \
    1 - Calculation skipped (a required value is not above zero)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare Japanese tax with tax-free jurisdictions
    Tax(CalcArgs),

    /// Project rental yield and asset value for a property
    Roi(RoiArgs),

    /// Compare monthly living costs across cities
    Cost(CalcArgs),

    /// Check eligibility for residency visa programs
    Visa(CalcArgs),

    /// List built-in table presets and ROI presets
    Presets,

    /// Generate a commented configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Arguments shared by every calculator.
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Input fields as KEY=VALUE (e.g. income=1000 family=married)
    pub fields: Vec<String>,

    /// Read input fields from a TOML or JSON file; KEY=VALUE fields override it
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json, markdown, html]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable the chart reveal animation
    #[arg(long)]
    pub no_animate: bool,
}

#[derive(Parser, Debug)]
pub struct RoiArgs {
    /// Start from a named ROI preset (see `reloc-sim presets`)
    #[arg(short, long)]
    pub preset: Option<String>,

    #[command(flatten)]
    pub calc: CalcArgs,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".reloc-sim.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and reference tables
    Validate {
        /// Path to configuration file (default: .reloc-sim.toml)
        #[arg(short, long, default_value = ".reloc-sim.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration (defaults, preset and file merged)
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
