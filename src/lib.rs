pub mod calc;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod logging;
pub mod output;
pub mod report;

pub use error::{RelocSimError, Result};

pub const EXIT_SUCCESS: i32 = 0;
/// A calculation was skipped because a required input was not above zero.
pub const EXIT_SKIPPED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
