use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::calc::{CostTables, RoiConfig, TaxTables, VisaTables};
use crate::chart::RevealTiming;
use crate::error::Result;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Default width, in characters, of terminal bar charts.
pub const DEFAULT_TEXT_BAR_WIDTH: usize = 30;

/// Widest terminal bar a config may ask for.
pub const MAX_TEXT_BAR_WIDTH: usize = 200;

/// Presentation settings shared by every calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChartConfig {
    /// Entrance animation timing for HTML/SVG output.
    pub reveal: RevealTiming,

    /// Width of the longest terminal bar.
    pub text_bar_width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            reveal: RevealTiming::default(),
            text_bar_width: DEFAULT_TEXT_BAR_WIDTH,
        }
    }
}

/// Effective configuration: every reference table the calculators use.
///
/// A config file only needs the keys it changes; everything else comes from
/// the built-in defaults or the preset named by `extends`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config schema version; `None` means the current version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Built-in table preset this config is layered on, e.g. `"jp-2025"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    pub tax: TaxTables,
    pub cost: CostTables,
    pub visa: VisaTables,
    pub roi: RoiConfig,
    pub chart: ChartConfig,
}

/// The hashed portion of a config. `version` and `extends` are excluded so that
/// two configs producing the same tables share a fingerprint.
#[derive(Serialize)]
struct Tables<'a> {
    tax: &'a TaxTables,
    cost: &'a CostTables,
    visa: &'a VisaTables,
    roi: &'a RoiConfig,
    chart: &'a ChartConfig,
}

impl Config {
    /// SHA-256 of the effective reference tables, as lowercase hex.
    ///
    /// # Errors
    /// Returns an error if the tables cannot be serialized.
    pub fn fingerprint(&self) -> Result<String> {
        let tables = Tables {
            tax: &self.tax,
            cost: &self.cost,
            visa: &self.visa,
            roi: &self.roi,
            chart: &self.chart,
        };
        let bytes = serde_json::to_vec(&tables)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(format!("{:x}", hasher.finalize()))
    }

    /// Short label for the reference tables, e.g. `"2024 (effective 2024-01-01)"`.
    #[must_use]
    pub fn tables_label(&self) -> String {
        format!(
            "{} (effective {})",
            self.tax.tax_year, self.tax.effective_date
        )
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
