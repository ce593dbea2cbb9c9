use serde::Serialize;

use crate::error::Result;
use crate::report::Panel;

use super::PanelFormatter;

/// Machine-readable panel dump, chart reveal order included.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    generator: &'static str,
    version: &'static str,
    #[serde(flatten)]
    panel: &'a Panel,
}

impl PanelFormatter for JsonFormatter {
    fn format(&self, panel: &Panel) -> Result<String> {
        let output = JsonOutput {
            generator: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            panel,
        };
        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
