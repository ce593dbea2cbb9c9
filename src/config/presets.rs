use toml::Value;

use crate::error::{RelocSimError, Result};

/// Available preset names, in listing order.
pub const AVAILABLE_PRESETS: &[&str] = &["jp-2024", "jp-2025"];

/// One-line description of a preset for `reloc-sim presets`.
#[must_use]
pub fn describe(name: &str) -> Option<&'static str> {
    match name {
        "jp-2024" => Some("Japan 2024 tables (built-in defaults)"),
        "jp-2025" => Some("Japan 2025 reform: basic deduction 58, salary deduction floor 65"),
        _ => None,
    }
}

/// Load a built-in table preset by name as a TOML overlay.
///
/// `preset:` prefixes are accepted so `extends = "preset:jp-2025"` works too.
///
/// # Errors
/// Returns `UnknownPreset` if the name is not built in.
pub fn load_preset(name: &str) -> Result<Value> {
    let name = name.strip_prefix("preset:").unwrap_or(name);
    let content = match name {
        "jp-2024" => PRESET_JP_2024,
        "jp-2025" => PRESET_JP_2025,
        _ => {
            return Err(RelocSimError::UnknownPreset {
                name: name.to_string(),
                available: AVAILABLE_PRESETS.iter().map(ToString::to_string).collect(),
            });
        }
    };

    toml::from_str(content)
        .map_err(|e| RelocSimError::Config(format!("Failed to parse preset '{name}': {e}")))
}

// The defaults already are the 2024 tables.
const PRESET_JP_2024: &str = r#"
[tax]
tax_year = 2024
effective_date = "2024-01-01"
"#;

const PRESET_JP_2025: &str = r#"
[tax]
tax_year = 2025
effective_date = "2025-12-01"
basic_deduction = 58

# Floor raised from 55 to 65; the flat band now reaches 190
[[tax.salary_deduction]]
up_to = 190
offset = 65

[[tax.salary_deduction]]
up_to = 360
rate = 0.3
offset = 8

[[tax.salary_deduction]]
up_to = 660
rate = 0.2
offset = 44

[[tax.salary_deduction]]
up_to = 850
rate = 0.1
offset = 110

[[tax.salary_deduction]]
offset = 195
"#;

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
