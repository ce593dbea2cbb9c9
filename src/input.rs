//! Form-state boundary.
//!
//! Calculators read their inputs from a flat map of raw field values, the same
//! shape a web form provides. Missing or unparsable numbers read as `0` and
//! missing text reads as `""`; the calculators decide what that means.

use std::path::Path;

use indexmap::IndexMap;

use crate::error::{RelocSimError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: IndexMap<String, String>,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `KEY=VALUE` strings. Later keys replace earlier ones.
    ///
    /// # Errors
    /// Returns `InvalidField` when an entry has no `=` or an empty key.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut form = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let Some((key, value)) = pair.split_once('=') else {
                return Err(RelocSimError::InvalidField {
                    field: pair.to_string(),
                    reason: "expected KEY=VALUE".to_string(),
                });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(RelocSimError::InvalidField {
                    field: pair.to_string(),
                    reason: "empty field name".to_string(),
                });
            }
            form.set(key, value.trim());
        }
        Ok(form)
    }

    /// Parse a TOML or JSON object of scalar fields. JSON is chosen by the
    /// `.json` extension, TOML otherwise.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a flat object.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RelocSimError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// # Errors
    /// Returns an error on invalid TOML or nested values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;
        let mut form = Self::new();
        for (key, value) in table {
            let raw = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                _ => {
                    return Err(RelocSimError::InvalidField {
                        field: key,
                        reason: "expected a scalar value".to_string(),
                    });
                }
            };
            form.set(&key, &raw);
        }
        Ok(form)
    }

    /// # Errors
    /// Returns an error on invalid JSON or nested values.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;
        let mut form = Self::new();
        for (key, value) in object {
            let raw = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Null => String::new(),
                _ => {
                    return Err(RelocSimError::InvalidField {
                        field: key,
                        reason: "expected a scalar value".to_string(),
                    });
                }
            };
            form.set(&key, &raw);
        }
        Ok(form)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_string(), value.to_string());
    }

    /// Overlay `other` on top of `self`; fields in `other` win.
    #[must_use]
    pub fn merged_with(mut self, other: &Self) -> Self {
        for (key, value) in &other.fields {
            self.fields.insert(key.clone(), value.clone());
        }
        self
    }

    /// Numeric field value; missing, empty, non-numeric or non-finite reads as `0`.
    #[must_use]
    pub fn number(&self, key: &str) -> f64 {
        self.fields
            .get(key)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// Text field value; missing reads as `""`.
    #[must_use]
    pub fn text(&self, key: &str) -> &str {
        self.fields.get(key).map_or("", String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
