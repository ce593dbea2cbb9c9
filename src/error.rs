use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelocSimError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Unknown preset: '{name}'")]
    UnknownPreset { name: String, available: Vec<String> },

    #[error("'{field}' must be greater than zero, got {value}")]
    NonPositiveInput { field: &'static str, value: f64 },
}

impl RelocSimError {
    /// Short category name used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::UnknownPreset { .. } => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::TomlParse(_) | Self::TomlSerialize(_) => "TOML",
            Self::Json(_) => "JSON",
            Self::InvalidField { .. } => "Input",
            Self::NonPositiveInput { .. } => "Skipped",
        }
    }

    /// The primary message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, .. } => path.display().to_string(),
            Self::UnknownPreset { name, .. } => format!("unknown preset '{name}'"),
            other => other.to_string(),
        }
    }

    /// Extra context shown below the message.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::UnknownPreset { available, .. } => {
                Some(format!("available: {}", available.join(", ")))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some("Check the config file format or run `reloc-sim config validate`"),
            Self::FileRead { source, .. } | Self::Io(source) => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
                _ => None,
            },
            Self::TomlParse(_) => Some("Check the TOML syntax of the file"),
            Self::TomlSerialize(_) | Self::Json(_) => None,
            Self::InvalidField { .. } => Some("Fields are passed as KEY=VALUE, e.g. income=1000"),
            Self::UnknownPreset { .. } => Some("Run `reloc-sim presets` to list the built-in presets"),
            Self::NonPositiveInput { .. } => Some("Enter a value above zero to run the calculation"),
        }
    }
}

pub type Result<T> = std::result::Result<T, RelocSimError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
