mod error_output;
mod html;
mod html_template;
mod json;
mod markdown;
pub mod svg;
mod text;

use std::path::Path;

pub use error_output::ErrorOutput;
pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

use crate::error::Result;
use crate::report::Panel;

/// Trait for rendering a calculator panel into an output format.
pub trait PanelFormatter {
    /// Render the panel into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, panel: &Panel) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
    Html,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Render `panel` with the formatter matching `format`.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_panel(
    format: OutputFormat,
    panel: &Panel,
    color_mode: ColorMode,
    bar_width: usize,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode)
            .with_bar_width(bar_width)
            .format(panel),
        OutputFormat::Json => JsonFormatter.format(panel),
        OutputFormat::Markdown => MarkdownFormatter::new().format(panel),
        OutputFormat::Html => HtmlFormatter::new().format(panel),
    }
}

/// Write rendered output to `path`, or to stdout unless `quiet`.
///
/// # Errors
/// Returns an error if the file or its parent directories cannot be written.
pub fn write_output(path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "output written");
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
