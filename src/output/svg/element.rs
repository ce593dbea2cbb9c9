//! Primitive SVG elements: bars, text and legend swatches.

use std::fmt;

use crate::chart::ChartColor;
use crate::format::html_escape;

/// Length of a bar's grow-in animation.
pub const REVEAL_DURATION_MS: u64 = 400;

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Horizontal bar; grows from zero width when `reveal_delay_ms` is set.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    /// Tooltip text
    pub title: String,
    pub reveal_delay_ms: Option<u64>,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        // Accessibility: title element for screen readers and hover tooltip
        let title = html_escape(&self.title);
        match self.reveal_delay_ms {
            Some(delay) => format!(
                r#"<rect x="{:.1}" y="{:.1}" width="0" height="{:.1}" fill="{color}" rx="2">
    <animate attributeName="width" from="0" to="{:.1}" dur="{REVEAL_DURATION_MS}ms" begin="{delay}ms" fill="freeze"/>
    <title>{title}</title>
</rect>"#,
                self.x, self.y, self.height, self.width
            ),
            None => format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{color}" rx="2">
    <title>{title}</title>
</rect>"#,
                self.x, self.y, self.width, self.height
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub color: ChartColor,
    pub bold: bool,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            anchor: TextAnchor::Start,
            font_size: 12.0,
            color: ChartColor::css_var("text"),
            bold: false,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        let weight = if self.bold { r#" font-weight="600""# } else { "" };
        format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="{}" fill="{}" font-size="{}"{weight} dominant-baseline="middle">{}</text>"#,
            self.x,
            self.y,
            self.anchor,
            self.color.to_css(),
            self.font_size,
            html_escape(&self.content)
        )
    }
}

/// Colored square plus series name.
#[derive(Debug, Clone)]
pub struct LegendItem {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: ChartColor,
    pub name: String,
}

impl SvgElement for LegendItem {
    fn render(&self) -> String {
        let label = Text::new(self.x + self.size + 6.0, self.y + self.size / 2.0, &self.name)
            .with_font_size(11.0);
        format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{}" height="{}" fill="{}" rx="2"/>{}"#,
            self.x,
            self.y,
            self.size,
            self.size,
            self.color.to_css(),
            label.render()
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
