//! Diagram and outline export.
//!
//! Exporters are pure functions of a [`CanvasSnapshot`]; they never touch the
//! engine. The host receives an [`ExportedFile`] and decides how to deliver it.

mod outline;
mod svg;

pub use outline::render_markdown;
pub use svg::render_svg;

use crate::engine::CanvasSnapshot;
use crate::error::CanvasResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Svg,
    Markdown,
}

impl ExportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "mindmap.svg",
            ExportFormat::Markdown => "mindmap.md",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Markdown => "text/markdown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "SVG",
            ExportFormat::Markdown => "Markdown",
        }
    }
}

/// A generated document ready to hand to the host for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub content: String,
}

pub fn export(snapshot: &CanvasSnapshot<'_>, format: ExportFormat) -> CanvasResult<ExportedFile> {
    let content = match format {
        ExportFormat::Svg => render_svg(snapshot)?,
        ExportFormat::Markdown => render_markdown(snapshot)?,
    };
    Ok(ExportedFile {
        file_name: format.file_name(),
        mime_type: format.mime_type(),
        content,
    })
}

/// Escape text for use in XML character data and attribute values.
pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
