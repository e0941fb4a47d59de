//! Rendering of enumerated adapters for display.

use std::fmt::{self, Write as _};

use crate::network::{AdapterDescriptor, AdapterSet};

/// How enumerated adapters are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// One adapter per line: identifier, alias, then name in parentheses.
    #[default]
    Text,
    /// A pretty-printed JSON array of adapter objects.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Renders the adapters in iteration order.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(adapters: &AdapterSet, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(adapters)),
        OutputFormat::Json => serde_json::to_string_pretty(&adapters.iter().collect::<Vec<_>>()),
    }
}

fn render_text(adapters: &AdapterSet) -> String {
    let mut out = String::new();
    for adapter in adapters {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}", text_line(adapter));
    }
    out
}

fn text_line(adapter: &AdapterDescriptor) -> String {
    let line = format!(
        "{}  {}  ({})",
        adapter.identifier(),
        adapter.display_alias(),
        adapter.internal_name()
    );

    #[cfg(windows)]
    if let Some(index) = adapter.if_index() {
        return format!("{line}  if={index}");
    }

    line
}
