//! Utilities for styling the launcher's terminal output.
use std::error::Error;

use console::style;

const MAX_WIDTH: usize = 100;

/// Get the width of the terminal, limited to a maximum of MAX_WIDTH
pub(crate) fn text_width() -> Option<usize> {
    term_size::dimensions().map(|(w, _)| w.min(MAX_WIDTH))
}

/// Format the underlying cause of an error
pub(crate) fn format_error_cause(inner: &dyn Error) -> String {
    format!(
        "{}{} {}",
        style("cause").underlined().bold(),
        style(":").bold(),
        inner
    )
}
