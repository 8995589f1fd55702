//! Terminal output helpers
//!
//! All colored output goes through `console::Style` so the command output
//! stays consistent, and every destructive batch is gated on a single
//! confirmation helper.

use console::Style;
use inquire::Confirm;

use crate::error::Result;

/// Ask the user to confirm a destructive batch operation.
pub fn confirm(message: &str, default: bool) -> Result<bool> {
    let answer = Confirm::new(message)
        .with_default(default)
        .with_help_message("Press Enter to accept the default")
        .prompt()?;
    Ok(answer)
}

/// Style for component ids in listings and summaries.
pub fn id_style() -> Style {
    Style::new().cyan().bold()
}

/// Style for warnings that do not stop the operation.
pub fn warn_style() -> Style {
    Style::new().yellow()
}

/// Style for success markers.
pub fn ok_style() -> Style {
    Style::new().green()
}

/// Style for de-emphasized detail lines.
pub fn dim_style() -> Style {
    Style::new().dim()
}

/// Print a warning listing unknown component names as originally typed.
pub fn warn_unknown(unknown: &[String]) {
    if unknown.is_empty() {
        return;
    }
    println!(
        "{} unknown component(s) skipped: {}",
        warn_style().apply_to("Warning:"),
        unknown.join(", ")
    );
}
