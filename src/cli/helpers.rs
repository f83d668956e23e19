//! Shared helper functions for CLI commands

use console::style;

use crate::entities::FurnitureState;

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output. Counts chars
/// rather than bytes so multibyte names never split mid-character.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Status rendered with terminal-state coloring for human output.
pub fn styled_status(status: FurnitureState) -> String {
    if status.is_terminal() {
        style(status).green().to_string()
    } else {
        style(status).yellow().to_string()
    }
}
