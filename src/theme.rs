//! ANSI color theme for terminal output.

use colored::Colorize;

/// Terminal formatting utilities
pub struct Theme;

impl Theme {
    /// Section headers (scan banner, summary)
    pub fn header(text: &str) -> String {
        text.cyan().bold().to_string()
    }

    /// Category listing lines
    pub fn category(text: &str) -> String {
        text.blue().to_string()
    }

    /// Successful operations
    pub fn success(text: &str) -> String {
        text.green().to_string()
    }

    /// Non-fatal warnings and skip notices
    pub fn warning(text: &str) -> String {
        text.yellow().to_string()
    }

    /// Per-item failures
    pub fn error(text: &str) -> String {
        text.red().to_string()
    }

    /// De-emphasized hints and protected-path skips
    pub fn muted(text: &str) -> String {
        text.bright_black().to_string()
    }

    /// Input prompts
    pub fn prompt(text: &str) -> String {
        text.green().to_string()
    }

    /// Divider line for the summary block
    pub fn divider(width: usize) -> String {
        "=".repeat(width).bold().to_string()
    }
}
