//! Interactive prompts: category selection and deletion confirmation.

use crate::theme::Theme;
use anyhow::Result;
use std::io::{self, BufRead, Write};

fn read_line_from_stdin() -> io::Result<String> {
    // Flush stdout so the prompt is visible before blocking on input
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input)
}

/// Parse one selection line against `max_index` displayed entries.
///
/// - Empty input is an empty selection, not an error.
/// - "all" (or "a", "*") selects every index.
/// - Otherwise the input is a comma-separated list of 1-based indices.
///   Any invalid token rejects the whole line (`None`); nothing is
///   partially accepted.
///
/// Valid selections come back 0-based, deduplicated, ascending.
pub fn parse_selection(input: &str, max_index: usize) -> Option<Vec<usize>> {
    let input = input.trim().to_lowercase();

    if input.is_empty() {
        return Some(Vec::new());
    }
    if matches!(input.as_str(), "all" | "a" | "*") {
        return Some((0..max_index).collect());
    }

    let mut picked = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let value: usize = token.parse().ok()?;
        if value < 1 || value > max_index {
            return None;
        }
        picked.push(value - 1);
    }

    picked.sort_unstable();
    picked.dedup();
    Some(picked)
}

/// Prompt until the operator enters a valid selection.
pub fn select_indices(max_index: usize) -> Result<Vec<usize>> {
    loop {
        print!("{}", Theme::prompt("> Selection: "));
        let raw = read_line_from_stdin()?;
        match parse_selection(&raw, max_index) {
            Some(picked) => return Ok(picked),
            None => println!("{}", Theme::error("Invalid input.")),
        }
    }
}

/// Ask a yes/no question; only an explicit yes proceeds.
pub fn confirm(question: &str) -> Result<bool> {
    print!("{}", Theme::warning(&format!("{} [y/N]: ", question)));
    let raw = read_line_from_stdin()?;
    let answer = raw.trim().to_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes"))
}
