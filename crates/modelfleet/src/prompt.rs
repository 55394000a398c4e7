//! Interactive prompt helpers
//!
//! All operator input is parsed defensively and re-prompted on
//! invalid values, with no retry limit. The pure parsing functions
//! are split out so validation is unit-testable.

use colored::Colorize;
use std::io::Write;

/// Parse a selection index, accepting only values in `[0, len)`.
pub fn parse_index(input: &str, len: usize) -> Option<usize> {
    let value: usize = input.trim().parse().ok()?;
    if value < len { Some(value) } else { None }
}

/// Parse a yes/no answer. Empty input is not an answer.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Prompt until the operator enters a valid index in `[0, len)`.
pub fn prompt_index(label: &str, len: usize) -> anyhow::Result<usize> {
    anyhow::ensure!(len > 0, "nothing to select from");
    loop {
        let input = read_line(&format!("{} [0-{}]: ", label, len - 1))?;
        match parse_index(&input, len) {
            Some(index) => return Ok(index),
            None => println!(
                "{}",
                format!("Enter a number between 0 and {}", len - 1).yellow()
            ),
        }
    }
}

/// Prompt for a yes/no answer; empty input defaults to no.
pub fn prompt_yes_no(label: &str) -> anyhow::Result<bool> {
    loop {
        let input = read_line(&format!("{label} [y/N]: "))?;
        if input.trim().is_empty() {
            return Ok(false);
        }
        match parse_yes_no(&input) {
            Some(answer) => return Ok(answer),
            None => println!("{}", "Please answer y or n".yellow()),
        }
    }
}

/// Prompt until the operator enters a non-empty line.
pub fn prompt_line(label: &str) -> anyhow::Result<String> {
    loop {
        let input = read_line(label)?;
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
}

fn read_line(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut input = String::new();
    let read = std::io::stdin().read_line(&mut input)?;
    if read == 0 {
        anyhow::bail!("stdin closed before a selection was made");
    }
    Ok(input)
}
