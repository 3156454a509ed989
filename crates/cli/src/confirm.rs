// SPDX-License-Identifier: MIT

//! Confirmation prompt for destructive actions.

use std::io::{BufRead, Write};

/// Ask the user to confirm. `--yes` flags skip the prompt entirely.
///
/// Anything other than "y"/"yes" (case-insensitive) declines, including
/// EOF on a closed stdin.
pub fn confirm(prompt: &str, assume_yes: bool) -> std::io::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let mut stdout = std::io::stdout();
    write!(stdout, "{} [y/N] ", prompt)?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
