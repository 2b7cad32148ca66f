use std::io;

use console::Term;

/// Ask a yes/no question on the terminal.
///
/// Anything other than `y`/`yes` (case-insensitive) declines. When stdout is
/// not interactive the answer is a decline, so scripted runs never block;
/// they pass `--yes` instead.
pub fn confirm(question: &str) -> io::Result<bool> {
    let term = Term::stdout();
    if !term.is_term() {
        return Ok(false);
    }

    term.write_str(&format!("{question} [y/N] "))?;
    let answer = term.read_line()?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
