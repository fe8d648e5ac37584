//! Output formatting utilities for the CLI

use std::io::{self, Write};

use is_terminal::IsTerminal;

/// Colorize text for stderr with ANSI escape codes (only if stderr is a terminal)
pub fn color(code: &str, text: &str) -> String {
    if io::stderr().is_terminal() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Format error message for display
pub fn format_error(details: &str) -> String {
    format!("{} {}", color("31", "error:"), details)
}

/// Write output to file or stdout
pub fn write_output(content: &str, path: Option<&std::path::Path>) -> Result<(), String> {
    if let Some(path) = path {
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write to {}: {}", path.display(), e))?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .map_err(|e| format!("Failed to write to stdout: {}", e))?;
        stdout.flush().map_err(|e| format!("Failed to flush stdout: {}", e))?;
    }
    Ok(())
}
