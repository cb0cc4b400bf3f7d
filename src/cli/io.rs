//! File and stdout handling for the one-shot commands

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read and parse a JSON document file
pub fn read_document(path: &Path) -> CliResult<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::io_error(format!("Failed to read '{}': {}", path.display(), e))
    })?;

    if content.trim().is_empty() {
        return Err(CliError::io_error(format!("'{}' is empty", path.display())));
    }

    let value: Value = serde_json::from_str(&content)?;
    Ok(value)
}

/// Write one line to stdout
pub fn write_line(line: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", line)?;
    stdout.flush()?;
    Ok(())
}
