//! File input and output utilities.

use std::io::Read;
use std::path::Path;

use super::error::CliError;

/// Read input from a file path or stdin if path is "-".
///
/// Returns the content and a display name for error messages.
pub fn read_input(path: &str) -> Result<(String, String), CliError> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::Io(format!("<stdin>: {}", e)))?;
        Ok((content, "<stdin>".to_string()))
    } else {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Io(format!("{}: {}", path, e)))?;
        Ok((content, path.to_string()))
    }
}

/// Write `content` to `path`, or to stdout when there is no path.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, content)
            .map_err(|e| CliError::Io(format!("{}: {}", path.display(), e))),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}

/// Check if the path represents stdin.
pub fn is_stdin(path: &str) -> bool {
    path == "-"
}
