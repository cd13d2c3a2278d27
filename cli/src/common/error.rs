//! Error handling utilities for the CLI.

use beautiful::decl::DeclError;
use beautiful::{RenderConfig, render_error_to};

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A declaration error, with the source it points into.
    #[error("{error}")]
    Decl {
        error: DeclError,
        input: String,
        filename: String,
    },

    #[error("{0}")]
    Io(String),
}

impl CliError {
    pub fn decl(error: DeclError, input: impl Into<String>, filename: impl Into<String>) -> Self {
        CliError::Decl {
            error,
            input: input.into(),
            filename: filename.into(),
        }
    }
}

/// Render an error to stderr.
pub fn render(error: &CliError, no_color: bool) {
    match error {
        CliError::Decl {
            error,
            input,
            filename,
        } => {
            let config = RenderConfig {
                color: !no_color,
                filename: Some(filename),
                ..Default::default()
            };
            render_error_to(error, input, &mut std::io::stderr(), &config).ok();
        }
        CliError::Io(message) => eprintln!("error: {}", message),
    }
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    render(&error, no_color);
    std::process::exit(1);
}
