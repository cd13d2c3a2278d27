//! Error rendering using ariadne
//!
//! Declaration errors carry byte spans into the source they came from. This
//! module turns them into annotated reports with the offending text
//! underlined, an error code and, where one exists, a hint.

use crate::decl::DeclError;
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The filename to display in error messages.
    /// Defaults to "<unknown>" if not provided.
    pub filename: Option<&'a str>,
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Stable code shown in brackets before the message.
pub fn error_code(error: &DeclError) -> &'static str {
    match error {
        DeclError::Syntax { .. } => "P001",
        DeclError::TooDeep { .. } => "P002",
        DeclError::Arity { .. } => "E001",
        DeclError::EmptySequence { .. } => "E002",
        DeclError::ExpectedType { .. } => "E003",
        DeclError::ExpectedDimension { .. } => "E004",
        DeclError::DimensionOverflow { .. } => "E005",
        DeclError::Unsized { .. } => "E006",
        DeclError::Duplicate { .. } => "E007",
    }
}

fn help(error: &DeclError) -> Option<&'static str> {
    match error {
        DeclError::EmptySequence { .. } => {
            Some("`fun` and `pfun` list the return type last, e.g. `fun<()>` takes no arguments")
        }
        DeclError::ExpectedType { .. } | DeclError::ExpectedDimension { .. } => {
            Some("array dimensions follow the element type: `array<T, 3, 5>`")
        }
        DeclError::Unsized { .. } => Some("put it behind `ref<..>` or `ptr<..>` first"),
        DeclError::TooDeep { .. } => Some("raise the limit with `--max-depth`"),
        _ => None,
    }
}

/// Render an error to stderr using the default config.
pub fn render_error(error: &DeclError, source: &str) {
    render_error_to(error, source, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use beautiful::decl::{GenOptions, expand};
/// use beautiful::{RenderConfig, render_error_to};
///
/// let source = "fun<>";
/// let err = expand(source, &GenOptions::default()).unwrap_err();
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&err, source, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("[E002] Error"));
/// ```
pub fn render_error_to(
    error: &DeclError,
    source: &str,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config.filename.unwrap_or("<unknown>");
    let message = error.to_string();
    let span = error.span().0.clone();

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset);

    let mut report = Report::build(ReportKind::Error, (filename, span.clone()))
        .with_code(error_code(error))
        .with_message(&message)
        .with_config(ariadne_config);

    report = report.with_label(
        Label::new((filename, span))
            .with_message(&message)
            .with_color(colors.next()),
    );

    if let DeclError::Duplicate { name, first, .. } = error {
        report = report.with_label(
            Label::new((filename, first.0.clone()))
                .with_message(format!("`{}` first declared here", name))
                .with_color(colors.next()),
        );
    }

    if let Some(help) = help(error) {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((filename, Source::from(source)), &mut *writer)
}
