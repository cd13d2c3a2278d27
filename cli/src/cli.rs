//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use std::path::PathBuf;

use beautiful::decl::GenOptions;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Beautiful - readable shorthand for composite types
#[derive(Parser, Debug)]
#[command(name = "beautiful", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Expand a single type expression, e.g. `pfun<i32, i32>`
    Expand(ExpandArgs),

    /// Generate Rust type aliases from a declaration file
    Gen(GenArgs),

    /// Validate declaration files without generating code
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every command that resolves shorthand.
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Path of the crate providing `Const` and `Volatile`
    #[arg(long, default_value = "beautiful")]
    pub crate_path: String,

    /// Deepest type nesting accepted
    #[arg(long, default_value_t = 64)]
    pub max_depth: usize,
}

impl ResolveArgs {
    pub fn options(&self) -> GenOptions {
        GenOptions {
            crate_path: self.crate_path.clone(),
            max_depth: self.max_depth,
            ..GenOptions::default()
        }
    }
}

/// Arguments for the `expand` command.
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Type expression to expand
    pub expression: String,

    #[command(flatten)]
    pub resolve: ResolveArgs,
}

/// Arguments for the `gen` command.
#[derive(Args, Debug)]
pub struct GenArgs {
    /// Declaration file to read (use - for stdin)
    pub file: String,

    /// Write the generated module here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Lifetime given to references, without the quote
    #[arg(long, default_value = "a")]
    pub lifetime: String,

    /// Visibility of the generated aliases
    #[arg(long, default_value = "pub")]
    pub visibility: Visibility,

    #[command(flatten)]
    pub resolve: ResolveArgs,
}

impl GenArgs {
    pub fn options(&self) -> GenOptions {
        GenOptions {
            lifetime: self.lifetime.clone(),
            visibility: self.visibility.into(),
            ..self.resolve.options()
        }
    }
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to check (use - for stdin)
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Only report errors, not successes
    #[arg(short, long)]
    pub quiet: bool,

    /// Deepest type nesting accepted
    #[arg(long, default_value_t = 64)]
    pub max_depth: usize,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,

    /// Write the script here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Visibility of generated aliases.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Visibility {
    /// `pub type ...`
    #[default]
    Pub,
    /// `pub(crate) type ...`
    Crate,
    /// `type ...`
    Private,
}

impl From<Visibility> for beautiful::decl::Visibility {
    fn from(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Pub => Self::Pub,
            Visibility::Crate => Self::Crate,
            Visibility::Private => Self::Private,
        }
    }
}
