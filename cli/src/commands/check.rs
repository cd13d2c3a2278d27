//! The `check` command - validate declaration files without generating code.

use beautiful::decl::{GenOptions, check};

use crate::cli::CheckArgs;
use crate::common::error::render;
use crate::common::input::read_input;
use crate::common::{CliError, CliResult};

/// Run the check command.
pub fn run(args: CheckArgs, no_color: bool) -> CliResult<()> {
    let options = GenOptions {
        max_depth: args.max_depth,
        ..GenOptions::default()
    };

    let mut has_errors = false;
    for file in &args.files {
        if let Err(e) = check_file(file, &options, args.quiet) {
            render(&e, no_color);
            has_errors = true;
        }
    }

    if has_errors {
        std::process::exit(1);
    }

    Ok(())
}

/// Check a single file, printing a summary line unless `quiet`.
fn check_file(path: &str, options: &GenOptions, quiet: bool) -> CliResult<()> {
    let (content, display_name) = read_input(path)?;
    let count = check(&content, options)
        .map_err(|e| CliError::decl(e, content.as_str(), display_name.as_str()))?;

    if !quiet {
        println!("{}: OK ({} declarations)", display_name, count);
    }
    Ok(())
}
