//! The `gen` command - generate a module of type aliases.

use beautiful::decl::generate;

use crate::cli::GenArgs;
use crate::common::input::{read_input, write_output};
use crate::common::{CliError, CliResult};

/// Run the gen command.
pub fn run(args: GenArgs) -> CliResult<()> {
    let (content, display_name) = read_input(&args.file)?;
    let options = args.options();

    let module = generate(&content, &options)
        .map_err(|e| CliError::decl(e, content.as_str(), display_name.as_str()))?;
    tracing::debug!(file = %display_name, bytes = module.len(), "generated module");

    write_output(args.output.as_deref(), &module)
}
