//! The `expand` command - print the Rust type a shorthand expression stands for.

use beautiful::decl::expand;

use crate::cli::ExpandArgs;
use crate::common::{CliError, CliResult};

/// Run the expand command.
pub fn run(args: ExpandArgs) -> CliResult<()> {
    let options = args.resolve.options();
    let ty = expand(&args.expression, &options)
        .map_err(|e| CliError::decl(e, args.expression.as_str(), "<expression>"))?;
    println!("{}", ty);
    Ok(())
}
