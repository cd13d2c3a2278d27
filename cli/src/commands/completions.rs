//! The `completions` command.

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::common::CliResult;
use crate::common::error::CliError;
use crate::common::input::write_output;

pub fn run(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let mut script = Vec::new();
    clap_complete::generate(args.shell, &mut cmd, bin_name, &mut script);
    let script = String::from_utf8(script)
        .map_err(|e| CliError::Io(format!("{} completions: {}", args.shell, e)))?;

    tracing::debug!(shell = %args.shell, bytes = script.len(), "generated completions");
    write_output(args.output.as_deref(), &script)
}
