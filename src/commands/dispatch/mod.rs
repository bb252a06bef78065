//! Command dispatch logic for scrollkeep

use std::time::Instant;

use crate::cli::paths::resolve_state_path;
use crate::cli::Cli;
use scrollkeep_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

pub(crate) use command::CommandContext;
use command::{Command, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let state_path = resolve_state_path(cli.state.as_deref());

    debug!(elapsed = ?start.elapsed(), state = %state_path.display(), "resolve_state");

    let ctx = CommandContext::new(cli, state_path, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
