//! Command implementations for all scrollkeep commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{resolve_timestamp, Command, CommandContext};
use crate::commands::dispatch::trace_command;
use scrollkeep_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init(args) => commands::init::execute(ctx, args),
            Commands::Compress(args) => {
                let timestamp = resolve_timestamp("--timestamp", args.timestamp.as_deref())?;
                let (mut engine, stored) = ctx.load_engine_for_update()?;
                trace_command!(ctx.cli, ctx.start, "load_state");
                commands::compress::execute(ctx, &mut engine, args, &timestamp)?;
                ctx.save_updated_engine(engine, stored)?;
                trace_command!(ctx.cli, ctx.start, "save_state");
                Ok(())
            }
            Commands::Recall(args) => {
                let at = resolve_timestamp("--at", args.at.as_deref())?;
                let (mut engine, stored) = ctx.load_engine_for_update()?;
                trace_command!(ctx.cli, ctx.start, "load_state");
                commands::recall::execute(ctx, &mut engine, args, &at)?;
                // access bookkeeping changed
                ctx.save_updated_engine(engine, stored)?;
                trace_command!(ctx.cli, ctx.start, "save_state");
                Ok(())
            }
            Commands::List => {
                let engine = ctx.load_engine()?;
                trace_command!(ctx.cli, ctx.start, "load_state");
                commands::list::execute(ctx, &engine)
            }
            Commands::Show(args) => {
                let engine = ctx.load_engine()?;
                trace_command!(ctx.cli, ctx.start, "load_state");
                commands::show::execute(ctx, &engine, args.id)
            }
            Commands::Codex => {
                let engine = ctx.load_engine()?;
                trace_command!(ctx.cli, ctx.start, "load_state");
                commands::codex::execute(ctx, &engine)
            }
            Commands::Stats(args) => {
                let at = resolve_timestamp("--at", args.at.as_deref())?;
                let engine = ctx.load_engine()?;
                trace_command!(ctx.cli, ctx.start, "load_state");
                commands::stats::execute(ctx, &engine, &at)
            }
        }
    }
}
