//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use scrollkeep_core::config::EngineConfig;
use scrollkeep_core::engine::MemoryEngine;
use scrollkeep_core::error::{Result, ScrollError};
use scrollkeep_core::time::{now_timestamp, parse_timestamp};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub state_path: PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, state_path: PathBuf, start: Instant) -> Self {
        Self {
            cli,
            state_path,
            start,
        }
    }

    /// Configuration from `--config`, if given
    pub fn config_override(&self) -> Result<Option<EngineConfig>> {
        self.cli
            .config
            .as_deref()
            .map(EngineConfig::load)
            .transpose()
    }

    /// Load the persisted engine, applying any `--config` override
    pub fn load_engine(&self) -> Result<MemoryEngine> {
        self.load_engine_for_update().map(|(engine, _)| engine)
    }

    /// Like [`Self::load_engine`], also returning the persisted configuration
    /// so [`Self::save_updated_engine`] can put it back
    pub fn load_engine_for_update(&self) -> Result<(MemoryEngine, EngineConfig)> {
        let mut engine = MemoryEngine::load(&self.state_path)?;
        let stored = engine.config().clone();
        if let Some(config) = self.config_override()? {
            engine.set_config(config);
        }
        Ok((engine, stored))
    }

    pub fn save_engine(&self, engine: &MemoryEngine) -> Result<()> {
        engine.save(&self.state_path)
    }

    /// Save an engine loaded for update. A `--config` override applies to
    /// this run only; the persisted configuration is written back unchanged.
    pub fn save_updated_engine(
        &self,
        mut engine: MemoryEngine,
        stored: EngineConfig,
    ) -> Result<()> {
        engine.set_config(stored);
        self.save_engine(&engine)
    }
}

/// Use `value` as a timestamp if it parses, or the current time when absent
pub fn resolve_timestamp(flag: &str, value: Option<&str>) -> Result<String> {
    match value {
        Some(ts) if parse_timestamp(ts).is_some() => Ok(ts.to_string()),
        Some(ts) => Err(ScrollError::UsageError(format!(
            "invalid {} timestamp '{}' (expected ISO 8601)",
            flag, ts
        ))),
        None => Ok(now_timestamp()),
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("scrollkeep {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Compress conversations into scrolls and recall them by relevance.");
        println!();
        println!("Run `scrollkeep --help` for usage information.");
        Ok(())
    }
}
