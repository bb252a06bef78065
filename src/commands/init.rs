//! `scrollkeep init` command - create an empty state file
//!
//! Configuration comes from `--config` (or defaults), then individual flags.
//! An existing state file is only replaced with `--force`.

use crate::cli::InitArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json_status};
use scrollkeep_core::config::EngineConfig;
use scrollkeep_core::engine::MemoryEngine;
use scrollkeep_core::error::{Result, ScrollError};

/// Build the initial configuration from an optional base and flag overrides
pub fn build_config(base: Option<EngineConfig>, args: &InitArgs) -> EngineConfig {
    let mut config = base.unwrap_or_default();
    if let Some(k_modes) = args.k_modes {
        config.k_modes = k_modes;
    }
    if let Some(beta_focus) = args.beta_focus {
        config.beta_focus = beta_focus;
    }
    if let Some(gamma_decay) = args.gamma_decay {
        config.gamma_decay = gamma_decay;
    }
    if let Some(theme_boost) = args.theme_boost {
        config.theme_boost = theme_boost;
    }
    config
}

/// Execute the init command
pub fn execute(ctx: &CommandContext, args: &InitArgs) -> Result<()> {
    let path = &ctx.state_path;
    if path.exists() && !args.force {
        return Err(ScrollError::StateAlreadyExists { path: path.clone() });
    }

    let config = build_config(ctx.config_override()?, args);
    let engine = MemoryEngine::new(config);
    ctx.save_engine(&engine)?;

    output_by_format_result!(ctx.cli.format,
        json => print_json_status("ok", &[
            ("state", serde_json::json!(path.display().to_string())),
            ("config", serde_json::to_value(engine.config())?),
        ]),
        human => {
            if !ctx.cli.quiet {
                println!("Initialized scrollkeep state at {}", path.display());
                let config = engine.config();
                println!(
                    "k_modes={} beta_focus={} gamma_decay={} theme_boost={}",
                    config.k_modes, config.beta_focus, config.gamma_decay, config.theme_boost
                );
            }
        }
    )
}
