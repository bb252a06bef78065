//! Whole-state export and import
//!
//! The persisted layout is a single JSON document:
//!
//! ```json
//! {
//!   "scrolls": [ ... ],
//!   "codex": { "<theme>": { "scrolls": [0], "cumulative_importance": 1.6, "last_accessed": "..." } },
//!   "term_index": { "<term>": 1 },
//!   "config": { "k_modes": 5, "beta_focus": 2.0, "gamma_decay": 0.05, "theme_boost": 0.3, "capacity": 190000.0 }
//! }
//! ```
//!
//! `scrolls` and `term_index` (also accepted as `vocabulary` or `df_index`)
//! are required. `config` falls back to defaults. The persisted `codex` is
//! advisory: it is always rebuilt from the scroll list on import.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::codex::Codex;
use crate::config::EngineConfig;
use crate::engine::MemoryEngine;
use crate::error::{Result, ScrollError};
use crate::index::TermIndex;
use crate::scroll::Scroll;

const REQUIRED_KEYS: &[(&str, &[&str])] = &[
    ("scrolls", &["scrolls"]),
    ("term_index", &["term_index", "vocabulary", "df_index"]),
];

/// Serialized engine state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryState {
    pub scrolls: Vec<Scroll>,

    #[serde(default)]
    pub codex: Codex,

    #[serde(alias = "vocabulary", alias = "df_index")]
    pub term_index: TermIndex,

    #[serde(default)]
    pub config: EngineConfig,
}

impl MemoryState {
    /// Parse a state document, reporting missing keys as state corruption
    pub fn from_json(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| ScrollError::invalid_state(format!("unparsable state: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| ScrollError::invalid_state("state must be a JSON object"))?;

        for (key, accepted) in REQUIRED_KEYS {
            if !accepted.iter().any(|k| object.contains_key(*k)) {
                return Err(ScrollError::invalid_state(format!(
                    "missing required key `{}`",
                    key
                )));
            }
        }

        serde_json::from_value(value).map_err(|e| ScrollError::invalid_state(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl MemoryEngine {
    /// Snapshot the full engine state
    pub fn export_state(&self) -> MemoryState {
        MemoryState {
            scrolls: self.scrolls.clone(),
            codex: self.codex.clone(),
            term_index: self.term_index.clone(),
            config: self.config.clone(),
        }
    }

    /// Rebuild an engine from a snapshot.
    ///
    /// Document frequencies are taken exactly as persisted. Every scroll's
    /// `id` must equal its position.
    pub fn from_state(state: MemoryState) -> Result<Self> {
        for (position, scroll) in state.scrolls.iter().enumerate() {
            if scroll.id != Some(position) {
                return Err(ScrollError::invalid_state(format!(
                    "scroll at position {} has id {:?}",
                    position, scroll.id
                )));
            }
        }

        let codex = Codex::rebuild(&state.scrolls);
        if !state.codex.is_empty() && state.codex != codex {
            warn!(
                persisted = state.codex.len(),
                rebuilt = codex.len(),
                "persisted codex disagrees with scrolls, using rebuilt codex"
            );
        }

        Ok(MemoryEngine {
            config: state.config,
            scrolls: state.scrolls,
            codex,
            term_index: state.term_index,
        })
    }

    /// Write the whole state to `path` via a temporary sibling file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.export_state().to_json()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut temp_name = path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_file = Path::new(&temp_name);

        let mut writer = BufWriter::new(File::create(temp_file)?);
        writer.write_all(content.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        drop(writer);

        fs::rename(temp_file, path)?;

        debug!(path = %path.display(), scrolls = self.scrolls.len(), "save");
        Ok(())
    }

    /// Read a state file written by [`MemoryEngine::save`]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScrollError::StateNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let engine = Self::from_state(MemoryState::from_json(&content)?)?;

        debug!(path = %path.display(), scrolls = engine.len(), "load");
        Ok(engine)
    }
}
