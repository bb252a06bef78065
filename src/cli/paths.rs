//! State path resolution

use std::env;
use std::path::{Path, PathBuf};

/// Directory holding the default state file
pub const STATE_DIR: &str = ".scrollkeep";

/// Default state file name within [`STATE_DIR`]
pub const STATE_FILE: &str = "state.json";

/// Resolve the state file path.
///
/// An explicit path wins (relative paths stay relative to the working
/// directory). Otherwise `.scrollkeep/state.json` under the current
/// directory, or under "." if that cannot be determined.
pub fn resolve_state_path(state: Option<&Path>) -> PathBuf {
    match state {
        Some(path) => path.to_path_buf(),
        None => env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(STATE_DIR)
            .join(STATE_FILE),
    }
}
