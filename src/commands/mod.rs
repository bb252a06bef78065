//! CLI commands for scrollkeep

pub mod codex;
pub mod compress;
pub mod dispatch;
pub mod format;
pub mod init;
pub mod list;
pub mod recall;
pub mod show;
pub mod stats;
