//! Scrollkeep Core Library
//!
//! Compression, theme indexing and decay-weighted recall of conversation
//! segments for the scrollkeep memory engine.

pub mod codex;
pub mod config;
pub mod engine;
pub mod error;
pub mod essence;
pub mod format;
pub mod glyph;
pub mod importance;
pub mod index;
pub mod logging;
pub mod quality;
pub mod recall;
pub mod scroll;
pub mod similarity;
pub mod state;
pub mod text;
pub mod themes;
pub mod time;

pub use engine::{EngineStats, MemoryEngine, RecallHit};
pub use error::{Result, ScrollError};
