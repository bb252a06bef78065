mod codex;
mod compress;
mod errors;
mod init;
mod list;
mod logging;
mod recall;
mod show;
mod stats;
mod support;
