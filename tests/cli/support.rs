use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// Get a Command for scrollkeep
pub fn scrollkeep() -> Command {
    cargo_bin_cmd!("scrollkeep")
}

/// A temporary directory with an initialized state file
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    /// Initialize with default configuration
    pub fn new() -> Self {
        Self::with_init_args(&[])
    }

    /// Initialize passing extra `init` flags
    pub fn with_init_args(args: &[&str]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        scrollkeep()
            .current_dir(dir.path())
            .arg("init")
            .args(args)
            .assert()
            .success();
        Workspace { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn state_file(&self) -> PathBuf {
        self.dir.path().join(".scrollkeep").join("state.json")
    }

    /// Command running inside the workspace
    pub fn cmd(&self) -> Command {
        let mut cmd = scrollkeep();
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Compress the given messages at `timestamp`, returning the new scroll id
    pub fn compress(&self, messages: &[&str], timestamp: &str, theme: Option<&str>) -> usize {
        let mut cmd = self.cmd();
        cmd.args(["--quiet", "compress", "--timestamp", timestamp]);
        for message in messages {
            cmd.args(["--message", *message]);
        }
        if let Some(theme) = theme {
            cmd.args(["--theme", theme]);
        }
        let output = cmd.output().unwrap();
        assert!(output.status.success(), "compress failed: {:?}", output);
        extract_id(&output)
    }

    /// Run a command with `--format json` and parse stdout
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.cmd().args(["--format", "json"]).args(args).output().unwrap();
        assert!(output.status.success(), "command failed: {:?}", output);
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

/// Parse the scroll id printed by a quiet compress (first line)
pub fn extract_id(output: &Output) -> usize {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .and_then(|line| line.trim().parse().ok())
        .unwrap()
}
