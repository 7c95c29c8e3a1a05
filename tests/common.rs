#![allow(dead_code)]

pub use assert_cmd::Command;
use tempfile::TempDir;

/// `runsh` started inside a scratch directory.
pub fn runsh_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("runsh").expect("Failed to find runsh binary for testing");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}
