use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for frontier that ignores any user configuration
pub fn frontier() -> Command {
    let mut cmd = cargo_bin_cmd!("frontier");
    cmd.env("FRONTIER_CONFIG_DIR", env!("CARGO_TARGET_TMPDIR"))
        .env_remove("FRONTIER_CONFIG")
        .env_remove("FRONTIER_LOG");
    cmd
}

/// Run frontier with `args` and return stdout, asserting success
pub fn stdout_of(args: &[&str]) -> String {
    let output = frontier().args(args).output().unwrap();
    assert!(
        output.status.success(),
        "frontier {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Run frontier with `args` and parse stdout as JSON
pub fn json_of(args: &[&str]) -> serde_json::Value {
    let mut full = vec!["--format", "json"];
    full.extend_from_slice(args);
    serde_json::from_str(&stdout_of(&full)).unwrap()
}

/// Write `content` to `name` inside a fresh temp dir
pub fn write_temp(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}
