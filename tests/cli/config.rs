use crate::support::{frontier, write_temp};
use predicates::prelude::*;

#[test]
fn test_config_file_sets_layout_and_defaults() {
    let (_dir, path) = write_temp(
        "config.toml",
        r#"
[layout]
canvas_width = 1600
vertical_step = 100

[huffman]
default_frequencies = "x:1, y:3"
"#,
    );

    frontier()
        .arg("--config")
        .arg(&path)
        .args(["--format", "records", "traverse", "--layout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P \"1\" x=800 y=50\n"))
        .stdout(predicate::str::contains("P \"2\" x=400 y=150\n"));

    frontier()
        .arg("--config")
        .arg(&path)
        .arg("huffman")
        .assert()
        .success()
        .stdout(predicate::str::contains("Huffman over 2 symbols (x:1, y:3)"));
}

#[test]
fn test_config_from_env_var() {
    let (_dir, path) = write_temp("frontier.toml", "[graph]\ndefault_source = \"D\"\n");

    frontier()
        .env("FRONTIER_CONFIG", &path)
        .arg("dijkstra")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dijkstra from D on shortest-path"));
}

#[test]
fn test_config_dir_default_location() {
    let (dir, _path) = write_temp("config.toml", "[huffman]\nbaseline_bits = 16\n");

    frontier()
        .env("FRONTIER_CONFIG_DIR", dir.path())
        .arg("huffman")
        .assert()
        .success()
        .stdout(predicate::str::contains("96 bits instead of 736"));
}

#[test]
fn test_invalid_interval_rejected() {
    let (_dir, path) = write_temp("config.toml", "[replay]\ninterval_ms = 999999\n");

    frontier()
        .arg("--config")
        .arg(&path)
        .arg("samples")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("replay.interval_ms"));
}

#[test]
fn test_malformed_toml_rejected() {
    let (_dir, path) = write_temp("config.toml", "[layout\ncanvas_width = 1\n");

    frontier()
        .arg("--config")
        .arg(&path)
        .arg("samples")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_missing_explicit_config() {
    frontier()
        .args(["--config", "/nonexistent/frontier.toml", "samples"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "failed to read /nonexistent/frontier.toml",
        ));
}
