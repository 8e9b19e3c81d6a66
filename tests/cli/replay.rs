//! Animated runs must match synchronous runs step for step

use crate::support::{frontier, stdout_of};
use predicates::prelude::*;

fn assert_animated_matches_sync(format: &str, command: &[&str]) {
    let mut sync_args = vec!["--format", format, "--steps"];
    sync_args.extend_from_slice(command);
    let mut animated_args = vec!["--format", format, "--animate", "--delay-ms", "0"];
    animated_args.extend_from_slice(command);

    assert_eq!(stdout_of(&animated_args), stdout_of(&sync_args));
}

#[test]
fn test_animated_dijkstra_matches_sync() {
    assert_animated_matches_sync("human", &["dijkstra", "--target", "F"]);
    assert_animated_matches_sync("records", &["dijkstra"]);
}

#[test]
fn test_animated_prim_matches_sync() {
    assert_animated_matches_sync("human", &["prim", "--graph", "spanning-2"]);
    assert_animated_matches_sync("records", &["prim", "--start", "K"]);
}

#[test]
fn test_animated_huffman_matches_sync() {
    assert_animated_matches_sync("human", &["huffman"]);
    assert_animated_matches_sync("json", &["huffman", "--layout"]);
}

#[test]
fn test_animated_human_prints_every_step() {
    frontier()
        .args(["--animate", "--delay-ms", "1", "huffman", "a:1, b:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. Initial frontier: 2 leaves (a:1, b:1)"))
        .stdout(predicate::str::contains("  2. Merged a:1 and b:1 into 2"))
        .stdout(predicate::str::contains("  3. Tree complete"));
}

#[test]
fn test_verbose_logs_frontier_stats() {
    frontier()
        .args(["--verbose", "dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frontier: "))
        .stderr(predicate::str::contains("frontier_stats"));
}

#[test]
fn test_json_logs() {
    frontier()
        .args(["--log-json", "--log-level", "debug", "samples"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}
