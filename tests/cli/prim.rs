use crate::support::{frontier, json_of, stdout_of};
use predicates::prelude::*;

#[test]
fn test_figure_one_total() {
    frontier()
        .arg("prim")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prim from A on spanning-1 (12 nodes, 19 edges)"))
        .stdout(predicate::str::is_match(r"(?m)^A-D\s+4\s+4$").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^D-G\s+3\s+7$").unwrap())
        .stdout(predicate::str::contains(
            "Minimum spanning tree complete: total weight 35 over 11 edges",
        ));
}

#[test]
fn test_figure_two_total() {
    frontier()
        .args(["prim", "--graph", "spanning-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total weight 45 over 9 edges"));
}

#[test]
fn test_total_does_not_depend_on_start() {
    for start in ["C", "H", "L"] {
        let json = json_of(&["prim", "--start", start]);
        assert_eq!(json["result"]["start"], start);
        assert_eq!(json["result"]["total_weight"], 35.0);
        assert_eq!(json["result"]["edges"].as_array().unwrap().len(), 11);
    }
}

#[test]
fn test_steps_show_commits() {
    let out = stdout_of(&["--steps", "prim"]);
    assert!(out.contains("  1. Starting tree at A"));
    assert!(out.contains("Added edge A-D (weight 4), total 4"));
    assert!(out.contains("Added edge D-G (weight 3), total 7"));
}

#[test]
fn test_records_edges() {
    let out = stdout_of(&["--format", "records", "prim"]);
    assert!(out.starts_with("H frontier=1 records=1 mode=prim graph=spanning-1 start=A\n"));
    assert!(out.contains("E A D weight=4 total=4\n"));
    assert!(out.contains("E D G weight=3 total=7\n"));
    let edge_lines = out.lines().filter(|l| l.starts_with("E ")).count();
    assert_eq!(edge_lines, 11);
    assert!(out.contains("total=35 edges=11"));
}

#[test]
fn test_isolated_node_left_out() {
    frontier()
        .args(["prim", "--isolate", "L"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "total weight 34 over 10 edges; not reachable from A: L",
        ));
}

#[test]
fn test_unknown_start() {
    frontier()
        .args(["prim", "--start", "Q"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: Q"));
}
