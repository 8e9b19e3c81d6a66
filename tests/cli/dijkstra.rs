use crate::support::{frontier, json_of, stdout_of, write_temp};
use predicates::prelude::*;

#[test]
fn test_default_run_prints_distance_table() {
    frontier()
        .arg("dijkstra")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Dijkstra from A on shortest-path (6 nodes, 9 edges)",
        ))
        .stdout(predicate::str::is_match(r"(?m)^A\s+0\s+-$").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^B\s+3\s+C$").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^F\s+13\s+E$").unwrap())
        .stdout(predicate::str::contains("Algorithm complete: shortest paths found"));
}

#[test]
fn test_target_prints_path() {
    frontier()
        .args(["dijkstra", "--target", "F"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Shortest path A → F: A → C → B → D → E → F (cost 13)",
        ));
}

#[test]
fn test_steps_flag_prints_trace() {
    let out = stdout_of(&["--steps", "dijkstra"]);
    assert!(out.contains("  1. Visiting node A (distance 0); updated B=4, C=2"));
    assert!(out.contains("  2. Visiting node C (distance 2); updated B=3, D=10, E=12"));
    let step_lines = out.lines().filter(|l| l.starts_with("  ")).count();
    // six visits plus the terminal step
    assert_eq!(step_lines, 7);
}

#[test]
fn test_json_outcome() {
    let json = json_of(&["dijkstra", "--target", "F"]);
    assert_eq!(json["mode"], "dijkstra");
    assert_eq!(json["outcome"]["path"]["cost"], 13.0);
    assert_eq!(
        json["outcome"]["path"]["nodes"],
        serde_json::json!(["A", "C", "B", "D", "E", "F"])
    );
    assert!(json.get("steps").is_none());
}

#[test]
fn test_json_lists_shortest_path_tree() {
    let json = json_of(&["dijkstra"]);
    let edges = json["tree_edges"].as_array().unwrap();
    assert_eq!(edges.len(), 5);
    assert!(edges.contains(&serde_json::json!(["A", "C"])));
    assert!(edges.contains(&serde_json::json!(["E", "F"])));
}

#[test]
fn test_json_steps_included_on_request() {
    let json = json_of(&["--steps", "dijkstra"]);
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 7);
    assert_eq!(steps[0]["kind"], "visiting");
    assert_eq!(steps[0]["payload"]["engine"], "shortest_path");
    assert_eq!(steps[6]["kind"], "finished");
}

#[test]
fn test_records_output() {
    let out = stdout_of(&["--format", "records", "dijkstra", "--target", "F"]);
    let mut lines = out.lines();
    assert_eq!(
        lines.next(),
        Some("H frontier=1 records=1 mode=dijkstra graph=shortest-path source=A target=F")
    );
    assert!(out.contains("D A dist=0 prev=-"));
    assert!(out.contains("D F dist=13 prev=E"));
    assert!(out.contains("path=A,C,B,D,E,F cost=13"));
}

#[test]
fn test_isolated_node_is_unreachable() {
    frontier()
        .args(["dijkstra", "--isolate", "F"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^F\s+∞\s+-$").unwrap())
        .stdout(predicate::str::contains("Remaining nodes are unreachable: F"));
}

#[test]
fn test_isolated_target_has_no_path() {
    frontier()
        .args(["dijkstra", "--isolate", "F", "--target", "F"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from A to F"));
}

#[test]
fn test_graph_file_input() {
    let (_dir, path) = write_temp(
        "triangle.json",
        r#"{"nodes": ["P", "Q", "R"], "edges": [["P", "Q", 1], ["Q", "R", 2], ["P", "R", 5]]}"#,
    );
    frontier()
        .args(["dijkstra", "--source", "P", "--target", "R", "--graph-file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("P → Q → R (cost 3)"));
}

#[test]
fn test_graph_file_with_negative_weight_rejected() {
    let (_dir, path) = write_temp(
        "negative.json",
        r#"{"nodes": ["P", "Q"], "edges": [["P", "Q", -1]]}"#,
    );
    frontier()
        .args(["dijkstra", "--source", "P", "--graph-file"])
        .arg(&path)
        .assert()
        .code(2);
}

#[test]
fn test_graph_and_graph_file_conflict() {
    frontier()
        .args(["dijkstra", "--graph", "spanning-1", "--graph-file", "g.json"])
        .assert()
        .code(2);
}
