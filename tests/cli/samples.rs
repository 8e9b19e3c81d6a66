use crate::support::{frontier, json_of};
use predicates::prelude::*;

#[test]
fn test_lists_bundled_inputs() {
    frontier()
        .arg("samples")
        .assert()
        .success()
        .stdout(predicate::str::contains("shortest-path"))
        .stdout(predicate::str::contains("spanning-1"))
        .stdout(predicate::str::contains("spanning-2"))
        .stdout(predicate::str::contains("a:2, b:4, c:8, d:16, e:16"))
        .stdout(predicate::str::contains("1,2,3,4,5,6,7"));
}

#[test]
fn test_json_graph_sizes() {
    let json = json_of(&["samples"]);
    let graphs = json["graphs"].as_array().unwrap();
    assert_eq!(graphs.len(), 3);
    assert_eq!(graphs[0]["name"], "shortest-path");
    assert_eq!(graphs[0]["nodes"], 6);
    assert_eq!(graphs[0]["edges"], 9);
    assert_eq!(graphs[1]["nodes"], 12);
    assert_eq!(graphs[1]["edges"], 19);
    assert_eq!(graphs[2]["nodes"], 10);
    assert_eq!(graphs[2]["edges"], 17);
}
