use crate::support::{frontier, json_of, stdout_of};
use predicates::prelude::*;

#[test]
fn test_all_orders_on_sample() {
    frontier()
        .arg("traverse")
        .assert()
        .success()
        .stdout(predicate::str::contains("Binary tree with 7 nodes"))
        .stdout(predicate::str::is_match(r"pre-order:\s+1 2 4 5 3 6 7").unwrap())
        .stdout(predicate::str::is_match(r"in-order:\s+4 2 5 1 6 3 7").unwrap())
        .stdout(predicate::str::is_match(r"post-order:\s+4 5 2 6 7 3 1").unwrap())
        .stdout(predicate::str::is_match(r"level-order:\s+1 2 3 4 5 6 7").unwrap());
}

#[test]
fn test_single_order_with_gaps() {
    let out = stdout_of(&["--quiet", "traverse", "--values", "a,b,c,-,d", "--order", "in"]);
    assert_eq!(out, "in-order: b d a c\n");
}

#[test]
fn test_records_orders() {
    let out = stdout_of(&["--format", "records", "traverse", "--order", "pre"]);
    assert!(out.starts_with("H frontier=1 records=1 mode=traverse nodes=7\n"));
    assert!(out.contains("O pre-order \"1\" \"2\" \"4\" \"5\" \"3\" \"6\" \"7\"\n"));
    assert!(out.ends_with("T orders=1\n"));
}

#[test]
fn test_layout_records() {
    let out = stdout_of(&["--format", "records", "traverse", "--layout"]);
    assert!(out.contains("P \"1\" x=400 y=50\n"));
    assert!(out.contains("P \"2\" x=200 y=130\n"));
    assert!(out.contains("P \"3\" x=600 y=130\n"));
    assert!(out.contains("P \"4\" x=100 y=210\n"));
    assert!(out.contains("P \"7\" x=700 y=210\n"));
}

#[test]
fn test_json_orders() {
    let json = json_of(&["traverse", "--order", "level"]);
    assert_eq!(json["nodes"], 7);
    assert_eq!(
        json["orders"]["level-order"],
        serde_json::json!(["1", "2", "3", "4", "5", "6", "7"])
    );
    assert!(json["orders"].get("pre-order").is_none());
}

#[test]
fn test_orphan_value_rejected() {
    frontier()
        .args(["traverse", "--values", "1,-,3,4"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_order_rejected() {
    frontier()
        .args(["traverse", "--order", "zigzag"])
        .assert()
        .code(2);
}
