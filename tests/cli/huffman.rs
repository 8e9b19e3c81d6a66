use crate::support::{frontier, json_of, stdout_of};
use predicates::prelude::*;

#[test]
fn test_default_frequencies() {
    frontier()
        .arg("huffman")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Huffman over 5 symbols (a:2, b:4, c:8, d:16, e:16)",
        ))
        .stdout(predicate::str::is_match(r"(?m)^a\s+2\s+1000$").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^b\s+4\s+1001$").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^c\s+8\s+101$").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^d\s+16\s+11$").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^e\s+16\s+0$").unwrap())
        .stdout(predicate::str::contains(
            "Tree complete: 5 codes, 96 bits instead of 368 (73.9% saved)",
        ));
}

#[test]
fn test_merge_steps() {
    let out = stdout_of(&["--steps", "huffman"]);
    assert!(out.contains("  1. Initial frontier: 5 leaves (a:2, b:4, c:8, d:16, e:16)"));
    assert!(out.contains("  2. Merged a:2 and b:4 into 6"));
    assert!(out.contains("  3. Merged 6 and c:8 into 14"));
    assert!(out.contains("  4. Merged 14 and d:16 into 30"));
    assert!(out.contains("  5. Merged e:16 and 30 into 46"));
}

#[test]
fn test_encode_round_trip() {
    frontier()
        .args(["huffman", "--encode", "abe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Encoded \"abe\": 100010010"))
        .stdout(predicate::str::contains("Decoded: \"abe\""));
}

#[test]
fn test_encode_unknown_symbol() {
    frontier()
        .args(["huffman", "--encode", "abz"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("z has no code"));
}

#[test]
fn test_encode_multi_character_symbols() {
    let json = json_of(&["huffman", "solo:3, duo:1", "--encode", "solo, duo, solo"]);
    let solo = json["codes"]["solo"].as_str().unwrap().to_string();
    let duo = json["codes"]["duo"].as_str().unwrap().to_string();
    assert_eq!(json["encoded"]["bits"], format!("{}{}{}", solo, duo, solo));
    assert_eq!(json["encoded"]["decoded"], "solo,duo,solo");
}

#[test]
fn test_text_sample_input() {
    let json = json_of(&["huffman", "--text", "abracadabra"]);
    let freqs = json["frequencies"].as_array().unwrap();
    assert_eq!(freqs[0]["symbol"], "a");
    assert_eq!(freqs[0]["frequency"], 5);
    assert_eq!(json["stats"]["original_bits"], 88);
    // the most frequent symbol gets a one-bit code
    assert_eq!(json["codes"]["a"].as_str().unwrap().len(), 1);
}

#[test]
fn test_single_symbol() {
    let json = json_of(&["huffman", "x:7", "--encode", "xx"]);
    assert_eq!(json["codes"]["x"], "0");
    assert_eq!(json["encoded"]["bits"], "00");
    assert_eq!(json["encoded"]["decoded"], "xx");
}

#[test]
fn test_duplicate_symbol_rejected() {
    frontier()
        .args(["huffman", "a:1, a:2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("symbol already exists: a"));
}

#[test]
fn test_records_codes_and_totals() {
    let out = stdout_of(&["--format", "records", "huffman"]);
    assert!(out.starts_with("H frontier=1 records=1 mode=huffman symbols=5 baseline=8\n"));
    assert!(out.contains("C \"a\" code=1000 freq=2 bits=8\n"));
    assert!(out.contains("C \"e\" code=0 freq=16 bits=16\n"));
    assert!(out.contains("original_bits=368 compressed_bits=96 saved=73.9"));
}

#[test]
fn test_layout_positions() {
    let json = json_of(&["huffman", "--layout"]);
    let layout = json["layout"].as_array().unwrap();
    assert_eq!(layout.len(), 9);

    let root = layout.iter().find(|n| n["label"] == "46").unwrap();
    assert_eq!(root["x"], 400.0);
    assert_eq!(root["y"], 50.0);

    // e:16 is the root's left child
    let e = layout.iter().find(|n| n["label"] == "e:16").unwrap();
    assert_eq!(e["x"], 200.0);
    assert_eq!(e["y"], 130.0);
}
