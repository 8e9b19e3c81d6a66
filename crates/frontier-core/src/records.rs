//! Utilities for records output format

use crate::graph::algos::{CommittedEdge, DistanceEntry};
use crate::layout::Point;
use crate::replay::Step;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// H-line opening every records document
pub fn format_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H frontier=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// S-line for one replay step
pub fn format_step_line(step: &Step) -> String {
    format!(
        "S {} {} \"{}\"",
        step.index,
        step.kind,
        escape_quotes(&step.message)
    )
}

/// D-line for one distance table row; `-` marks a missing predecessor
pub fn format_distance_line(entry: &DistanceEntry) -> String {
    format!(
        "D {} dist={} prev={}",
        entry.node,
        entry.distance,
        entry.predecessor.as_deref().unwrap_or("-")
    )
}

/// E-line for a committed spanning tree edge
pub fn format_edge_line(edge: &CommittedEdge) -> String {
    format!(
        "E {} {} weight={} total={}",
        edge.parent, edge.child, edge.weight, edge.running_total
    )
}

/// C-line for one code table entry
pub fn format_code_line(symbol: &str, code: &str, frequency: u64) -> String {
    format!(
        "C \"{}\" code={} freq={} bits={}",
        escape_quotes(symbol),
        code,
        frequency,
        frequency.saturating_mul(code.len() as u64)
    )
}

/// P-line for a laid-out tree node
pub fn format_position_line(label: &str, point: Point) -> String {
    format!("P \"{}\" x={} y={}", escape_quotes(label), point.x, point.y)
}

/// O-line listing one traversal order's values
pub fn format_order_line(order: &str, values: &[&str]) -> String {
    let quoted: Vec<String> = values
        .iter()
        .map(|v| format!("\"{}\"", escape_quotes(v)))
        .collect();
    format!("O {} {}", order, quoted.join(" "))
}

/// T-line carrying run totals
pub fn format_totals_line(fields: &[(&str, String)]) -> String {
    let body: Vec<String> = fields
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    format!("T {}", body.join(" "))
}
