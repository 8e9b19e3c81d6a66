//! Immutable step snapshots produced by the engines

use crate::graph::algos::dijkstra::ShortestPathSnapshot;
use crate::graph::algos::prim::SpanningTreeSnapshot;
use crate::huffman::engine::PrefixCodeSnapshot;
use serde::Serialize;
use std::fmt;

/// What happened at a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Initial frontier contents (Huffman's starting forest)
    Seeded,
    /// A node was popped and finalized
    Visiting,
    /// A spanning tree edge was committed
    Committed,
    /// Two prefix trees were merged
    Merged,
    /// The engine ran to completion
    Finished,
    /// The frontier drained while some nodes were never reached
    Unreachable,
}

impl StepKind {
    /// True for the kinds that end a trace
    pub fn is_terminal(self) -> bool {
        matches!(self, StepKind::Finished | StepKind::Unreachable)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepKind::Seeded => "seeded",
            StepKind::Visiting => "visiting",
            StepKind::Committed => "committed",
            StepKind::Merged => "merged",
            StepKind::Finished => "finished",
            StepKind::Unreachable => "unreachable",
        };
        f.write_str(name)
    }
}

/// Engine-specific partial structure captured at a step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "engine", rename_all = "snake_case")]
pub enum StepPayload {
    ShortestPath(ShortestPathSnapshot),
    SpanningTree(SpanningTreeSnapshot),
    PrefixCode(PrefixCodeSnapshot),
}

/// One entry of an engine's replayable trace.
///
/// Steps own their snapshot data, so nothing an engine does later can alter
/// a step that was already handed out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Position in the trace, starting at 0
    pub index: usize,
    pub kind: StepKind,
    pub payload: StepPayload,
    pub message: String,
}
