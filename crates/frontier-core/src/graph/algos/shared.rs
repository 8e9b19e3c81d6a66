use crate::graph::types::{NodeId, WeightedGraph};

/// Engine progress shared by the graph engines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Ready,
    Running,
    /// Dijkstra only: the target was finalized, the summary step is pending
    TargetReached,
    Done,
}

/// Map node indices back to ids, preserving order
pub(crate) fn ids_of(graph: &WeightedGraph, indices: &[usize]) -> Vec<NodeId> {
    indices
        .iter()
        .map(|&i| graph.id_at(i).to_string())
        .collect()
}

/// Ids of nodes that were never finalized, in graph order
pub(crate) fn unfinalized_ids(graph: &WeightedGraph, finalized: &[bool]) -> Vec<NodeId> {
    finalized
        .iter()
        .enumerate()
        .filter(|(_, done)| !**done)
        .map(|(i, _)| graph.id_at(i).to_string())
        .collect()
}

/// Comma-separated list for step messages
pub(crate) fn join_ids(ids: &[NodeId]) -> String {
    ids.join(", ")
}
