use crate::error::Result;
use crate::graph::algos::shared::{ids_of, join_ids, unfinalized_ids, Phase};
use crate::graph::frontier::{FrontierStats, PriorityFrontier};
use crate::graph::types::{NodeId, Weight, WeightedGraph};
use crate::log_frontier_stats;
use crate::replay::{Step, StepKind, StepPayload, StepSource};
use serde::Serialize;

/// A spanning tree edge, with the total weight right after it was committed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommittedEdge {
    pub parent: NodeId,
    pub child: NodeId,
    pub weight: Weight,
    pub running_total: Weight,
}

/// Live frontier entry as shown to a presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontierView {
    pub key: Weight,
    pub node: NodeId,
    pub via: Option<NodeId>,
}

/// State captured at each Prim step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTreeSnapshot {
    /// Node finalized at this step
    pub current: Option<NodeId>,
    pub finalized: Vec<NodeId>,
    /// Edges committed so far, in commit order
    pub committed: Vec<CommittedEdge>,
    pub total_weight: Weight,
    /// Best pending entry per undiscovered node, in pop order
    pub frontier: Vec<FrontierView>,
}

/// Spanning tree (or forest component) grown from the start node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTreeResult {
    pub start: NodeId,
    pub edges: Vec<CommittedEdge>,
    pub total_weight: Weight,
    /// Nodes outside the start node's component
    pub absent: Vec<NodeId>,
    pub frontier: FrontierStats,
}

impl SpanningTreeResult {
    /// Nodes covered by the tree
    pub fn node_count(&self) -> usize {
        self.edges.len() + 1
    }

    /// True when every node of the graph is covered
    pub fn is_spanning(&self) -> bool {
        self.absent.is_empty()
    }

    /// True if the tree uses the edge `a`-`b` in either direction
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.edges
            .iter()
            .any(|e| (e.parent == a && e.child == b) || (e.parent == b && e.child == a))
    }
}

/// Prim's algorithm as a step source.
///
/// An edge is committed when its child node is popped from the frontier, not
/// when the child is discovered. A neighbor gets a new frontier entry only
/// when the connecting edge beats the best entry already queued for it.
#[derive(Debug)]
pub struct SpanningTreeEngine<'g> {
    graph: &'g WeightedGraph,
    start: usize,
    best: Vec<Option<Weight>>,
    finalized: Vec<bool>,
    order: Vec<usize>,
    committed: Vec<CommittedEdge>,
    total: Weight,
    frontier: PriorityFrontier<Weight, usize>,
    phase: Phase,
    emitted: usize,
}

impl<'g> SpanningTreeEngine<'g> {
    /// Prepare a run from `start`, or from the first node when `None`
    #[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
    pub fn new(graph: &'g WeightedGraph, start: Option<&str>) -> Result<Self> {
        let start_idx = match start {
            Some(id) => graph.require(id)?,
            None => 0,
        };

        let n = graph.node_count();
        let mut best = vec![None; n];
        best[start_idx] = Some(Weight::ZERO);
        let mut frontier = PriorityFrontier::new();
        frontier.insert(Weight::ZERO, start_idx, None);

        Ok(SpanningTreeEngine {
            graph,
            start: start_idx,
            best,
            finalized: vec![false; n],
            order: Vec::with_capacity(n),
            committed: Vec::with_capacity(n.saturating_sub(1)),
            total: Weight::ZERO,
            frontier,
            phase: Phase::Ready,
            emitted: 0,
        })
    }

    pub fn start(&self) -> &str {
        self.graph.id_at(self.start)
    }

    pub fn total_weight(&self) -> Weight {
        self.total
    }

    pub fn committed(&self) -> &[CommittedEdge] {
        &self.committed
    }

    pub fn frontier_stats(&self) -> FrontierStats {
        self.frontier.stats()
    }

    /// Result so far (final once the engine is finished)
    pub fn result(&self) -> SpanningTreeResult {
        SpanningTreeResult {
            start: self.start().to_string(),
            edges: self.committed.clone(),
            total_weight: self.total,
            absent: unfinalized_ids(self.graph, &self.finalized),
            frontier: self.frontier.stats(),
        }
    }

    fn frontier_view(&self) -> Vec<FrontierView> {
        self.frontier
            .entries_in_order()
            .into_iter()
            .filter(|e| !self.finalized[e.candidate] && self.best[e.candidate] == Some(e.key))
            .map(|e| FrontierView {
                key: e.key,
                node: self.graph.id_at(e.candidate).to_string(),
                via: e.provenance.map(|p| self.graph.id_at(p).to_string()),
            })
            .collect()
    }

    fn snapshot(&self, current: Option<usize>) -> StepPayload {
        StepPayload::SpanningTree(SpanningTreeSnapshot {
            current: current.map(|c| self.graph.id_at(c).to_string()),
            finalized: ids_of(self.graph, &self.order),
            committed: self.committed.clone(),
            total_weight: self.total,
            frontier: self.frontier_view(),
        })
    }

    fn emit(&mut self, kind: StepKind, payload: StepPayload, message: String) -> Step {
        let step = Step {
            index: self.emitted,
            kind,
            payload,
            message,
        };
        self.emitted += 1;
        step
    }

    fn grow(&mut self, u: usize, key: Weight, provenance: Option<usize>) -> Step {
        self.finalized[u] = true;
        self.order.push(u);

        let graph = self.graph;
        let (kind, message) = match provenance {
            Some(parent) => {
                self.total += key;
                self.committed.push(CommittedEdge {
                    parent: graph.id_at(parent).to_string(),
                    child: graph.id_at(u).to_string(),
                    weight: key,
                    running_total: self.total,
                });
                tracing::debug!(
                    parent = graph.id_at(parent),
                    child = graph.id_at(u),
                    weight = %key,
                    total = %self.total,
                    "commit"
                );
                (
                    StepKind::Committed,
                    format!(
                        "Added edge {}-{} (weight {}), total {}",
                        graph.id_at(parent),
                        graph.id_at(u),
                        key,
                        self.total
                    ),
                )
            }
            None => (
                StepKind::Visiting,
                format!("Starting tree at {}", graph.id_at(u)),
            ),
        };

        for &(v, w) in graph.adjacent(u) {
            if self.finalized[v] {
                continue;
            }
            if self.best[v].is_none_or(|b| w < b) {
                self.best[v] = Some(w);
                self.frontier.insert(w, v, Some(u));
            }
        }

        let payload = self.snapshot(Some(u));
        self.emit(kind, payload, message)
    }

    fn finish(&mut self) -> Step {
        self.phase = Phase::Done;
        log_frontier_stats!(self.frontier.stats(), "prim");

        let absent = unfinalized_ids(self.graph, &self.finalized);
        let mut message = format!(
            "Minimum spanning tree complete: total weight {} over {} edges",
            self.total,
            self.committed.len()
        );
        if !absent.is_empty() {
            message.push_str(&format!(
                "; not reachable from {}: {}",
                self.start(),
                join_ids(&absent)
            ));
        }

        let payload = self.snapshot(None);
        self.emit(StepKind::Finished, payload, message)
    }
}

impl StepSource for SpanningTreeEngine<'_> {
    fn next_step(&mut self) -> Option<Step> {
        match self.phase {
            Phase::Done => return None,
            Phase::Ready => self.phase = Phase::Running,
            Phase::Running | Phase::TargetReached => {}
        }

        while let Some(entry) = self.frontier.pop_min() {
            if self.finalized[entry.candidate] {
                self.frontier.record_stale();
                tracing::trace!(
                    node = self.graph.id_at(entry.candidate),
                    key = %entry.key,
                    "stale entry discarded"
                );
                continue;
            }
            return Some(self.grow(entry.candidate, entry.key, entry.provenance));
        }

        Some(self.finish())
    }

    fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    fn engine_name(&self) -> &'static str {
        "prim"
    }
}
