use crate::error::{FrontierError, Result};
use crate::graph::algos::shared::{ids_of, join_ids, unfinalized_ids, Phase};
use crate::graph::frontier::{FrontierStats, PriorityFrontier};
use crate::graph::types::{NodeId, Weight, WeightedGraph};
use crate::log_frontier_stats;
use crate::replay::{Step, StepKind, StepPayload, StepSource};
use serde::Serialize;

/// Distance and predecessor of one node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceEntry {
    pub node: NodeId,
    pub distance: Weight,
    pub predecessor: Option<NodeId>,
}

/// Node → (distance, predecessor), in graph node order.
///
/// Unreached nodes keep an infinite distance and no predecessor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DistanceTable {
    entries: Vec<DistanceEntry>,
}

impl DistanceTable {
    pub fn get(&self, node: &str) -> Option<&DistanceEntry> {
        self.entries.iter().find(|e| e.node == node)
    }

    pub fn distance(&self, node: &str) -> Option<Weight> {
        self.get(node).map(|e| e.distance)
    }

    pub fn predecessor(&self, node: &str) -> Option<&str> {
        self.get(node).and_then(|e| e.predecessor.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DistanceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(predecessor, node)` for every node that has a predecessor: the
    /// shortest-path tree grown so far
    pub fn tree_edges(&self) -> Vec<(NodeId, NodeId)> {
        self.entries
            .iter()
            .filter_map(|e| Some((e.predecessor.clone()?, e.node.clone())))
            .collect()
    }

    /// True if `a`-`b` is a shortest-path tree edge, in either direction
    pub fn is_tree_edge(&self, a: &str, b: &str) -> bool {
        self.predecessor(b) == Some(a) || self.predecessor(a) == Some(b)
    }

    /// Walk predecessors from `target` back to `source`.
    ///
    /// Returns `None` ("no path") when the walk does not arrive at `source`.
    pub fn path_to(&self, source: &str, target: &str) -> Option<ShortestPath> {
        let cost = self.distance(target)?;
        let mut nodes = vec![target.to_string()];
        let mut current = target;
        while current != source {
            // A predecessor chain longer than the table means a cycle
            if nodes.len() > self.entries.len() {
                return None;
            }
            current = self.predecessor(current)?;
            nodes.push(current.to_string());
        }
        nodes.reverse();
        Some(ShortestPath { nodes, cost })
    }
}

/// A reconstructed source → target path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    pub nodes: Vec<NodeId>,
    pub cost: Weight,
}

impl ShortestPath {
    /// `(predecessor, node)` pairs along the path
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        self.nodes
            .windows(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect()
    }

    /// True if the path uses the edge `a`-`b` in either direction
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.nodes
            .windows(2)
            .any(|pair| (pair[0] == a && pair[1] == b) || (pair[0] == b && pair[1] == a))
    }
}

/// State captured at each Dijkstra step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathSnapshot {
    /// Node finalized at this step
    pub current: Option<NodeId>,
    /// Finalized nodes in finalization order
    pub finalized: Vec<NodeId>,
    /// Neighbors whose distance was lowered at this step
    pub relaxed: Vec<NodeId>,
    pub table: DistanceTable,
}

/// Final summary of a shortest-path run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathOutcome {
    pub source: NodeId,
    pub target: Option<NodeId>,
    pub distances: DistanceTable,
    /// Present only in target mode when the target was reached
    pub path: Option<ShortestPath>,
    pub unreached: Vec<NodeId>,
    pub frontier: FrontierStats,
}

/// Dijkstra's algorithm as a step source.
///
/// Each step pops the frontier until it finds a node that is not finalized,
/// finalizes it and relaxes its unfinalized neighbors. Superseded frontier
/// entries are discarded when popped. With a target, the run stops right
/// after the target is finalized.
#[derive(Debug)]
pub struct ShortestPathEngine<'g> {
    graph: &'g WeightedGraph,
    source: usize,
    target: Option<usize>,
    distance: Vec<Weight>,
    predecessor: Vec<Option<usize>>,
    finalized: Vec<bool>,
    order: Vec<usize>,
    frontier: PriorityFrontier<Weight, usize>,
    phase: Phase,
    emitted: usize,
}

impl<'g> ShortestPathEngine<'g> {
    /// Prepare a run from `source`, optionally stopping at `target`
    #[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
    pub fn new(graph: &'g WeightedGraph, source: &str, target: Option<&str>) -> Result<Self> {
        let source_idx = graph.require(source)?;
        let target_idx = target.map(|t| graph.require(t)).transpose()?;
        if target_idx == Some(source_idx) {
            return Err(FrontierError::SameEndpoints {
                node: source.to_string(),
            });
        }

        let n = graph.node_count();
        let mut distance = vec![Weight::INFINITY; n];
        distance[source_idx] = Weight::ZERO;
        let mut frontier = PriorityFrontier::new();
        frontier.insert(Weight::ZERO, source_idx, None);

        Ok(ShortestPathEngine {
            graph,
            source: source_idx,
            target: target_idx,
            distance,
            predecessor: vec![None; n],
            finalized: vec![false; n],
            order: Vec::with_capacity(n),
            frontier,
            phase: Phase::Ready,
            emitted: 0,
        })
    }

    pub fn source(&self) -> &str {
        self.graph.id_at(self.source)
    }

    pub fn target(&self) -> Option<&str> {
        self.target.map(|t| self.graph.id_at(t))
    }

    /// Current distance table
    pub fn table(&self) -> DistanceTable {
        let entries = self
            .graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, node)| DistanceEntry {
                node: node.id.clone(),
                distance: self.distance[i],
                predecessor: self.predecessor[i].map(|p| self.graph.id_at(p).to_string()),
            })
            .collect();
        DistanceTable { entries }
    }

    /// Path to the target, if a target was given and reached
    pub fn path(&self) -> Option<ShortestPath> {
        let target = self.target?;
        if !self.finalized[target] {
            return None;
        }
        self.table().path_to(self.source(), self.graph.id_at(target))
    }

    pub fn frontier_stats(&self) -> FrontierStats {
        self.frontier.stats()
    }

    /// Summary of the run so far (final once the engine is finished)
    pub fn outcome(&self) -> ShortestPathOutcome {
        ShortestPathOutcome {
            source: self.source().to_string(),
            target: self.target().map(str::to_string),
            distances: self.table(),
            path: self.path(),
            unreached: self
                .graph
                .nodes()
                .iter()
                .zip(&self.distance)
                .filter(|(_, distance)| !distance.is_finite())
                .map(|(node, _)| node.id.clone())
                .collect(),
            frontier: self.frontier.stats(),
        }
    }

    fn snapshot(&self, current: Option<usize>, relaxed: &[usize]) -> StepPayload {
        StepPayload::ShortestPath(ShortestPathSnapshot {
            current: current.map(|c| self.graph.id_at(c).to_string()),
            finalized: ids_of(self.graph, &self.order),
            relaxed: ids_of(self.graph, relaxed),
            table: self.table(),
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

    /// Finalize `u` and relax its neighbors
    fn visit(&mut self, u: usize) -> Step {
        self.finalized[u] = true;
        self.order.push(u);

        let graph = self.graph;
        let mut relaxed = Vec::new();
        for &(v, w) in graph.adjacent(u) {
            if self.finalized[v] {
                continue;
            }
            let candidate = self.distance[u] + w;
            if candidate < self.distance[v] {
                self.distance[v] = candidate;
                self.predecessor[v] = Some(u);
                self.frontier.insert(candidate, v, Some(u));
                relaxed.push(v);
            }
        }

        if self.target == Some(u) {
            self.phase = Phase::TargetReached;
        }

        tracing::debug!(
            node = graph.id_at(u),
            distance = %self.distance[u],
            relaxed = relaxed.len(),
            "visit"
        );

        let mut message = format!(
            "Visiting node {} (distance {})",
            graph.id_at(u),
            self.distance[u]
        );
        if !relaxed.is_empty() {
            let updates: Vec<String> = relaxed
                .iter()
                .map(|&v| format!("{}={}", graph.id_at(v), self.distance[v]))
                .collect();
            message.push_str(&format!("; updated {}", updates.join(", ")));
        }

        let payload = self.snapshot(Some(u), &relaxed);
        self.emit(StepKind::Visiting, payload, message)
    }

    fn finish(&mut self) -> Step {
        self.phase = Phase::Done;
        log_frontier_stats!(self.frontier.stats(), "dijkstra");

        let unreached = unfinalized_ids(self.graph, &self.finalized);
        let (kind, message) = match self.target {
            Some(target) => match self.path() {
                Some(path) => (
                    StepKind::Finished,
                    format!(
                        "Shortest path {} → {}: {} (cost {})",
                        self.source(),
                        self.graph.id_at(target),
                        path.nodes.join(" → "),
                        path.cost
                    ),
                ),
                None => (
                    StepKind::Unreachable,
                    format!(
                        "No path from {} to {}",
                        self.source(),
                        self.graph.id_at(target)
                    ),
                ),
            },
            None if unreached.is_empty() => (
                StepKind::Finished,
                "Algorithm complete: shortest paths found".to_string(),
            ),
            None => (
                StepKind::Unreachable,
                format!("Remaining nodes are unreachable: {}", join_ids(&unreached)),
            ),
        };

        let payload = self.snapshot(None, &[]);
        self.emit(kind, payload, message)
    }
}

impl StepSource for ShortestPathEngine<'_> {
    fn next_step(&mut self) -> Option<Step> {
        match self.phase {
            Phase::Done => return None,
            Phase::TargetReached => return Some(self.finish()),
            Phase::Ready => self.phase = Phase::Running,
            Phase::Running => {}
        }

        while let Some(entry) = self.frontier.pop_min() {
            let u = entry.candidate;
            if self.finalized[u] {
                self.frontier.record_stale();
                tracing::trace!(node = self.graph.id_at(u), key = %entry.key, "stale entry discarded");
                continue;
            }
            return Some(self.visit(u));
        }

        Some(self.finish())
    }

    fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    fn engine_name(&self) -> &'static str {
        "dijkstra"
    }
}
