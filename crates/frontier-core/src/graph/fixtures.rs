//! Named sample graphs
//!
//! Each fixture is built fresh on request; nothing here is shared state.

use crate::error::{FrontierError, Result};
use crate::graph::types::WeightedGraph;
use std::fmt;
use std::str::FromStr;

/// The sample graphs bundled with frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleGraph {
    /// 6 nodes, 9 edges; the shortest-path demo graph
    ShortestPath,
    /// 12 nodes, 19 edges; spanning tree figure 1
    SpanningFigure1,
    /// 10 nodes, 17 edges; spanning tree figure 2
    SpanningFigure2,
}

impl SampleGraph {
    pub const ALL: [SampleGraph; 3] = [
        SampleGraph::ShortestPath,
        SampleGraph::SpanningFigure1,
        SampleGraph::SpanningFigure2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SampleGraph::ShortestPath => "shortest-path",
            SampleGraph::SpanningFigure1 => "spanning-1",
            SampleGraph::SpanningFigure2 => "spanning-2",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SampleGraph::ShortestPath => "6 nodes, 9 edges (shortest path demo)",
            SampleGraph::SpanningFigure1 => "12 nodes, 19 edges (spanning tree figure 1)",
            SampleGraph::SpanningFigure2 => "10 nodes, 17 edges (spanning tree figure 2)",
        }
    }

    pub fn build(self) -> Result<WeightedGraph> {
        match self {
            SampleGraph::ShortestPath => shortest_path_sample(),
            SampleGraph::SpanningFigure1 => spanning_figure_1(),
            SampleGraph::SpanningFigure2 => spanning_figure_2(),
        }
    }
}

impl fmt::Display for SampleGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleGraph {
    type Err = FrontierError;

    fn from_str(s: &str) -> Result<Self> {
        SampleGraph::ALL
            .into_iter()
            .find(|g| g.name() == s.to_lowercase())
            .ok_or_else(|| {
                let known: Vec<_> = SampleGraph::ALL.iter().map(|g| g.name()).collect();
                FrontierError::invalid_value(
                    "sample graph",
                    format!("{} (expected one of: {})", s, known.join(", ")),
                )
            })
    }
}

fn from_triples(nodes: &[&str], edges: &[(&str, &str, u32)]) -> Result<WeightedGraph> {
    edges
        .iter()
        .fold(WeightedGraph::builder().nodes(nodes.iter().copied()), |b, &(u, v, w)| {
            b.edge(u, v, f64::from(w))
        })
        .build()
}

/// Six-node graph with drawing coordinates
pub fn shortest_path_sample() -> Result<WeightedGraph> {
    let positions = [
        ("A", 100.0, 300.0),
        ("B", 300.0, 100.0),
        ("C", 300.0, 500.0),
        ("D", 500.0, 100.0),
        ("E", 500.0, 500.0),
        ("F", 700.0, 300.0),
    ];
    let edges = [
        ("A", "B", 4),
        ("A", "C", 2),
        ("B", "C", 1),
        ("B", "D", 5),
        ("C", "D", 8),
        ("C", "E", 10),
        ("D", "E", 2),
        ("D", "F", 6),
        ("E", "F", 3),
    ];
    edges
        .iter()
        .fold(
            positions
                .iter()
                .fold(WeightedGraph::builder(), |b, &(id, x, y)| b.node_at(id, x, y)),
            |b, &(u, v, w)| b.edge(u, v, f64::from(w)),
        )
        .build()
}

pub fn spanning_figure_1() -> Result<WeightedGraph> {
    from_triples(
        &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"],
        &[
            ("A", "D", 4),
            ("B", "D", 8),
            ("B", "C", 2),
            ("C", "E", 5),
            ("C", "J", 10),
            ("D", "F", 6),
            ("D", "G", 3),
            ("D", "K", 6),
            ("D", "H", 9),
            ("E", "H", 4),
            ("E", "I", 9),
            ("E", "J", 2),
            ("F", "G", 1),
            ("F", "K", 7),
            ("G", "K", 4),
            ("H", "I", 3),
            ("H", "K", 6),
            ("I", "J", 7),
            ("J", "L", 1),
        ],
    )
}

pub fn spanning_figure_2() -> Result<WeightedGraph> {
    from_triples(
        &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"],
        &[
            ("A", "B", 2),
            ("A", "D", 15),
            ("B", "C", 3),
            ("B", "D", 5),
            ("B", "E", 17),
            ("C", "E", 12),
            ("C", "F", 18),
            ("D", "E", 4),
            ("D", "G", 6),
            ("E", "F", 13),
            ("E", "G", 11),
            ("F", "H", 7),
            ("G", "H", 19),
            ("G", "I", 9),
            ("H", "I", 8),
            ("H", "J", 16),
            ("I", "J", 1),
        ],
    )
}
