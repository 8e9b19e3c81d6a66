//! Weighted graphs and the frontier-driven graph engines
//!
//! - `types`: nodes, edges, weights and the immutable `WeightedGraph`
//! - `frontier`: the min-priority frontier with lazy deletion
//! - `algos`: Dijkstra shortest paths and Prim spanning trees
//! - `fixtures`: named sample graphs

pub mod algos;
pub mod fixtures;
pub mod frontier;
pub mod types;

pub use algos::{ShortestPathEngine, SpanningTreeEngine};
pub use fixtures::SampleGraph;
pub use frontier::{FrontierEntry, FrontierStats, PriorityFrontier};
pub use types::{Edge, GraphBuilder, GraphSpec, Node, NodeId, Weight, WeightedGraph};
