//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest paths with optional early stop
//! - `prim`: minimum spanning tree grown from one start node
//! - `shared`: helpers used by both engines

pub mod dijkstra;
pub mod prim;
pub mod shared;

pub use dijkstra::{
    DistanceEntry, DistanceTable, ShortestPath, ShortestPathEngine, ShortestPathOutcome,
    ShortestPathSnapshot,
};
pub use prim::{
    CommittedEdge, FrontierView, SpanningTreeEngine, SpanningTreeResult, SpanningTreeSnapshot,
};
