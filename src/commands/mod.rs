//! Subcommand implementations

pub mod dijkstra;
pub mod dispatch;
pub mod graph_input;
pub mod huffman;
pub mod prim;
pub mod replay;
pub mod samples;
pub mod traverse;
