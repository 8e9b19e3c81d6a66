//! Frontier Core Library
//!
//! Priority-frontier greedy construction engines (Dijkstra, Prim, Huffman),
//! a pull-based step replay driver, and deterministic tree layout.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod huffman;
pub mod layout;
pub mod logging;
pub mod records;
pub mod replay;
pub mod tree;
