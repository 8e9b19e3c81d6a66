//! Command-level integration tests for the frontier CLI

mod config;
mod dijkstra;
mod huffman;
mod prim;
mod replay;
mod samples;
mod support;
mod traverse;
