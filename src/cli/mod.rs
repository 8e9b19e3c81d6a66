//! CLI argument parsing for frontier
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config, --animate

pub mod format;
pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use frontier_core::format::OutputFormat;
use frontier_core::graph::SampleGraph;
pub use parse::OrderSelection;
use parse::{parse_delay_ms, parse_output_format, parse_sample_graph, parse_traversal_order};

/// Frontier - step-by-step Dijkstra, Prim and Huffman constructions
#[derive(Parser, Debug)]
#[command(name = "frontier")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs and frontier statistics
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, trace, frontier_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: $FRONTIER_CONFIG_DIR/config.toml)
    #[arg(long, global = true, env = "FRONTIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Replay steps one at a time with a pause between them
    #[arg(long, global = true)]
    pub animate: bool,

    /// Pause between animated steps, overriding the configured interval
    #[arg(long, global = true, value_parser = parse_delay_ms)]
    pub delay_ms: Option<u64>,

    /// Print every step of the run
    #[arg(long, global = true)]
    pub steps: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where a graph comes from
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Named sample graph (see `frontier samples`)
    #[arg(long, value_parser = parse_sample_graph, conflicts_with = "graph_file")]
    pub graph: Option<SampleGraph>,

    /// JSON graph file: {"nodes": [...], "edges": [["A", "B", 4], ...]}
    #[arg(long)]
    pub graph_file: Option<PathBuf>,

    /// Remove every edge touching this node before running
    #[arg(long)]
    pub isolate: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Single-source shortest paths (Dijkstra)
    Dijkstra {
        #[command(flatten)]
        input: GraphArgs,

        /// Source node (default from config, normally A)
        #[arg(long, short)]
        source: Option<String>,

        /// Stop once this node is finalized and print the path to it
        #[arg(long, short)]
        target: Option<String>,
    },

    /// Minimum spanning tree (Prim)
    Prim {
        #[command(flatten)]
        input: GraphArgs,

        /// Start node (default: first node of the graph)
        #[arg(long)]
        start: Option<String>,
    },

    /// Prefix-code tree construction (Huffman)
    Huffman {
        /// Frequencies as `symbol:count` pairs, e.g. "a:2, b:4, c:8"
        #[arg(conflicts_with = "text")]
        frequencies: Option<String>,

        /// Count character frequencies of this text instead
        #[arg(long)]
        text: Option<String>,

        /// Encode a message with the derived codes: plain text, or a
        /// comma-separated symbol list when any symbol is longer than one
        /// character
        #[arg(long)]
        encode: Option<String>,

        /// Print node positions of the finished tree
        #[arg(long)]
        layout: bool,
    },

    /// Binary tree traversals
    Traverse {
        /// Level-order values, `-` for a missing node (default: 1..7)
        #[arg(long)]
        values: Option<String>,

        /// Traversal order: pre, in, post, level, or all
        #[arg(long, default_value = "all", value_parser = parse_traversal_order)]
        order: OrderSelection,

        /// Print node positions
        #[arg(long)]
        layout: bool,
    },

    /// List bundled sample inputs
    Samples,
}
