//! Prefix-code (Huffman) tree construction
//!
//! - `frequency`: parsing and counting symbol frequencies
//! - `tree`: arena of prefix tree nodes addressed by handle
//! - `codes`: code table derivation and compression statistics
//! - `engine`: the step-by-step merge engine

pub mod codes;
pub mod engine;
pub mod frequency;
pub mod tree;

pub use codes::{CodeTable, CompressionStats};
pub use engine::{MergeRecord, PrefixCodeEngine, PrefixCodeOutcome, PrefixCodeSnapshot};
pub use frequency::{FrequencyMap, SymbolFrequency, MAX_TOTAL_FREQUENCY};
pub use tree::{NodeHandle, PrefixKind, PrefixNode, PrefixTree};

/// Frequencies used when none are given
pub const SAMPLE_FREQUENCIES: &str = "a:2, b:4, c:8, d:16, e:16";
