//! Configuration type definitions

use crate::huffman::engine::DEFAULT_BASELINE_BITS;
use crate::huffman::SAMPLE_FREQUENCIES;
use crate::layout::LayoutConfig;
use serde::{Deserialize, Serialize};

/// Largest accepted replay interval
pub const MAX_INTERVAL_MS: u64 = 60_000;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontierConfig {
    #[serde(default)]
    pub replay: ReplayConfig,

    #[serde(default)]
    pub layout: LayoutSection,

    #[serde(default)]
    pub huffman: HuffmanConfig,

    #[serde(default)]
    pub graph: GraphConfig,
}

/// Pacing of animated replays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Milliseconds between two pulled steps
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

/// Canvas size plus tree placement parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSection {
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f64,

    #[serde(flatten)]
    pub tree: LayoutConfig,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            tree: LayoutConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HuffmanConfig {
    /// Used when no frequencies are given on the command line
    #[serde(default = "default_frequencies")]
    pub default_frequencies: String,

    /// Bits per symbol of the fixed-width baseline
    #[serde(default = "default_baseline_bits")]
    pub baseline_bits: u32,
}

impl Default for HuffmanConfig {
    fn default() -> Self {
        Self {
            default_frequencies: default_frequencies(),
            baseline_bits: default_baseline_bits(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Dijkstra source when none is given
    #[serde(default = "default_source")]
    pub default_source: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_source: default_source(),
        }
    }
}

fn default_interval_ms() -> u64 {
    1000
}

fn default_canvas_width() -> f64 {
    800.0
}

fn default_frequencies() -> String {
    SAMPLE_FREQUENCIES.to_string()
}

fn default_baseline_bits() -> u32 {
    DEFAULT_BASELINE_BITS
}

fn default_source() -> String {
    "A".to_string()
}
