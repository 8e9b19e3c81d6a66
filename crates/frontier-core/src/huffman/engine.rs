use crate::graph::frontier::{FrontierStats, PriorityFrontier};
use crate::huffman::codes::{CodeTable, CompressionStats};
use crate::huffman::frequency::FrequencyMap;
use crate::huffman::tree::{NodeHandle, PrefixTree};
use crate::log_frontier_stats;
use crate::replay::{Step, StepKind, StepPayload, StepSource};
use serde::Serialize;

/// Fixed-width baseline for compression statistics (8-bit characters)
pub const DEFAULT_BASELINE_BITS: u32 = 8;

/// One merge of two frontier roots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeRecord {
    /// First popped; becomes the `0` branch
    pub left: NodeHandle,
    /// Second popped; becomes the `1` branch
    pub right: NodeHandle,
    pub merged: NodeHandle,
    pub frequency: u64,
}

/// State captured at each Huffman step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefixCodeSnapshot {
    /// The whole arena as of this step
    pub forest: PrefixTree,
    /// Current root candidates in the order the frontier would pop them
    pub roots: Vec<NodeHandle>,
    /// The merge performed at this step, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged: Option<MergeRecord>,
}

/// Final result of a Huffman run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefixCodeOutcome {
    pub frequencies: FrequencyMap,
    pub tree: PrefixTree,
    pub root: NodeHandle,
    pub codes: CodeTable,
    pub stats: CompressionStats,
    pub frontier: FrontierStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Seeding,
    Merging,
    Done,
}

/// Huffman's algorithm as a step source.
///
/// Leaves are inserted in input order, so equal frequencies pop in input
/// order and merged nodes pop after older entries of the same frequency. Each
/// merge takes the two lowest entries; the first popped becomes the left
/// child.
#[derive(Debug)]
pub struct PrefixCodeEngine {
    frequencies: FrequencyMap,
    tree: PrefixTree,
    frontier: PriorityFrontier<u64, NodeHandle>,
    root: Option<NodeHandle>,
    baseline_bits: u32,
    stage: Stage,
    emitted: usize,
}

impl PrefixCodeEngine {
    #[tracing::instrument(skip(frequencies), fields(symbols = frequencies.len()))]
    pub fn new(frequencies: FrequencyMap) -> Self {
        let mut tree = PrefixTree::new();
        let mut frontier = PriorityFrontier::new();
        for entry in frequencies.entries() {
            let leaf = tree.leaf(entry.symbol.clone(), entry.frequency);
            frontier.insert(entry.frequency, leaf, None);
        }

        PrefixCodeEngine {
            frequencies,
            tree,
            frontier,
            root: None,
            baseline_bits: DEFAULT_BASELINE_BITS,
            stage: Stage::Seeding,
            emitted: 0,
        }
    }

    /// Use a different fixed-width baseline for the statistics
    pub fn with_baseline_bits(mut self, bits: u32) -> Self {
        self.baseline_bits = bits;
        self
    }

    pub fn frequencies(&self) -> &FrequencyMap {
        &self.frequencies
    }

    pub fn tree(&self) -> &PrefixTree {
        &self.tree
    }

    /// Root of the finished tree
    pub fn root(&self) -> Option<NodeHandle> {
        self.root
    }

    pub fn code_table(&self) -> Option<CodeTable> {
        self.root.map(|root| CodeTable::derive(&self.tree, root))
    }

    /// Final result, available once the engine has finished
    pub fn outcome(&self) -> Option<PrefixCodeOutcome> {
        let root = self.root?;
        let codes = CodeTable::derive(&self.tree, root);
        let stats = CompressionStats::compute(&codes, &self.frequencies, self.baseline_bits);
        Some(PrefixCodeOutcome {
            frequencies: self.frequencies.clone(),
            tree: self.tree.clone(),
            root,
            codes,
            stats,
            frontier: self.frontier.stats(),
        })
    }

    fn pending_roots(&self) -> Vec<NodeHandle> {
        self.frontier
            .entries_in_order()
            .into_iter()
            .map(|e| e.candidate)
            .chain(self.root)
            .collect()
    }

    fn emit(&mut self, kind: StepKind, merged: Option<MergeRecord>, message: String) -> Step {
        let step = Step {
            index: self.emitted,
            kind,
            payload: StepPayload::PrefixCode(PrefixCodeSnapshot {
                forest: self.tree.clone(),
                roots: self.pending_roots(),
                merged,
            }),
            message,
        };
        self.emitted += 1;
        step
    }

    fn seed(&mut self) -> Step {
        self.stage = Stage::Merging;
        let message = format!(
            "Initial frontier: {} leaves ({})",
            self.frequencies.len(),
            self.frequencies
        );
        self.emit(StepKind::Seeded, None, message)
    }

    fn merge(&mut self, left: NodeHandle, right: NodeHandle) -> Step {
        let merged = self.tree.join(left, right);
        let frequency = self.tree.get(merged).map_or(0, |n| n.frequency);
        self.frontier.insert(frequency, merged, None);

        tracing::debug!(
            left = %self.tree.label(left),
            right = %self.tree.label(right),
            frequency,
            "merge"
        );

        let message = format!(
            "Merged {} and {} into {}",
            self.tree.label(left),
            self.tree.label(right),
            frequency
        );
        let record = MergeRecord {
            left,
            right,
            merged,
            frequency,
        };
        self.emit(StepKind::Merged, Some(record), message)
    }

    fn finish(&mut self, root: NodeHandle) -> Step {
        self.root = Some(root);
        self.stage = Stage::Done;
        log_frontier_stats!(self.frontier.stats(), "huffman");

        let codes = CodeTable::derive(&self.tree, root);
        let stats = CompressionStats::compute(&codes, &self.frequencies, self.baseline_bits);
        let message = format!(
            "Tree complete: {} codes, {} bits instead of {} ({:.1}% saved)",
            codes.len(),
            stats.compressed_bits,
            stats.original_bits,
            stats.percent_saved()
        );
        self.emit(StepKind::Finished, None, message)
    }
}

impl StepSource for PrefixCodeEngine {
    fn next_step(&mut self) -> Option<Step> {
        match self.stage {
            Stage::Done => None,
            Stage::Seeding => Some(self.seed()),
            Stage::Merging => {
                let first = self.frontier.pop_min()?;
                match self.frontier.pop_min() {
                    Some(second) => Some(self.merge(first.candidate, second.candidate)),
                    None => Some(self.finish(first.candidate)),
                }
            }
        }
    }

    fn is_finished(&self) -> bool {
        self.stage == Stage::Done
    }

    fn engine_name(&self) -> &'static str {
        "huffman"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::run_to_end;

    fn sample() -> FrequencyMap {
        FrequencyMap::parse("a:2, b:4, c:8, d:16, e:16").unwrap()
    }

    #[test]
    fn test_sample_codes() {
        let mut engine = PrefixCodeEngine::new(sample());
        let steps = run_to_end(&mut engine);

        // seed + 4 merges + finish
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0].kind, StepKind::Seeded);
        assert_eq!(steps[5].kind, StepKind::Finished);

        let codes = engine.code_table().unwrap();
        assert_eq!(codes.get("e"), Some("0"));
        assert_eq!(codes.get("d"), Some("11"));
        assert_eq!(codes.get("c"), Some("101"));
        assert_eq!(codes.get("a"), Some("1000"));
        assert_eq!(codes.get("b"), Some("1001"));
    }

    #[test]
    fn test_merge_messages() {
        let mut engine = PrefixCodeEngine::new(sample());
        let messages: Vec<_> = run_to_end(&mut engine)
            .into_iter()
            .filter(|s| s.kind == StepKind::Merged)
            .map(|s| s.message)
            .collect();
        assert_eq!(
            messages,
            vec![
                "Merged a:2 and b:4 into 6",
                "Merged 6 and c:8 into 14",
                "Merged 14 and d:16 into 30",
                "Merged e:16 and 30 into 46",
            ]
        );
    }

    #[test]
    fn test_outcome_stats() {
        let mut engine = PrefixCodeEngine::new(sample());
        run_to_end(&mut engine);
        let outcome = engine.outcome().unwrap();

        assert_eq!(outcome.stats.original_bits, 368);
        assert_eq!(outcome.stats.compressed_bits, 96);
        assert!((outcome.stats.ratio - (1.0 - 96.0 / 368.0)).abs() < 1e-12);
        assert_eq!(outcome.tree.get(outcome.root).unwrap().frequency, 46);
        assert_eq!(outcome.frontier.inserted, 9);
        assert_eq!(outcome.frontier.stale_discarded, 0);
    }

    #[test]
    fn test_snapshot_roots_shrink_by_one_per_merge() {
        let mut engine = PrefixCodeEngine::new(sample());
        let counts: Vec<usize> = run_to_end(&mut engine)
            .iter()
            .map(|s| match &s.payload {
                StepPayload::PrefixCode(snap) => snap.roots.len(),
                _ => 0,
            })
            .collect();
        assert_eq!(counts, vec![5, 4, 3, 2, 1, 1]);
    }

    #[test]
    fn test_single_symbol() {
        let freqs = FrequencyMap::parse("z:7").unwrap();
        let mut engine = PrefixCodeEngine::new(freqs);
        let steps = run_to_end(&mut engine);

        assert_eq!(steps.len(), 2);
        let codes = engine.code_table().unwrap();
        assert_eq!(codes.get("z"), Some("0"));
        assert_eq!(engine.outcome().unwrap().stats.compressed_bits, 7);
    }

    #[test]
    fn test_largest_total_merges_exactly() {
        let half = crate::huffman::MAX_TOTAL_FREQUENCY / 2;
        let freqs = FrequencyMap::new([("a", half), ("b", half)]).unwrap();
        let mut engine = PrefixCodeEngine::new(freqs);
        run_to_end(&mut engine);

        let outcome = engine.outcome().unwrap();
        assert_eq!(
            outcome.tree.get(outcome.root).unwrap().frequency,
            crate::huffman::MAX_TOTAL_FREQUENCY
        );
        assert_eq!(outcome.stats.compressed_bits, crate::huffman::MAX_TOTAL_FREQUENCY);
    }

    #[test]
    fn test_baseline_bits_override() {
        let mut engine = PrefixCodeEngine::new(sample()).with_baseline_bits(16);
        run_to_end(&mut engine);
        assert_eq!(engine.outcome().unwrap().stats.original_bits, 736);
    }

    #[test]
    fn test_no_outcome_before_finish() {
        let mut engine = PrefixCodeEngine::new(sample());
        engine.next_step();
        assert!(engine.outcome().is_none());
        assert!(!engine.is_finished());
    }
}
