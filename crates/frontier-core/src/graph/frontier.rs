//! Min-priority frontier shared by the greedy engines
//!
//! Entries are ordered by key, then by insertion sequence number so that
//! equal keys pop first-in-first-out. Superseded entries are never removed;
//! callers discard them when popped (lazy deletion) and report it through
//! [`PriorityFrontier::record_stale`].

use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// One frontier entry: `(key, candidate, provenance)` plus its sequence number
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontierEntry<K, C> {
    pub key: K,
    pub candidate: C,
    pub provenance: Option<C>,
    pub sequence: u64,
}

impl<K: PartialOrd, C> FrontierEntry<K, C> {
    fn priority_cmp(&self, other: &Self) -> Ordering {
        self.key
            .partial_cmp(&other.key)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Wrapper giving entries a total order for BinaryHeap
#[derive(Debug, Clone)]
struct HeapSlot<K, C>(FrontierEntry<K, C>);

impl<K: PartialOrd, C> PartialEq for HeapSlot<K, C> {
    fn eq(&self, other: &Self) -> bool {
        self.0.sequence == other.0.sequence
    }
}

impl<K: PartialOrd, C> Eq for HeapSlot<K, C> {}

impl<K: PartialOrd, C> PartialOrd for HeapSlot<K, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd, C> Ord for HeapSlot<K, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.priority_cmp(&other.0)
    }
}

/// Counters describing how the frontier was used during one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrontierStats {
    pub inserted: u64,
    pub popped: u64,
    pub stale_discarded: u64,
}

/// Min-priority queue over `(key, candidate, provenance)` triples.
///
/// Keys only need `PartialOrd`; incomparable keys (which the engines never
/// produce) are treated as equal and fall back to insertion order.
#[derive(Debug, Clone)]
pub struct PriorityFrontier<K, C> {
    heap: BinaryHeap<Reverse<HeapSlot<K, C>>>,
    next_sequence: u64,
    stats: FrontierStats,
}

impl<K: PartialOrd, C> Default for PriorityFrontier<K, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialOrd, C> PriorityFrontier<K, C> {
    pub fn new() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            stats: FrontierStats::default(),
        }
    }

    /// Insert an entry and return its sequence number
    pub fn insert(&mut self, key: K, candidate: C, provenance: Option<C>) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.stats.inserted += 1;
        self.heap.push(Reverse(HeapSlot(FrontierEntry {
            key,
            candidate,
            provenance,
            sequence,
        })));
        sequence
    }

    /// Remove and return the lowest-key entry (earliest inserted on ties).
    ///
    /// The entry may be stale; it is up to the caller to check.
    pub fn pop_min(&mut self) -> Option<FrontierEntry<K, C>> {
        let Reverse(HeapSlot(entry)) = self.heap.pop()?;
        self.stats.popped += 1;
        Some(entry)
    }

    pub fn peek_min(&self) -> Option<&FrontierEntry<K, C>> {
        self.heap.peek().map(|Reverse(HeapSlot(entry))| entry)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Note that a popped entry was discarded as superseded
    pub fn record_stale(&mut self) {
        self.stats.stale_discarded += 1;
    }

    pub fn stats(&self) -> FrontierStats {
        self.stats
    }

    /// All pending entries in pop order, stale ones included
    pub fn entries_in_order(&self) -> Vec<&FrontierEntry<K, C>> {
        let mut entries: Vec<_> = self.heap.iter().map(|Reverse(HeapSlot(e))| e).collect();
        entries.sort_by(|a, b| a.priority_cmp(b));
        entries
    }
}
