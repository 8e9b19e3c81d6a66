use crate::error::{FrontierError, Result};
use crate::huffman::frequency::FrequencyMap;
use crate::huffman::tree::{NodeHandle, PrefixTree};
use serde::Serialize;
use std::collections::BTreeMap;

/// Symbol → bit-string code, derived from one prefix tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CodeTable {
    codes: BTreeMap<String, String>,
}

impl CodeTable {
    /// Walk `root` depth-first, appending `0` on left descent and `1` on right.
    ///
    /// A root that is itself a leaf gets the code `0`.
    pub fn derive(tree: &PrefixTree, root: NodeHandle) -> Self {
        let mut codes = BTreeMap::new();
        let mut stack = vec![(root, String::new())];

        while let Some((handle, prefix)) = stack.pop() {
            let Some(node) = tree.get(handle) else {
                continue;
            };
            if let Some(symbol) = node.symbol() {
                let code = if prefix.is_empty() {
                    "0".to_string()
                } else {
                    prefix
                };
                codes.insert(symbol.to_string(), code);
                continue;
            }
            if let (Some(left), Some(right)) = tree.children(handle) {
                stack.push((right, format!("{}1", prefix)));
                stack.push((left, format!("{}0", prefix)));
            }
        }

        CodeTable { codes }
    }

    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    /// `(symbol, code)` pairs ordered by symbol
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.codes.iter().map(|(s, c)| (s.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// True if no code is a prefix of another
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&String> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(a.as_str()))
        })
    }

    /// Σ 2^(−len(code)); at most 1, exactly 1 for a full tree
    pub fn kraft_sum(&self) -> f64 {
        self.codes
            .values()
            .map(|c| 0.5f64.powi(c.len() as i32))
            .sum()
    }

    /// Concatenate the codes of `symbols`
    pub fn encode<'a, I>(&self, symbols: I) -> Result<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut bits = String::new();
        for symbol in symbols {
            let code = self
                .get(symbol)
                .ok_or_else(|| FrontierError::invalid_value("symbol", format!("{} has no code", symbol)))?;
            bits.push_str(code);
        }
        Ok(bits)
    }
}

/// Fixed-width baseline versus derived-code size of a frequency map
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompressionStats {
    /// Σ frequency × baseline bits
    pub original_bits: u64,
    /// Σ frequency × code length
    pub compressed_bits: u64,
    /// 1 − compressed / original
    pub ratio: f64,
}

impl CompressionStats {
    /// Bit counts saturate at `u64::MAX` instead of wrapping.
    pub fn compute(codes: &CodeTable, frequencies: &FrequencyMap, baseline_bits: u32) -> Self {
        let mut original_bits = 0u64;
        let mut compressed_bits = 0u64;
        for entry in frequencies.entries() {
            let len = codes.get(&entry.symbol).map_or(0, str::len) as u64;
            original_bits =
                original_bits.saturating_add(entry.frequency.saturating_mul(u64::from(baseline_bits)));
            compressed_bits = compressed_bits.saturating_add(entry.frequency.saturating_mul(len));
        }
        let ratio = if original_bits == 0 {
            0.0
        } else {
            1.0 - compressed_bits as f64 / original_bits as f64
        };
        CompressionStats {
            original_bits,
            compressed_bits,
            ratio,
        }
    }

    pub fn percent_saved(&self) -> f64 {
        self.ratio * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_leaf_gets_zero() {
        let mut tree = PrefixTree::new();
        let only = tree.leaf("x", 5);
        let table = CodeTable::derive(&tree, only);
        assert_eq!(table.get("x"), Some("0"));
        assert_eq!(table.kraft_sum(), 0.5);
    }

    #[test]
    fn test_derived_codes_follow_left_right_rule() {
        let mut tree = PrefixTree::new();
        let a = tree.leaf("a", 1);
        let b = tree.leaf("b", 1);
        let c = tree.leaf("c", 2);
        let ab = tree.merge(a, b).unwrap();
        let root = tree.merge(c, ab).unwrap();

        let table = CodeTable::derive(&tree, root);
        assert_eq!(table.get("c"), Some("0"));
        assert_eq!(table.get("a"), Some("10"));
        assert_eq!(table.get("b"), Some("11"));
        assert!(table.is_prefix_free());
        assert_eq!(table.kraft_sum(), 1.0);
    }

    #[test]
    fn test_encode_unknown_symbol_fails() {
        let mut tree = PrefixTree::new();
        let only = tree.leaf("x", 1);
        let table = CodeTable::derive(&tree, only);
        assert_eq!(table.encode(["x", "x"]).unwrap(), "00");
        assert!(table.encode(["y"]).is_err());
    }

    #[test]
    fn test_compression_stats() {
        let freqs = FrequencyMap::parse("a:3, b:1").unwrap();
        let mut tree = PrefixTree::new();
        let a = tree.leaf("a", 3);
        let b = tree.leaf("b", 1);
        let root = tree.merge(b, a).unwrap();
        let table = CodeTable::derive(&tree, root);

        let stats = CompressionStats::compute(&table, &freqs, 8);
        assert_eq!(stats.original_bits, 32);
        assert_eq!(stats.compressed_bits, 4);
        assert_eq!(stats.ratio, 0.875);
        assert_eq!(stats.percent_saved(), 87.5);
    }

    #[test]
    fn test_compression_stats_saturate() {
        let freqs = FrequencyMap::parse("a:3, b:1").unwrap();
        let mut tree = PrefixTree::new();
        let a = tree.leaf("a", 3);
        let b = tree.leaf("b", 1);
        let root = tree.merge(b, a).unwrap();
        let table = CodeTable::derive(&tree, root);

        let stats = CompressionStats::compute(&table, &freqs, u32::MAX);
        assert_eq!(stats.original_bits, 4 * u64::from(u32::MAX));
        assert_eq!(stats.compressed_bits, 4);
    }
}
