use crate::error::{FrontierError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Largest accepted sum of all frequencies.
///
/// Keeps merged frequencies and bit counts well inside `u64`.
pub const MAX_TOTAL_FREQUENCY: u64 = 1 << 40;

/// One `symbol:frequency` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolFrequency {
    pub symbol: String,
    pub frequency: u64,
}

/// Symbol frequencies in input order.
///
/// Always holds at least one symbol; symbols are unique and frequencies
/// positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyMap {
    entries: Vec<SymbolFrequency>,
}

impl FrequencyMap {
    /// Build from pairs, rejecting empty input, duplicates and zero counts
    pub fn new<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut entries: Vec<SymbolFrequency> = Vec::new();
        let mut total = 0u64;
        for (symbol, frequency) in pairs {
            let symbol = symbol.into();
            if symbol.is_empty() {
                return Err(FrontierError::malformed(&symbol, "empty symbol"));
            }
            if frequency == 0 {
                return Err(FrontierError::invalid_value(
                    "frequency",
                    format!("{}:0 (must be positive)", symbol),
                ));
            }
            if entries.iter().any(|e| e.symbol == symbol) {
                return Err(FrontierError::already_exists("symbol", symbol));
            }
            total = total
                .checked_add(frequency)
                .filter(|t| *t <= MAX_TOTAL_FREQUENCY)
                .ok_or_else(|| {
                    FrontierError::invalid_value(
                        "frequency",
                        format!("total exceeds {} at {}:{}", MAX_TOTAL_FREQUENCY, symbol, frequency),
                    )
                })?;
            entries.push(SymbolFrequency { symbol, frequency });
        }
        if entries.is_empty() {
            return Err(FrontierError::empty_input("frequency map"));
        }
        Ok(FrequencyMap { entries })
    }

    /// Parse `a:2, b:4, c:8`.
    ///
    /// Any malformed entry fails the whole input; nothing partial is returned.
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(FrontierError::empty_input("frequency map"));
        }

        let mut pairs = Vec::new();
        for raw in input.split(',') {
            let entry = raw.trim();
            if entry.is_empty() {
                return Err(FrontierError::malformed(raw, "empty entry"));
            }
            let (symbol, count) = entry
                .split_once(':')
                .ok_or_else(|| FrontierError::malformed(entry, "missing ':'"))?;
            let symbol = symbol.trim();
            if symbol.is_empty() {
                return Err(FrontierError::malformed(entry, "empty symbol"));
            }
            let frequency: u64 = count
                .trim()
                .parse()
                .map_err(|_| FrontierError::malformed(entry, "frequency is not a non-negative integer"))?;
            if frequency == 0 {
                return Err(FrontierError::malformed(entry, "frequency must be positive"));
            }
            pairs.push((symbol.to_string(), frequency));
        }

        Self::new(pairs)
    }

    /// Count characters of `text` in first-seen order
    pub fn from_sample(text: &str) -> Result<Self> {
        let mut counts: Vec<(String, u64)> = Vec::new();
        for ch in text.chars() {
            let symbol = ch.to_string();
            match counts.iter_mut().find(|(s, _)| *s == symbol) {
                Some((_, n)) => *n += 1,
                None => counts.push((symbol, 1)),
            }
        }
        if counts.is_empty() {
            return Err(FrontierError::empty_input("sample text"));
        }
        Self::new(counts)
    }

    pub fn entries(&self) -> &[SymbolFrequency] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn frequency(&self, symbol: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| e.frequency)
    }

    /// Sum of all frequencies
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.frequency).sum()
    }

    /// The frequency-weighted symbol stream: each symbol repeated by its count
    pub fn stream(&self) -> Vec<&str> {
        self.entries
            .iter()
            .flat_map(|e| std::iter::repeat_n(e.symbol.as_str(), e.frequency as usize))
            .collect()
    }
}

impl FromStr for FrequencyMap {
    type Err = FrontierError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FrequencyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", e.symbol, e.frequency)?;
        }
        Ok(())
    }
}
