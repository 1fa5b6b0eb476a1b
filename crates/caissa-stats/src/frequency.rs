//! Frequency analysis over categorical labels.
//!
//! The repertoire formulas need exactly two aggregates of a player's
//! opening labels: how many distinct labels appear, and what share of all
//! observations the single most frequent label accounts for. Counts are
//! accumulated in a `BTreeMap` so iteration order, and therefore every
//! derived value, is independent of input order.

use std::collections::BTreeMap;

/// Occurrence counts for a set of categorical labels.
///
/// # Examples
///
/// ```
/// use caissa_stats::frequency::FrequencyTable;
///
/// let table = FrequencyTable::from_labels(["a", "b", "a", "c", "a"]);
/// assert_eq!(table.total(), 5);
/// assert_eq!(table.unique_count(), 3);
/// assert_eq!(table.most_common_count(), 3);
/// assert_eq!(table.most_common_share(), 0.6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: BTreeMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Builds a table by counting the supplied labels.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for label in labels {
            table.add(label.as_ref());
        }
        table
    }

    /// Records one observation of `label`.
    pub fn add(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Total number of observations.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct labels observed.
    #[must_use]
    pub fn unique_count(&self) -> usize {
        self.counts.len()
    }

    /// Occurrence count of the most frequent label. Zero for an empty table.
    #[must_use]
    pub fn most_common_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Share of all observations held by the most frequent label,
    /// in `[0, 1]`. Zero for an empty table.
    ///
    /// Ties are harmless: only the count of the winning label is used,
    /// never its identity.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn most_common_share(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.most_common_count() as f32 / self.total as f32
    }

    /// Iterates over `(label, count)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }
}
