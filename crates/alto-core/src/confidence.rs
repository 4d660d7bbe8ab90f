//! Word-confidence aggregation.
//!
//! [`ConfidenceTally`] accumulates WC attribute values over one document and
//! produces the mean score as a percentage; [`FolderTally`] averages the
//! per-file results of a batch. Folder aggregation deliberately weights
//! every file equally, regardless of word count, so batch reporting needs
//! only O(1) extra state.

/// Rounds to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Running WC sum and count for one document.
///
/// Strings with a missing or unparseable WC attribute are excluded from
/// both the sum and the count — they do not drag the mean toward zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfidenceTally {
    sum: f64,
    count: usize,
}

impl ConfidenceTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one word-confidence value (expected in `[0, 1]`).
    pub fn add(&mut self, wc: f64) {
        self.sum += wc;
        self.count += 1;
    }

    /// Number of words that carried a usable WC value.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean confidence as a percentage in `[0, 100]`, rounded to two
    /// decimals. A document with no countable words scores `0.0` — a
    /// defined edge case, not an error.
    pub fn mean_percent(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        round2(100.0 * self.sum / self.count as f64)
    }
}

/// Equal-weight mean of per-file confidence results across a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FolderTally {
    sum: f64,
    files: usize,
}

impl FolderTally {
    /// Create an empty folder tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one file's mean confidence (already a percentage).
    pub fn add_file(&mut self, mean_percent: f64) {
        self.sum += mean_percent;
        self.files += 1;
    }

    /// Number of files recorded.
    pub fn files(&self) -> usize {
        self.files
    }

    /// Arithmetic mean of the per-file results, rounded to two decimals.
    pub fn mean_percent(&self) -> f64 {
        if self.files == 0 {
            return 0.0;
        }
        round2(self.sum / self.files as f64)
    }
}
