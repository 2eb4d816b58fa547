//! Aggregated outcome of a run.

/// A page that could not be downloaded, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    /// `None` in single-image mode.
    pub index: Option<u32>,
    pub error: String,
}

/// Totals over every worker of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub written: usize,
    pub bytes: u64,
    pub skipped: usize,
    pub failed: Vec<PageFailure>,
    /// Pages never attempted because a fail-fast abort stopped their worker.
    pub not_attempted: usize,
}

impl RunSummary {
    /// True when every page was written or skipped.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.not_attempted == 0
    }

    /// Pages accounted for (written, skipped, failed or not attempted).
    pub fn total(&self) -> usize {
        self.written + self.skipped + self.failed.len() + self.not_attempted
    }

    /// Folds another worker's summary into this one.
    pub fn merge(&mut self, other: RunSummary) {
        self.written += other.written;
        self.bytes += other.bytes;
        self.skipped += other.skipped;
        self.failed.extend(other.failed);
        self.not_attempted += other.not_attempted;
    }
}
