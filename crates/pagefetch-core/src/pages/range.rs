//! Page selection and the resolved index range.

use crate::plan::PlanError;

/// Page bounds as the user gave them. `start` and `end` are 1-based page numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageSelection {
    pub count: Option<u32>,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

/// Resolved page indices `[first, last]`, both inclusive.
///
/// The upper bound is inclusive on purpose: `count = 10` yields indices
/// `0..=10` (eleven pages) and `start = 5, end = 8` yields `4..=8`. Sequences
/// hosted for this tool are numbered that way, so existing invocations keep
/// producing the same files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    first: u32,
    last: u32,
}

impl PageRange {
    /// Resolves a selection:
    /// - start and end: `start-1 ..= end`
    /// - start only: `start-1 ..= count`
    /// - no start: `0 ..= count`, or `0 ..= end` when there is no count
    pub fn resolve(selection: PageSelection) -> Result<Self, PlanError> {
        let last = match selection.start {
            Some(_) => selection.end.or(selection.count),
            None => selection.count.or(selection.end),
        }
        .ok_or(PlanError::MissingUpperBound)?;
        let first = match selection.start {
            Some(0) => return Err(PlanError::StartIsZero),
            Some(start) => start - 1,
            None => 0,
        };
        if first > last {
            return Err(PlanError::StartAfterEnd {
                start: first + 1,
                end: last,
            });
        }
        Ok(Self { first, last })
    }

    /// Builds a range directly from inclusive indices. Returns `None` if `first > last`.
    pub fn new(first: u32, last: u32) -> Option<Self> {
        (first <= last).then_some(Self { first, last })
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    /// Number of indices in the range (never 0).
    pub fn len(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    pub fn iter(&self) -> std::ops::RangeInclusive<u32> {
        self.first..=self.last
    }
}
