//! Chunk type and per-worker partitioning.

use super::PageRange;

/// Contiguous page indices `[first, last]` (inclusive) handled by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub first: u32,
    pub last: u32,
}

impl Chunk {
    /// Number of pages in this chunk.
    pub fn len(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        self.first..=self.last
    }
}

/// Splits `range` into consecutive chunks of `ceil(len / workers)` pages.
///
/// Chunks cover every index exactly once, in order; there are never more
/// chunks than `workers`, and only the last chunk may be shorter.
/// Returns an empty vec if `workers` is 0.
pub fn plan_chunks(range: PageRange, workers: usize) -> Vec<Chunk> {
    if workers == 0 {
        return Vec::new();
    }

    let len = range.len() as u64;
    let size = len.div_ceil(workers as u64);

    let mut out = Vec::with_capacity(workers.min(range.len()));
    let mut offset = 0u64;
    while offset < len {
        let first = range.first() as u64 + offset;
        let last = (first + size - 1).min(range.last() as u64);
        out.push(Chunk {
            first: first as u32,
            last: last as u32,
        });
        offset += size;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PageSelection;

    fn sizes(chunks: &[Chunk]) -> Vec<usize> {
        chunks.iter().map(Chunk::len).collect()
    }

    #[test]
    fn count_ten_four_workers() {
        let range = PageRange::resolve(PageSelection {
            count: Some(10),
            ..Default::default()
        })
        .unwrap();
        let chunks = plan_chunks(range, 4);
        assert_eq!(sizes(&chunks), vec![3, 3, 3, 2]);
        assert_eq!(chunks[0], Chunk { first: 0, last: 2 });
        assert_eq!(chunks[3], Chunk { first: 9, last: 10 });
    }

    #[test]
    fn start_end_range_is_split_without_overlap() {
        let range = PageRange::resolve(PageSelection {
            count: None,
            start: Some(5),
            end: Some(8),
        })
        .unwrap();
        let chunks = plan_chunks(range, 2);
        assert_eq!(
            chunks,
            vec![Chunk { first: 4, last: 6 }, Chunk { first: 7, last: 8 }]
        );
    }

    #[test]
    fn more_workers_than_pages() {
        let range = PageRange::new(0, 2).unwrap();
        let chunks = plan_chunks(range, 16);
        assert_eq!(sizes(&chunks), vec![1, 1, 1]);
    }

    #[test]
    fn one_worker_takes_everything() {
        let range = PageRange::new(3, 40).unwrap();
        assert_eq!(plan_chunks(range, 1), vec![Chunk { first: 3, last: 40 }]);
    }

    #[test]
    fn zero_workers_is_empty() {
        assert!(plan_chunks(PageRange::new(0, 5).unwrap(), 0).is_empty());
    }

    #[test]
    fn range_near_u32_max_does_not_overflow() {
        let range = PageRange::new(u32::MAX - 4, u32::MAX).unwrap();
        let chunks = plan_chunks(range, 2);
        assert_eq!(sizes(&chunks), vec![3, 2]);
        assert_eq!(chunks[1].last, u32::MAX);
    }

    #[test]
    fn partition_covers_every_index_once_in_order() {
        for first in 0..6u32 {
            for last in first..first + 40 {
                let range = PageRange::new(first, last).unwrap();
                for workers in 1..=12 {
                    let chunks = plan_chunks(range, workers);
                    assert!(chunks.len() <= workers, "{first}..={last} / {workers}");
                    let flat: Vec<u32> = chunks.iter().flat_map(|c| c.pages()).collect();
                    let expected: Vec<u32> = range.iter().collect();
                    assert_eq!(flat, expected, "{first}..={last} / {workers}");
                    for pair in chunks.windows(2) {
                        assert_eq!(pair[0].last + 1, pair[1].first);
                    }
                }
            }
        }
    }
}
