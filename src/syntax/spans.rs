//! Claimed ranges within one block
//!
//! While a block is highlighted every styled range is recorded here, so a
//! later pattern can tell whether it would paint over an earlier claim.

use std::ops::Range;

/// Sorted, merged set of half-open byte ranges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanSet {
    ranges: Vec<Range<usize>>,
}

impl SpanSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a range, merging it with any range it touches
    pub fn insert(&mut self, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }
        // First stored range that ends at or after the new start
        let first = self.ranges.partition_point(|r| r.end < range.start);
        let mut merged = range;
        let mut last = first;
        while last < self.ranges.len() && self.ranges[last].start <= merged.end {
            merged.start = merged.start.min(self.ranges[last].start);
            merged.end = merged.end.max(self.ranges[last].end);
            last += 1;
        }
        self.ranges.splice(first..last, std::iter::once(merged));
    }

    /// Whether any claimed position falls inside `range`
    pub fn overlaps(&self, range: &Range<usize>) -> bool {
        if range.start >= range.end {
            return false;
        }
        let idx = self.ranges.partition_point(|r| r.end <= range.start);
        self.ranges
            .get(idx)
            .is_some_and(|r| r.start < range.end)
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The merged ranges, in order
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_open_neighbours_do_not_overlap() {
        let mut set = SpanSet::new();
        set.insert(2..5);
        assert!(!set.overlaps(&(0..2)));
        assert!(!set.overlaps(&(5..9)));
        assert!(set.overlaps(&(4..6)));
        assert!(set.overlaps(&(0..3)));
        assert!(set.overlaps(&(3..4)));
    }

    #[test]
    fn test_insert_merges() {
        let mut set = SpanSet::new();
        set.insert(10..12);
        set.insert(0..2);
        set.insert(5..6);
        assert_eq!(set.ranges(), &[0..2, 5..6, 10..12]);

        set.insert(2..10);
        assert_eq!(set.ranges(), &[0..12]);
    }

    #[test]
    fn test_overlap_between_ranges() {
        let mut set = SpanSet::new();
        set.insert(0..2);
        set.insert(8..10);
        assert!(!set.overlaps(&(3..7)));
        assert!(set.overlaps(&(3..9)));
        assert!(set.overlaps(&(1..9)));
    }

    #[test]
    fn test_empty_ranges_ignored() {
        let mut set = SpanSet::new();
        set.insert(3..3);
        assert!(set.is_empty());

        set.insert(0..10);
        assert!(!set.overlaps(&(4..4)));
        assert!(set.overlaps(&(9..10)));
        assert!(!set.overlaps(&(10..11)));
    }
}
