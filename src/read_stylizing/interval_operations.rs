use std::fmt;

/// Half-open span `[start, end)` of code point offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// # Panics
    ///
    /// Panics if `start >= end`; an empty or inverted range would break the merge.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start < end, "invalid range [{start}, {end})");
        Self { start, end }
    }

    /// Number of code points covered.
    pub fn width(&self) -> usize {
        self.end - self.start
    }

    pub fn contains(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Matched spans of one candidate, kept free of overlapping or touching members
/// as long as ranges are added one at a time with [`RangeSet::insert`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<Range>,
}

impl RangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `next` into the set, returning the new set.
    ///
    /// Every member that overlaps or touches `next` is absorbed into it and the
    /// (possibly widened) `next` goes last; the others keep their order.
    pub fn merge(self, next: Range) -> RangeSet {
        if self.ranges.is_empty() {
            return RangeSet { ranges: vec![next] };
        }

        let mut next = next;
        let mut ranges = Vec::with_capacity(self.ranges.len() + 1);
        for m in self.ranges {
            if m.contains(&next) {
                // m       |----------|
                // next       |----|
                next = m;
            } else if next.start <= m.start && m.start <= next.end && m.end >= next.end {
                // m           |-------|
                // next    |-----|
                next.end = m.end;
            } else if m.start <= next.start && next.start <= m.end && m.end <= next.end {
                // m       |------|
                // next        |------|
                next.start = m.start;
            } else if next.contains(&m) {
                // m           |---|
                // next    |-----------|
            } else {
                ranges.push(m);
            }
        }
        ranges.push(next);
        RangeSet { ranges }
    }

    pub fn insert(&mut self, next: Range) {
        *self = std::mem::take(self).merge(next);
    }

    /// Order members by start offset.
    pub fn sort(&mut self) {
        self.ranges.sort_by_key(|r| r.start);
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Range> {
        self.ranges.iter()
    }

    pub fn as_slice(&self) -> &[Range] {
        &self.ranges
    }

    /// Total number of code points covered.
    pub fn covered(&self) -> usize {
        self.ranges.iter().map(Range::width).sum()
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a Range;
    type IntoIter = std::slice::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

impl FromIterator<Range> for RangeSet {
    /// Inserts one range at a time, then sorts.
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        let mut set = iter.into_iter().fold(RangeSet::new(), RangeSet::merge);
        set.sort();
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ranges: &[(usize, usize)]) -> RangeSet {
        ranges.iter().map(|&(s, e)| Range::new(s, e)).collect()
    }

    fn pairs(set: &RangeSet) -> Vec<(usize, usize)> {
        set.iter().map(|r| (r.start, r.end)).collect()
    }

    fn assert_disjoint(set: &RangeSet) {
        let mut sorted = set.clone();
        sorted.sort();
        for w in sorted.as_slice().windows(2) {
            assert!(w[0].end < w[1].start, "{} and {} overlap or touch", w[0], w[1]);
        }
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    fn test_empty_range_panics() {
        Range::new(3, 3);
    }

    #[test]
    fn test_merge_into_empty() {
        let merged = RangeSet::new().merge(Range::new(2, 4));
        assert_eq!(pairs(&merged), vec![(2, 4)]);
    }

    #[test]
    fn test_merge_coalescing() {
        assert_eq!(pairs(&set(&[(0, 5), (3, 8)])), vec![(0, 8)]);
        assert_eq!(pairs(&set(&[(3, 8), (0, 5)])), vec![(0, 8)]);
    }

    #[test]
    fn test_merge_contained_is_noop() {
        let before = set(&[(0, 10), (20, 25)]);
        let mut after = before.clone().merge(Range::new(2, 6));
        after.sort();
        assert_eq!(after, before);
    }

    #[test]
    fn test_merge_absorbs_contained_members() {
        assert_eq!(pairs(&set(&[(2, 3), (5, 6), (1, 8)])), vec![(1, 8)]);
    }

    #[test]
    fn test_touching_ranges_coalesce() {
        assert_eq!(pairs(&set(&[(0, 3), (3, 5)])), vec![(0, 5)]);
        assert_eq!(pairs(&set(&[(3, 5), (0, 3)])), vec![(0, 5)]);
    }

    #[test]
    fn test_unrelated_ranges_pass_through() {
        let merged = RangeSet::new()
            .merge(Range::new(6, 8))
            .merge(Range::new(0, 2))
            .merge(Range::new(3, 4));
        // merge keeps insertion order, sort is separate
        assert_eq!(pairs(&merged), vec![(6, 8), (0, 2), (3, 4)]);
        assert_eq!(pairs(&set(&[(6, 8), (0, 2), (3, 4)])), vec![(0, 2), (3, 4), (6, 8)]);
    }

    #[test]
    fn test_bridge_between_two_members() {
        assert_eq!(pairs(&set(&[(0, 2), (5, 7), (1, 6)])), vec![(0, 7)]);
        assert_eq!(pairs(&set(&[(5, 7), (0, 2), (2, 5)])), vec![(0, 7)]);
    }

    #[test]
    fn test_no_overlap_after_any_insertion_order() {
        let inputs = [
            (0, 3),
            (10, 12),
            (2, 4),
            (7, 9),
            (12, 15),
            (20, 21),
            (4, 7),
            (18, 20),
            (30, 40),
            (31, 32),
        ];
        for rotation in 0..inputs.len() {
            let mut rotated = inputs.to_vec();
            rotated.rotate_left(rotation);
            let mut merged = RangeSet::new();
            for &(s, e) in &rotated {
                merged.insert(Range::new(s, e));
                assert_disjoint(&merged);
            }
            merged.sort();
            assert_eq!(pairs(&merged), vec![(0, 9), (10, 15), (18, 21), (30, 40)]);
            assert_eq!(merged.covered(), 9 + 5 + 3 + 10);
        }
    }
}
