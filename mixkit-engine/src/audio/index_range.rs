//! Half-open index ranges over sample storage

use std::fmt;

/// Half-open interval `[start, end)` of sample indices
///
/// Always `start <= end`. Ranges are plain values; bounding them by a
/// storage capacity is up to the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IndexRange {
    start: usize,
    end: usize,
}

impl IndexRange {
    /// The empty range `[0, 0)`
    pub const EMPTY: IndexRange = IndexRange { start: 0, end: 0 };

    /// Range between `start` (inclusive) and `end` (exclusive)
    ///
    /// # Panics
    /// If `start > end`.
    pub fn between(start: usize, end: usize) -> Self {
        assert!(start <= end, "invalid index range [{}, {})", start, end);
        Self { start, end }
    }

    /// Range of `length` indices beginning at `start`
    pub fn forward(start: usize, length: usize) -> Self {
        Self::between(start, start + length)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn length(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extend the end by `length`
    pub fn grow_back(&mut self, length: usize) {
        self.end += length;
    }

    /// Move the start forward by `length`
    ///
    /// # Panics
    /// If `length` exceeds the current length.
    pub fn shrink_front(&mut self, length: usize) {
        assert!(length <= self.length());
        self.start += length;
    }

    /// Move the end backward by `length`
    ///
    /// # Panics
    /// If `length` exceeds the current length.
    pub fn shrink_back(&mut self, length: usize) {
        assert!(length <= self.length());
        self.end -= length;
    }

    /// Overlap of both ranges, `None` if they are disjoint
    ///
    /// Adjacent ranges intersect in an empty range at the shared boundary.
    pub fn intersect(&self, other: &IndexRange) -> Option<IndexRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start <= end {
            Some(IndexRange { start, end })
        } else {
            None
        }
    }

    /// Whether `other` lies completely inside this range
    pub fn contains_range(&self, other: &IndexRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether `index` lies inside this range
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Convert to a slice index range
    pub fn as_range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_empty() {
        let range = IndexRange::between(3, 7);
        assert_eq!(range.length(), 4);
        assert!(!range.is_empty());
        assert!(IndexRange::between(5, 5).is_empty());
        assert!(IndexRange::default().is_empty());
        assert_eq!(IndexRange::forward(2, 3), IndexRange::between(2, 5));
    }

    #[test]
    #[should_panic]
    fn test_reversed_bounds_rejected() {
        let _ = IndexRange::between(4, 2);
    }

    #[test]
    fn test_grow_and_shrink() {
        let mut range = IndexRange::between(0, 0);
        range.grow_back(6);
        assert_eq!(range, IndexRange::between(0, 6));
        range.shrink_front(4);
        assert_eq!(range, IndexRange::between(4, 6));
        range.shrink_back(1);
        assert_eq!(range, IndexRange::between(4, 5));
    }

    #[test]
    #[should_panic]
    fn test_shrink_past_start_rejected() {
        let mut range = IndexRange::between(2, 4);
        range.shrink_back(3);
    }

    #[test]
    fn test_intersect() {
        let a = IndexRange::between(0, 10);
        let b = IndexRange::between(5, 15);
        assert_eq!(a.intersect(&b), Some(IndexRange::between(5, 10)));
        assert_eq!(
            a.intersect(&IndexRange::between(10, 12)),
            Some(IndexRange::between(10, 10))
        );
        assert_eq!(a.intersect(&IndexRange::between(11, 12)), None);
    }

    #[test]
    fn test_containment() {
        let outer = IndexRange::between(2, 8);
        assert!(outer.contains_range(&IndexRange::between(2, 8)));
        assert!(outer.contains_range(&IndexRange::between(3, 3)));
        assert!(!outer.contains_range(&IndexRange::between(1, 4)));
        assert!(outer.contains(2));
        assert!(!outer.contains(8));
    }

    #[test]
    fn test_display() {
        assert_eq!(IndexRange::between(1, 4).to_string(), "[1 -> 4)");
    }
}
