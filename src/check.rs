//! Sortedness verification

use crate::compare::Comparator;
use tracing::debug;

/// Verifies that a document is already ordered under a `Comparator`.
///
/// Must be given the same comparator that would be used to sort the
/// document; the check and the sort then agree by construction.
#[derive(Debug, Clone, Copy)]
pub struct SortednessChecker<'c> {
    comparator: &'c Comparator,
    descending: bool,
}

impl<'c> SortednessChecker<'c> {
    pub fn new(comparator: &'c Comparator) -> Self {
        Self {
            comparator,
            descending: false,
        }
    }

    /// Expect the reverse of sorted order, as produced with `reverse` set
    pub fn descending(mut self, descending: bool) -> Self {
        self.descending = descending;
        self
    }

    pub fn is_sorted<S: AsRef<str>>(&self, document: &[S]) -> bool {
        self.first_disorder(document).is_none()
    }

    /// 0-based index of the first line that is out of order with the line
    /// before it, or `None` if every adjacent pair is in order.
    pub fn first_disorder<S: AsRef<str>>(&self, document: &[S]) -> Option<usize> {
        let found = document
            .windows(2)
            .position(|pair| {
                let (previous, current) = (pair[0].as_ref(), pair[1].as_ref());
                if self.descending {
                    self.comparator.less(previous, current)
                } else {
                    self.comparator.less(current, previous)
                }
            })
            .map(|idx| idx + 1);

        if let Some(idx) = found {
            debug!(index = idx, "disorder found");
        }
        found
    }
}

/// True iff `previous <= current` holds for every adjacent pair
pub fn is_sorted<S: AsRef<str>>(document: &[S], comparator: &Comparator) -> bool {
    SortednessChecker::new(comparator).is_sorted(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{presets, SortConfig};

    #[test]
    fn test_whole_line_check() {
        let cmp = Comparator::new(&SortConfig::default());
        assert!(!is_sorted(&["a", "c", "b"], &cmp));
        assert!(is_sorted(&["a", "b", "c"], &cmp));
    }

    #[test]
    fn test_trivial_documents_are_sorted() {
        let cmp = Comparator::new(&SortConfig::default());
        let empty: [&str; 0] = [];
        assert!(is_sorted(&empty, &cmp));
        assert!(is_sorted(&["only"], &cmp));
        assert!(is_sorted(&["same", "same"], &cmp));
    }

    #[test]
    fn test_first_disorder_position() {
        let cmp = Comparator::new(&presets::numeric(1));
        let checker = SortednessChecker::new(&cmp);
        assert_eq!(checker.first_disorder(&["1", "2", "10", "3"]), Some(3));
        assert_eq!(checker.first_disorder(&["1", "2", "10"]), None);
    }

    #[test]
    fn test_descending_check() {
        let cmp = Comparator::new(&SortConfig::default());
        let checker = SortednessChecker::new(&cmp).descending(true);
        assert!(checker.is_sorted(&["c", "b", "b", "a"]));
        assert_eq!(checker.first_disorder(&["c", "a", "b"]), Some(2));
    }

    #[test]
    fn test_equal_keys_are_in_order() {
        let cmp = Comparator::new(&presets::numeric(1));
        assert!(is_sorted(&["1 z", "1 a", "2 b"], &cmp));
    }
}
