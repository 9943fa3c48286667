use std::collections::BTreeSet;

/// The set of point indices currently checked in the UI.
///
/// Indices are positions into the current [`crate::PointStore`] sequence, not
/// stable identifiers: any removal from the store invalidates them, which is
/// why [`crate::PointStore::forget`] clears the whole set rather than trying
/// to reconcile it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: BTreeSet<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `index`: inserts it if absent, removes it if
    /// present. Returns `true` if the index is selected afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.indices.remove(&index) {
            false
        } else {
            self.indices.insert(index);
            true
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterates the selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_of(indices: &[usize]) -> SelectionSet {
        let mut s = SelectionSet::new();
        for &i in indices {
            s.toggle(i);
        }
        s
    }

    #[test]
    fn test_toggle_inserts_then_removes() {
        let mut s = SelectionSet::new();
        assert!(s.toggle(3));
        assert!(s.contains(3));
        assert!(!s.toggle(3));
        assert!(!s.contains(3));
        assert!(s.is_empty());
    }

    #[test]
    fn test_toggle_involution() {
        let before = selection_of(&[0, 2, 5]);
        let mut s = before.clone();
        s.toggle(2);
        s.toggle(2);
        assert_eq!(s, before);
    }

    #[test]
    fn test_toggle_first_member() {
        let mut s = selection_of(&[0, 1, 2]);
        s.toggle(0);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_toggle_last_member() {
        let mut s = selection_of(&[0, 1, 2]);
        s.toggle(2);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_toggle_middle_member() {
        let mut s = selection_of(&[0, 1, 2]);
        s.toggle(1);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_toggle_sole_member() {
        let mut s = selection_of(&[7]);
        s.toggle(7);
        assert!(s.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut s = selection_of(&[1, 4, 9]);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }
}
