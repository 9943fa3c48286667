use crate::{Classifier, DataPoint, Float, Label, SelectionSet};
use ndarray::array;
use rand::Rng;

/// Lower bound (inclusive) of the coordinate sampling range.
pub const SAMPLE_MIN: f64 = -5.0;
/// Upper bound (exclusive) of the coordinate sampling range.
pub const SAMPLE_MAX: f64 = 5.0;

/// The ordered sequence of labeled points backing the scatter plot.
///
/// Insertion order is significant: a point's position in the sequence is its
/// display index ("Point N") and the index space the [`SelectionSet`] refers
/// to. Positions shift after removal, so [`PointStore::forget`] clears the
/// selection rather than remapping it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointStore<F: Float> {
    points: Vec<DataPoint<Label, F>>,
}

impl<F: Float> PointStore<F> {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Draws x and y independently from the uniform range [-5, 5), labels
    /// the point with `rule`, and appends it. Always succeeds.
    pub fn add_random<R: Rng>(&mut self, rng: &mut R, rule: &impl Classifier<F>) {
        let lo = F::cast(SAMPLE_MIN).unwrap();
        let hi = F::cast(SAMPLE_MAX).unwrap();
        let features = array![rng.random_range(lo..hi), rng.random_range(lo..hi)];
        let label = rule.classify(features.view());
        self.points.push(DataPoint::new(features, label));
    }

    /// Appends an already-constructed point. Used by tests and any embedding
    /// context that wants a non-random initial dataset.
    pub fn push(&mut self, point: DataPoint<Label, F>) {
        self.points.push(point);
    }

    /// Drops every point whose position is in `selection`, replacing the
    /// sequence in one step, then unconditionally clears the selection.
    /// Returns the number of points removed.
    pub fn forget(&mut self, selection: &mut SelectionSet) -> usize {
        let before = self.points.len();
        let retained: Vec<_> = self
            .points
            .iter()
            .enumerate()
            .filter(|(i, _)| !selection.contains(*i))
            .map(|(_, p)| p.clone())
            .collect();
        self.points = retained;
        selection.clear();
        before - self.points.len()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DataPoint<Label, F>> {
        self.points.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataPoint<Label, F>> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinearBoundary;
    use ndarray::array;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn three_point_store() -> PointStore<f64> {
        let mut store = PointStore::new();
        store.push(DataPoint::new(array![1.0, 1.0], Label::Positive));
        store.push(DataPoint::new(array![-3.0, -3.0], Label::Negative));
        store.push(DataPoint::new(array![2.0, -1.0], Label::Positive));
        store
    }

    #[test]
    fn test_add_random_samples_in_range() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut store: PointStore<f64> = PointStore::new();
        for _ in 0..100 {
            store.add_random(&mut rng, &LinearBoundary);
        }
        assert_eq!(store.len(), 100);
        for point in store.iter() {
            for &coord in point.features.iter() {
                assert!((SAMPLE_MIN..SAMPLE_MAX).contains(&coord));
            }
        }
    }

    #[test]
    fn test_add_random_label_matches_rule() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let mut store: PointStore<f64> = PointStore::new();
        for _ in 0..50 {
            store.add_random(&mut rng, &LinearBoundary);
        }
        for point in store.iter() {
            let expected = if point.features[0] + point.features[1] > 0.0 {
                Label::Positive
            } else {
                Label::Negative
            };
            assert_eq!(point.label, expected);
        }
    }

    #[test]
    fn test_forget_removes_selected_positions() {
        let mut store = three_point_store();
        let mut selection = SelectionSet::new();
        selection.toggle(1);
        let removed = store.forget(&mut selection);
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().features, array![1.0, 1.0]);
        assert_eq!(store.get(1).unwrap().features, array![2.0, -1.0]);
        assert_eq!(store.get(0).unwrap().label, Label::Positive);
        assert_eq!(store.get(1).unwrap().label, Label::Positive);
    }

    #[test]
    fn test_forget_clears_selection_unconditionally() {
        let mut store = three_point_store();
        let mut selection = SelectionSet::new();
        selection.toggle(0);
        selection.toggle(2);
        store.forget(&mut selection);
        assert!(selection.is_empty());

        // Even a no-op forget clears whatever was selected.
        let mut stale = SelectionSet::new();
        stale.toggle(99);
        let removed = store.forget(&mut stale);
        assert_eq!(removed, 0);
        assert!(stale.is_empty());
    }

    #[test]
    fn test_forget_all_empties_store() {
        let mut store = three_point_store();
        let mut selection = SelectionSet::new();
        for i in 0..store.len() {
            selection.toggle(i);
        }
        let removed = store.forget(&mut selection);
        assert_eq!(removed, 3);
        assert!(store.is_empty());
    }
}
