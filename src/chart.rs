use crate::{Float, Label, PointStore};

/// The renderable view of a [`PointStore`]: one coordinate series per label,
/// partitioned by each point's **stored** label, plus a parallel display
/// caption per point.
///
/// A projection is derived state. It is rebuilt in full from the store after
/// every mutation and never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct ChartProjection<F: Float> {
    positive: Vec<(F, F)>,
    negative: Vec<(F, F)>,
    labels: Vec<String>,
}

impl<F: Float> ChartProjection<F> {
    /// Builds the projection for the current store contents.
    pub fn project(store: &PointStore<F>) -> Self {
        let mut positive = Vec::new();
        let mut negative = Vec::new();
        let mut labels = Vec::with_capacity(store.len());

        for (index, point) in store.iter().enumerate() {
            labels.push(format!("Point {}", index));
            let coords = (point.features[0], point.features[1]);
            match point.label {
                Label::Positive => positive.push(coords),
                Label::Negative => negative.push(coords),
            }
        }

        Self { positive, negative, labels }
    }

    /// Coordinates of every Positive-labeled point, in store order.
    pub fn positive(&self) -> &[(F, F)] {
        &self.positive
    }

    /// Coordinates of every Negative-labeled point, in store order.
    pub fn negative(&self) -> &[(F, F)] {
        &self.negative
    }

    /// Display caption for each point, indexed by store position.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
