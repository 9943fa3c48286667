use crate::{Float, Label};
use ndarray::ArrayView1;

/// A decision rule mapping a feature vector to a [`Label`].
///
/// The same rule is used at both ends of a point's life: assigning the label
/// when a point is generated, and scoring stored points for the accuracy
/// metric. Implementations must be pure and total.
pub trait Classifier<F: Float> {
    fn classify(&self, features: ArrayView1<F>) -> Label;
}

/// The fixed linear rule `x + y > 0 => Positive`.
///
/// The comparison is strict, so a point exactly on the boundary is Negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearBoundary;

impl<F: Float> Classifier<F> for LinearBoundary {
    fn classify(&self, features: ArrayView1<F>) -> Label {
        if features.sum() > F::zero() {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}
