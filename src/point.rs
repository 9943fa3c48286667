use crate::Float;
use ndarray::Array1;
use std::fmt::{self, Debug, Display, Formatter};

/// The two classes the decision rule can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Label {
    Positive,
    Negative,
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Label::Positive => write!(f, "Positive"),
            Label::Negative => write!(f, "Negative"),
        }
    }
}

/// Represents a single data point with features and a label.
///
/// L: The type of the label (e.g., [`Label`], `String`, an enum).
/// F: The float type for the features (e.g., `f32`, `f64`).
///
/// A point is immutable once created; the store removes points but never
/// rewrites their features or label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct DataPoint<L, F>
where
    L: Clone + Eq + std::hash::Hash + Debug,
    F: Float,
{
    pub features: Array1<F>,
    pub label: L,
}

impl<L, F> DataPoint<L, F>
where
    L: Clone + Eq + std::hash::Hash + Debug,
    F: Float,
{
    pub fn new(features: Array1<F>, label: L) -> Self {
        DataPoint { features, label }
    }
}
