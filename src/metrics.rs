use crate::{Classifier, Float, PointStore};
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Errors that can occur when computing the accuracy metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// Accuracy over an empty point store is undefined; callers display
    /// this as "N/A" instead of a percentage.
    EmptyPointStore,
}

impl Display for MetricsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MetricsError::EmptyPointStore => {
                write!(f, "Cannot compute accuracy over an empty point store")
            }
        }
    }
}

impl Error for MetricsError {}

/// Classification accuracy of `rule` over the stored points, in percent.
///
/// Each point's stored label is compared against what `rule` assigns to its
/// features today. Stored labels are themselves assigned by the same rule at
/// creation time and never mutated, so as long as that invariant holds the
/// result is exactly 100.
///
/// # Errors
///
/// Returns [`MetricsError::EmptyPointStore`] when the store is empty, rather
/// than producing a NaN from the zero division.
pub fn accuracy<F: Float>(
    store: &PointStore<F>,
    rule: &impl Classifier<F>,
) -> Result<F, MetricsError> {
    if store.is_empty() {
        return Err(MetricsError::EmptyPointStore);
    }

    let correct = store
        .iter()
        .filter(|p| rule.classify(p.features.view()) == p.label)
        .count();

    let correct = F::cast(correct).unwrap();
    let total = F::cast(store.len()).unwrap();
    let percent = F::cast(100.0).unwrap();
    Ok(correct / total * percent)
}
