//! Core state and logic for the unlearning visualizer.
//!
//! The library owns the two pieces of source-of-truth state — a [`PointStore`]
//! of labeled 2D points and a [`SelectionSet`] of positional indices — plus
//! the pure views derived from them: the [`ChartProjection`] and the
//! [`accuracy`] metric. The presentation layer in the `app` crate holds one
//! of each and recomputes the derived views after every mutation.

use ndarray::NdFloat;
use num_traits::{FromPrimitive, NumCast};
use rand::distr::uniform::SampleUniform;
use std::iter::Sum;

mod chart;
mod classifier;
mod metrics;
mod point;
mod selection;
mod store;

pub use chart::ChartProjection;
pub use classifier::{Classifier, LinearBoundary};
pub use metrics::{accuracy, MetricsError};
pub use point::{DataPoint, Label};
pub use selection::SelectionSet;
pub use store::PointStore;

/// Float abstraction used by all generic code in this crate.
///
/// `f32` and `f64` are the only intended implementors; the supertraits are
/// what the store and metrics actually need (ndarray arithmetic, uniform
/// sampling, lossless casts from integer counts).
pub trait Float: NdFloat + FromPrimitive + Default + Sum + SampleUniform {
    fn cast<T: NumCast>(x: T) -> Option<Self> {
        NumCast::from(x)
    }
}

impl Float for f32 {}
impl Float for f64 {}
