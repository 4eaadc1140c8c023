use num_traits::{AsPrimitive, Num};

/// Trait for element types accepted by the statistics functions.
///
/// Blanket-implemented for all types satisfying the bounds, which covers every primitive integer
/// and float. Floating-point results are computed in `f64`.
pub trait Sample: Copy + PartialOrd + Default + Num + AsPrimitive<f64> {}

impl<T: Copy + PartialOrd + Default + Num + AsPrimitive<f64>> Sample for T {}
