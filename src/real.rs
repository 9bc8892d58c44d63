use cgmath::BaseFloat;
use hexf::{hexf32, hexf64};
use num_traits::FloatConst;

/// Scalar type used for coordinates, densities and measures.
///
/// Implemented for `f32` and `f64`.
pub trait Real: BaseFloat + FloatConst + Send + Sync + 'static {
    /// The largest value strictly below one.
    const ONE_MINUS_EPSILON: Self;

    /// Maximum deviation of the squared radius from one that still counts as
    /// lying on the unit sphere.
    const SHELL_TOLERANCE: Self;

    fn from_f64(x: f64) -> Self;

    /// Nearest representable value, rounding as an `as` cast does.
    fn from_u64(x: u64) -> Self;
}

impl Real for f32 {
    const ONE_MINUS_EPSILON: f32 = hexf32!("0x1.fffffep-1");
    const SHELL_TOLERANCE: f32 = 0.000_005;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }

    #[inline]
    fn from_u64(x: u64) -> f32 {
        x as f32
    }
}

impl Real for f64 {
    const ONE_MINUS_EPSILON: f64 = hexf64!("0x1.fffffffffffffp-1");
    const SHELL_TOLERANCE: f64 = 0.000_005;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }

    #[inline]
    fn from_u64(x: u64) -> f64 {
        x as f64
    }
}
