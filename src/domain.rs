use crate::entropy::{Uint, UintGenerator};
use crate::interval::UnitInterval;
use crate::morton::MortonCode;
use crate::real::Real;

/// Membership, density and measure queries shared by every distribution.
///
/// The density follows the convention of this crate: it is the reciprocal of
/// the total measure, so it integrates to [`area`](#tymethod.area) over the
/// domain rather than to one.
pub trait Domain {
    type Scalar: Real;
    type Point: Copy;

    /// Checks whether `p` lies in the domain.
    ///
    /// Surfaces in 3D accept points within a small tolerance of the unit
    /// sphere.
    fn contains(p: &Self::Point) -> bool;

    /// Density at `p`. The result is unspecified if `!Self::contains(p)`.
    fn probability_density(p: &Self::Point) -> Self::Scalar;

    /// Total measure of the domain, i.e. its length, area or solid angle.
    fn area() -> Self::Scalar;
}

/// A distribution obtained by pushing the unit square through a closed-form,
/// measure-preserving map.
///
/// Implementers only provide the map, all integer entry points are derived
/// from it.
pub trait SquareMapping: Domain {
    /// Maps `(u, v)` in `[0, 1)²` onto the domain.
    fn map_unit_square(&self, u: Self::Scalar, v: Self::Scalar) -> Self::Point;

    /// Samples using one integer per coordinate of the unit square.
    #[inline]
    fn sample<X: Uint, Y: Uint>(&self, x: X, y: Y) -> Self::Point {
        let interval = UnitInterval::<Self::Scalar>::new();
        self.map_unit_square(interval.sample(x), interval.sample(y))
    }

    /// Samples using a single Morton code, decoded into the two coordinates.
    ///
    /// Consecutive codes land close to each other.
    #[inline]
    fn sample_index<I: MortonCode>(&self, code: I) -> Self::Point {
        let (x, y) = code.decode_2d();
        self.sample(x, y)
    }

    /// Draws one code from `generator` and samples with it.
    #[inline]
    fn sample_with<G: UintGenerator + ?Sized>(&self, generator: &mut G) -> Self::Point {
        self.sample_index(generator.generate())
    }
}
