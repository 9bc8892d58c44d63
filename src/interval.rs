use crate::domain::Domain;
use crate::entropy::{Uint, UintGenerator};
use crate::real::Real;

use std::marker::PhantomData;

/// Uniform distribution on `[0, 1)`.
///
/// Integers are divided by the maximum of their type. The division yields
/// exactly one for the maximum itself, so results are clamped to the largest
/// value below one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitInterval<S = f32> {
    _scalar: PhantomData<S>,
}

impl<S: Real> UnitInterval<S> {
    pub fn new() -> Self {
        UnitInterval {
            _scalar: PhantomData,
        }
    }

    #[inline]
    pub fn sample<I: Uint>(&self, i: I) -> S {
        let ratio = S::from_u64(i.widen()) / S::from_u64(I::MAX.widen());
        ratio.min(S::ONE_MINUS_EPSILON)
    }

    #[inline]
    pub fn sample_with<G: UintGenerator + ?Sized>(&self, generator: &mut G) -> S {
        self.sample(generator.generate())
    }
}

impl<S: Real> Domain for UnitInterval<S> {
    type Scalar = S;
    type Point = S;

    fn contains(x: &S) -> bool {
        S::zero() <= *x && *x < S::one()
    }

    fn probability_density(_: &S) -> S {
        S::one()
    }

    fn area() -> S {
        S::one()
    }
}
