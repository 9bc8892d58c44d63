//! Raw entropy accepted by the distributions: unsigned integers and generators of them.

use crate::cosine_weighted::CosineWeightedUnitHemisphere;
use crate::disk::{ConcentricUnitDisk, UnitDisk};
use crate::domain::SquareMapping;
use crate::interval::UnitInterval;
use crate::morton::MortonCode;
use crate::real::Real;
use crate::square::UnitSquare;
use crate::tri::UnitIsoscelesRightTriangle;
use crate::unit::{UnitHemisphere, UnitSphere};

use cgmath::{Point2, Point3};
use rand::distributions::Distribution;
use rand::{Rng, RngCore};
use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for usize {}
}

/// An unsigned integer type usable as entropy.
///
/// The whole range `0..=MAX` is assumed to be equally likely.
pub trait Uint: sealed::Sealed + Copy + Debug + Eq + Send + Sync + 'static {
    const MAX: Self;

    /// Zero-extends the value to 64 bits.
    fn widen(self) -> u64;
}

macro_rules! impl_uint {
    ($($ty:ty),*) => {
        $(
            impl Uint for $ty {
                const MAX: $ty = <$ty>::max_value();

                #[inline]
                fn widen(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_uint!(u8, u16, u32, u64, usize);

/// Produces unsigned integers on demand.
///
/// Every call to a sampling method consumes exactly one value.
///
/// The generator is expected to use the full range of its output type.
/// Some generators only fill the low bits of a wider integer, in that case
/// the resulting samples are biased without any warning.
pub trait UintGenerator {
    type Output: MortonCode;

    fn generate(&mut self) -> Self::Output;
}

impl<F, T> UintGenerator for F
where
    F: FnMut() -> T,
    T: MortonCode,
{
    type Output = T;

    #[inline]
    fn generate(&mut self) -> T {
        self()
    }
}

/// Adapts a `rand` generator, drawing full 64 bit words.
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl<R: RngCore> UintGenerator for RngSource<R> {
    type Output = u64;

    #[inline]
    fn generate(&mut self) -> u64 {
        self.0.next_u64()
    }
}

impl<S: Real> Distribution<S> for UnitInterval<S> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> S {
        UnitInterval::sample(self, rng.next_u64())
    }
}

// Every square mapped distribution draws one 64 bit Morton code per sample,
// so `rng.sample(UnitDisk::<f32>::new())` matches `sample_with(&mut RngSource(rng))`.
macro_rules! impl_rand_distribution {
    ($($dist:ident => $point:ident),*) => {
        $(
            impl<S: Real> Distribution<$point<S>> for $dist<S> {
                fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $point<S> {
                    self.sample_index(rng.next_u64())
                }
            }
        )*
    };
}

impl_rand_distribution!(
    UnitSquare => Point2,
    UnitDisk => Point2,
    ConcentricUnitDisk => Point2,
    UnitIsoscelesRightTriangle => Point2,
    UnitSphere => Point3,
    UnitHemisphere => Point3,
    CosineWeightedUnitHemisphere => Point3
);
