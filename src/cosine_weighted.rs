use crate::disk::ConcentricUnitDisk;
use crate::domain::{Domain, SquareMapping};
use crate::real::Real;
use crate::unit::on_unit_shell;

use cgmath::Point3;
use std::marker::PhantomData;

/// Cosine weighted distribution on the upper unit hemisphere, e.g. for
/// monte carlo estimators of diffuse reflection.
///
/// Projects a [`ConcentricUnitDisk`](struct.ConcentricUnitDisk.html) sample
/// up onto the hemisphere, which concentrates samples around the pole.
///
/// The density still reports `1 / 2π` like the uniform hemisphere does,
/// following the reciprocal measure convention of this crate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CosineWeightedUnitHemisphere<S = f32> {
    _scalar: PhantomData<S>,
}

impl<S: Real> CosineWeightedUnitHemisphere<S> {
    pub fn new() -> Self {
        CosineWeightedUnitHemisphere {
            _scalar: PhantomData,
        }
    }
}

impl<S: Real> Domain for CosineWeightedUnitHemisphere<S> {
    type Scalar = S;
    type Point = Point3<S>;

    fn contains(p: &Point3<S>) -> bool {
        // must not be in the -z hemisphere
        p.z >= S::zero() && on_unit_shell(p)
    }

    fn probability_density(_: &Point3<S>) -> S {
        S::one() / Self::area()
    }

    fn area() -> S {
        S::from_f64(2.0) * S::PI()
    }
}

impl<S: Real> SquareMapping for CosineWeightedUnitHemisphere<S> {
    fn map_unit_square(&self, u: S, v: S) -> Point3<S> {
        let d = ConcentricUnitDisk::<S>::new().map_unit_square(u, v);
        let z = S::zero().max(S::one() - d.x * d.x - d.y * d.y).sqrt();

        Point3::new(d.x, d.y, z)
    }
}
