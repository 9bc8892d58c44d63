use crate::domain::{Domain, SquareMapping};
use crate::real::Real;

use cgmath::Point3;
use std::marker::PhantomData;

/// Checks the squared distance from the origin against one, within
/// `SHELL_TOLERANCE`.
pub(crate) fn on_unit_shell<S: Real>(p: &Point3<S>) -> bool {
    let radius_squared = p.x * p.x + p.y * p.y + p.z * p.z;
    (S::one() - radius_squared).abs() < S::SHELL_TOLERANCE
}

/// Lifts height `z` and azimuth fraction `v` onto the unit sphere.
#[inline]
fn lift<S: Real>(z: S, v: S) -> Point3<S> {
    let r = S::zero().max(S::one() - z * z).sqrt();
    let phi = S::from_f64(2.0) * S::PI() * v;

    Point3::new(r * phi.cos(), r * phi.sin(), z)
}

/// Uniform distribution on the surface of the unit sphere.
///
/// The first coordinate of the unit square picks the height, the second the
/// azimuth. Since the sphere is a surface, [`contains`](trait.Domain.html#tymethod.contains)
/// tests for a squared radius within a small tolerance of one rather than
/// testing a ball.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitSphere<S = f32> {
    _scalar: PhantomData<S>,
}

impl<S: Real> UnitSphere<S> {
    pub fn new() -> Self {
        UnitSphere {
            _scalar: PhantomData,
        }
    }
}

impl<S: Real> Domain for UnitSphere<S> {
    type Scalar = S;
    type Point = Point3<S>;

    fn contains(p: &Point3<S>) -> bool {
        on_unit_shell(p)
    }

    fn probability_density(_: &Point3<S>) -> S {
        S::one() / Self::area()
    }

    fn area() -> S {
        S::from_f64(4.0) * S::PI()
    }
}

impl<S: Real> SquareMapping for UnitSphere<S> {
    fn map_unit_square(&self, u: S, v: S) -> Point3<S> {
        let z = S::one() - S::from_f64(2.0) * u;
        lift(z, v)
    }
}

/// Uniform distribution on the upper half of the unit sphere, `z >= 0`.
///
/// The height is taken directly from the first coordinate of the unit square.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitHemisphere<S = f32> {
    _scalar: PhantomData<S>,
}

impl<S: Real> UnitHemisphere<S> {
    pub fn new() -> Self {
        UnitHemisphere {
            _scalar: PhantomData,
        }
    }
}

impl<S: Real> Domain for UnitHemisphere<S> {
    type Scalar = S;
    type Point = Point3<S>;

    fn contains(p: &Point3<S>) -> bool {
        p.z >= S::zero() && on_unit_shell(p)
    }

    fn probability_density(_: &Point3<S>) -> S {
        S::one() / Self::area()
    }

    fn area() -> S {
        S::from_f64(2.0) * S::PI()
    }
}

impl<S: Real> SquareMapping for UnitHemisphere<S> {
    fn map_unit_square(&self, u: S, v: S) -> Point3<S> {
        lift(u, v)
    }
}
