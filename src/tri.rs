use crate::domain::{Domain, SquareMapping};
use crate::real::Real;

use cgmath::{EuclideanSpace, Point2, Point3};
use std::marker::PhantomData;

/// Uniform distribution on the isosceles right triangle with unit legs,
/// spanned by `(0, 0)`, `(1, 0)` and `(0, 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitIsoscelesRightTriangle<S = f32> {
    _scalar: PhantomData<S>,
}

impl<S: Real> UnitIsoscelesRightTriangle<S> {
    pub fn new() -> Self {
        UnitIsoscelesRightTriangle {
            _scalar: PhantomData,
        }
    }

    /// Barycentric weights of `p` for the vertices `(0, 0)`, `(1, 0)` and `(0, 1)`.
    pub fn barycentric(p: &Point2<S>) -> [S; 3] {
        [S::one() - p.x - p.y, p.x, p.y]
    }

    /// Carries a sample of this distribution onto the triangle `abc`, where
    /// `a` corresponds to the right angle.
    ///
    /// The map is affine, hence points stay uniformly distributed.
    pub fn interpolate(p: &Point2<S>, [a, b, c]: [Point3<S>; 3]) -> Point3<S> {
        let [wa, wb, wc] = Self::barycentric(p);
        Point3::from_vec(a.to_vec() * wa + b.to_vec() * wb + c.to_vec() * wc)
    }
}

impl<S: Real> Domain for UnitIsoscelesRightTriangle<S> {
    type Scalar = S;
    type Point = Point2<S>;

    fn contains(p: &Point2<S>) -> bool {
        let (x, y) = (p.x, p.y);
        (S::zero() < x && x <= S::one()) && (S::zero() <= y && y <= S::one() - x)
    }

    fn probability_density(_: &Point2<S>) -> S {
        S::one() / Self::area()
    }

    fn area() -> S {
        S::from_f64(0.5)
    }
}

impl<S: Real> SquareMapping for UnitIsoscelesRightTriangle<S> {
    fn map_unit_square(&self, u1: S, u2: S) -> Point2<S> {
        let su1 = u1.sqrt();
        let x = S::one() - su1;

        // 1 - x may round below su1, clamp so y stays within the hypotenuse
        Point2::new(x, (u2 * su1).min(S::one() - x))
    }
}
