use crate::domain::{Domain, SquareMapping};
use crate::real::Real;

use cgmath::Point2;
use std::marker::PhantomData;

/// Uniform distribution on `[0, 1)²`, built from two independent
/// [`UnitInterval`](struct.UnitInterval.html) samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitSquare<S = f32> {
    _scalar: PhantomData<S>,
}

impl<S: Real> UnitSquare<S> {
    pub fn new() -> Self {
        UnitSquare {
            _scalar: PhantomData,
        }
    }
}

impl<S: Real> Domain for UnitSquare<S> {
    type Scalar = S;
    type Point = Point2<S>;

    fn contains(p: &Point2<S>) -> bool {
        S::zero() <= p.x && p.x < S::one() && S::zero() <= p.y && p.y < S::one()
    }

    fn probability_density(_: &Point2<S>) -> S {
        S::one()
    }

    fn area() -> S {
        S::one()
    }
}

impl<S: Real> SquareMapping for UnitSquare<S> {
    #[inline]
    fn map_unit_square(&self, u: S, v: S) -> Point2<S> {
        Point2::new(u, v)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entropy::RngSource;
    use crate::morton::MortonCode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_corners() {
        let square = UnitSquare::<f32>::new();

        assert_eq!(Point2::new(0.0, 0.0), square.sample(0_u32, 0_u32));
        let far = square.sample(u32::max_value(), u64::max_value());
        assert!(UnitSquare::<f32>::contains(&far));
        assert_eq!(Point2::new(f32::ONE_MINUS_EPSILON, f32::ONE_MINUS_EPSILON), far);
    }

    #[test]
    fn test_index_decodes_morton_code() {
        let square = UnitSquare::<f64>::new();
        let code = u64::encode_2d(7, 0xffff_0000);

        assert_eq!(square.sample(7_u32, 0xffff_0000_u32), square.sample_index(code));
    }

    #[test]
    fn test_samples_inside() {
        let square = UnitSquare::<f32>::new();
        let mut source = RngSource(StdRng::seed_from_u64(1));

        for _ in 0..10_000 {
            let p = square.sample_with(&mut source);
            assert!(UnitSquare::<f32>::contains(&p));
            assert_eq!(1.0, UnitSquare::<f32>::probability_density(&p));
        }
        assert_eq!(1.0, UnitSquare::<f32>::area());
    }

    #[test]
    fn test_contains_rejects_outside() {
        assert!(!UnitSquare::<f32>::contains(&Point2::new(1.0, 0.5)));
        assert!(!UnitSquare::<f32>::contains(&Point2::new(0.5, -0.1)));
        assert!(UnitSquare::<f32>::contains(&Point2::new(0.0, 0.999)));
    }

    #[test]
    fn test_deterministic() {
        let square = UnitSquare::<f32>::new();

        for &code in [0_u64, 1, 0xdead_beef, u64::max_value()].iter() {
            assert_eq!(square.sample_index(code), square.sample_index(code));
        }
    }
}
