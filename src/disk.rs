use crate::domain::{Domain, SquareMapping};
use crate::real::Real;

use cgmath::Point2;
use std::marker::PhantomData;

/// Uniform distribution on the unit disk using polar coordinates.
///
/// Taking the square root of the radial coordinate compensates for the
/// Jacobian of the polar map, so equal areas of the square land on equal
/// areas of the disk.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitDisk<S = f32> {
    _scalar: PhantomData<S>,
}

impl<S: Real> UnitDisk<S> {
    pub fn new() -> Self {
        UnitDisk {
            _scalar: PhantomData,
        }
    }
}

impl<S: Real> Domain for UnitDisk<S> {
    type Scalar = S;
    type Point = Point2<S>;

    fn contains(p: &Point2<S>) -> bool {
        let radius_squared = p.x * p.x + p.y * p.y;
        S::zero() <= radius_squared && radius_squared < S::one()
    }

    fn probability_density(_: &Point2<S>) -> S {
        S::one() / Self::area()
    }

    fn area() -> S {
        S::PI()
    }
}

impl<S: Real> SquareMapping for UnitDisk<S> {
    fn map_unit_square(&self, u: S, v: S) -> Point2<S> {
        let r = u.sqrt();
        let theta = S::from_f64(2.0) * S::PI() * v;

        Point2::new(r * theta.cos(), r * theta.sin())
    }
}

/// Uniform distribution on the unit disk using the concentric mapping of
/// Shirley and Chiu.
///
/// Squares around the center map to rings, which keeps neighbouring samples
/// much closer together than [`UnitDisk`](struct.UnitDisk.html) does. Prefer
/// this one when the disk is only an intermediate step, as for
/// [`CosineWeightedUnitHemisphere`](struct.CosineWeightedUnitHemisphere.html).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConcentricUnitDisk<S = f32> {
    _scalar: PhantomData<S>,
}

impl<S: Real> ConcentricUnitDisk<S> {
    pub fn new() -> Self {
        ConcentricUnitDisk {
            _scalar: PhantomData,
        }
    }
}

impl<S: Real> Domain for ConcentricUnitDisk<S> {
    type Scalar = S;
    type Point = Point2<S>;

    fn contains(p: &Point2<S>) -> bool {
        let radius = (p.x * p.x + p.y * p.y).sqrt();
        S::zero() <= radius && radius <= S::one()
    }

    fn probability_density(_: &Point2<S>) -> S {
        S::one() / Self::area()
    }

    fn area() -> S {
        S::PI()
    }
}

impl<S: Real> SquareMapping for ConcentricUnitDisk<S> {
    fn map_unit_square(&self, u: S, v: S) -> Point2<S> {
        let two = S::from_f64(2.0);

        // map to [-1, 1)²
        let sx = two * u - S::one();
        let sy = two * v - S::one();

        // the center would divide zero by zero below
        if sx == S::zero() && sy == S::zero() {
            return Point2::new(S::zero(), S::zero());
        }

        // theta is measured in eighths of a turn until the end
        let (r, theta) = if sx >= -sy {
            if sx > sy {
                let r = sx;
                if sy > S::zero() {
                    (r, sy / r)
                } else {
                    (r, S::from_f64(8.0) + sy / r)
                }
            } else {
                let r = sy;
                (r, two - sx / r)
            }
        } else if sx <= sy {
            let r = -sx;
            (r, S::from_f64(4.0) - sy / r)
        } else {
            let r = -sy;
            (r, S::from_f64(6.0) + sx / r)
        };

        let theta = theta * S::FRAC_PI_4();

        Point2::new(r * theta.cos(), r * theta.sin())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entropy::RngSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f32::consts::{FRAC_1_PI, PI};

    #[test]
    fn test_unit_disk_quarter_turn() {
        let p = UnitDisk::<f32>::new().map_unit_square(0.5, 0.25);

        assert_relative_eq!(0.0, p.x, epsilon = 1e-6);
        assert_relative_eq!(0.5_f32.sqrt(), p.y, epsilon = 1e-6);
        assert!(UnitDisk::<f32>::contains(&p));
        assert_ulps_eq!(FRAC_1_PI, UnitDisk::<f32>::probability_density(&p));
        assert_ulps_eq!(1.0 / PI, UnitDisk::<f32>::probability_density(&p));
    }

    #[test]
    fn test_unit_disk_samples_inside() {
        let disk = UnitDisk::<f64>::new();
        let mut source = RngSource(StdRng::seed_from_u64(3));

        let outside = (0..10_000)
            .map(|_| disk.sample_with(&mut source))
            .filter(|p| !UnitDisk::<f64>::contains(p))
            .count();

        assert!(outside <= 1, "{} samples outside the disk", outside);
    }

    #[test]
    fn test_unit_disk_rejects_boundary() {
        assert!(!UnitDisk::<f32>::contains(&Point2::new(1.0, 0.0)));
        assert!(!UnitDisk::<f32>::contains(&Point2::new(0.8, 0.8)));
        assert!(UnitDisk::<f32>::contains(&Point2::new(0.0, 0.0)));
    }

    #[test]
    fn test_concentric_center_is_exact_origin() {
        let p = ConcentricUnitDisk::<f32>::new().map_unit_square(0.5, 0.5);

        assert_eq!(Point2::new(0.0, 0.0), p);
        assert!(!p.x.is_nan() && !p.y.is_nan());
        assert!(ConcentricUnitDisk::<f32>::contains(&p));
    }

    #[test]
    fn test_concentric_center_from_integers() {
        // half of u32::MAX rounds to exactly 0.5 in single precision
        let half = u32::max_value() / 2;
        let p = ConcentricUnitDisk::<f32>::new().sample(half, half);

        assert_eq!(Point2::new(0.0, 0.0), p);
    }

    #[test]
    fn test_concentric_regions() {
        let disk = ConcentricUnitDisk::<f64>::new();

        // first region, on the positive x axis
        let p = disk.map_unit_square(0.75, 0.5);
        assert_relative_eq!(0.5, p.x, epsilon = 1e-12);
        assert_relative_eq!(0.0, p.y, epsilon = 1e-12);

        // second region, on the positive y axis
        let p = disk.map_unit_square(0.5, 0.75);
        assert_relative_eq!(0.0, p.x, epsilon = 1e-12);
        assert_relative_eq!(0.5, p.y, epsilon = 1e-12);

        // third region, on the negative x axis
        let p = disk.map_unit_square(0.25, 0.5);
        assert_relative_eq!(-0.5, p.x, epsilon = 1e-12);
        assert_relative_eq!(0.0, p.y, epsilon = 1e-12);

        // fourth region, on the negative y axis
        let p = disk.map_unit_square(0.5, 0.25);
        assert_relative_eq!(0.0, p.x, epsilon = 1e-12);
        assert_relative_eq!(-0.5, p.y, epsilon = 1e-12);

        // corners of the square land on the diagonals
        let p = disk.map_unit_square(0.75, 0.75);
        let half_diagonal = 0.5 * std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(half_diagonal, p.x, epsilon = 1e-12);
        assert_relative_eq!(half_diagonal, p.y, epsilon = 1e-12);
    }

    #[test]
    fn test_concentric_rings_keep_radius() {
        let disk = ConcentricUnitDisk::<f64>::new();

        // every point on the boundary of the square [0.25, 0.75)² has radius 0.5
        for i in 0..64 {
            let t = 0.25 + 0.5 * (i as f64) / 64.0;
            for &(u, v) in [(t, 0.25), (t, 0.75), (0.25, t), (0.75, t)].iter() {
                let p = disk.map_unit_square(u, v);
                assert_relative_eq!(0.5, (p.x * p.x + p.y * p.y).sqrt(), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_concentric_samples_inside() {
        let disk = ConcentricUnitDisk::<f32>::new();
        let mut source = RngSource(StdRng::seed_from_u64(4));

        for _ in 0..10_000 {
            let p = disk.sample_with(&mut source);
            assert!(ConcentricUnitDisk::<f32>::contains(&p), "{:?} outside", p);
            assert!(ConcentricUnitDisk::<f32>::probability_density(&p) > 0.0);
        }
        assert_ulps_eq!(PI, ConcentricUnitDisk::<f32>::area());
    }

    #[test]
    fn test_deterministic() {
        let disk = UnitDisk::<f32>::new();
        let concentric = ConcentricUnitDisk::<f32>::new();

        for &code in [0_u64, 17, 0xdead_beef_cafe, u64::max_value()].iter() {
            assert_eq!(disk.sample_index(code), disk.sample_index(code));
            assert_eq!(concentric.sample_index(code), concentric.sample_index(code));
        }
    }
}
