//! Closed-form sampling of canonical domains from uniform integers, for instance:
//! * the [`UnitInterval`](struct.UnitInterval.html) and the [`UnitSquare`](struct.UnitSquare.html),
//! * the unit disk as [`UnitDisk`](struct.UnitDisk.html) or the lower distortion [`ConcentricUnitDisk`](struct.ConcentricUnitDisk.html),
//! * the [`UnitIsoscelesRightTriangle`](struct.UnitIsoscelesRightTriangle.html),
//! * the [`UnitSphere`](struct.UnitSphere.html), the [`UnitHemisphere`](struct.UnitHemisphere.html) and the [`CosineWeightedUnitHemisphere`](struct.CosineWeightedUnitHemisphere.html).
//!
//! Every distribution is a deterministic map from entropy to a point. Entropy
//! is either a pair of unsigned integers, a single [Morton code](morton/index.html)
//! that is split into such a pair, or a [`UintGenerator`](trait.UintGenerator.html)
//! producing one code per sample. The [`Domain`](trait.Domain.html) trait adds
//! containment, density and measure queries.
//!
//! ```
//! use unit_sampling::{Domain, SquareMapping, UnitDisk};
//!
//! let disk = UnitDisk::<f32>::new();
//! let p = disk.sample(0x8000_0000_u32, 0x4000_0000_u32);
//!
//! assert!(UnitDisk::<f32>::contains(&p));
//! assert_eq!(1.0 / std::f32::consts::PI, UnitDisk::<f32>::probability_density(&p));
//! ```

#[cfg(test)]
#[macro_use]
extern crate approx;

mod cosine_weighted;
mod disk;
mod domain;
mod entropy;
mod interval;
pub mod montecarlo;
pub mod morton;
mod real;
mod square;
mod tri;
mod unit;

pub use self::cosine_weighted::CosineWeightedUnitHemisphere;
pub use self::disk::{ConcentricUnitDisk, UnitDisk};
pub use self::domain::{Domain, SquareMapping};
pub use self::entropy::{RngSource, Uint, UintGenerator};
pub use self::interval::UnitInterval;
pub use self::morton::MortonCode;
pub use self::real::Real;
pub use self::square::UnitSquare;
pub use self::tri::UnitIsoscelesRightTriangle;
pub use self::unit::{UnitHemisphere, UnitSphere};
