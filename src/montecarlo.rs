//! Monte Carlo checks of a distribution against its own queries.
//!
//! Since the density of every distribution in this crate is the reciprocal of
//! its measure, averaging `1 / pdf` over samples estimates the area. A
//! distribution is consistent if its samples land in its domain, have a
//! positive density and the estimate converges to [`Domain::area`](../trait.Domain.html#tymethod.area).

use crate::domain::SquareMapping;
use crate::entropy::UintGenerator;

use log::{debug, warn};
use num_traits::ToPrimitive;
use thiserror::Error;

/// Fewer samples than this cannot be trusted to show convergence.
pub const MIN_SAMPLES: usize = 10_000;

/// Parameters for [`validate`](fn.validate.html).
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationConfig {
    /// Number of samples to draw, at least `MIN_SAMPLES`.
    pub samples: usize,
    /// Accepted relative deviation of the estimated from the reported area.
    pub relative_tolerance: f64,
    /// Share of samples that must pass the containment test. Surfaces need
    /// some slack for rounding.
    pub min_contained_ratio: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            samples: MIN_SAMPLES,
            relative_tolerance: 1e-3,
            min_contained_ratio: 0.9999,
        }
    }
}

/// Outcome of drawing samples from a distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaEstimate {
    /// Mean of `1 / pdf` over the samples.
    pub estimate: f64,
    /// Area reported by the distribution.
    pub expected: f64,
    pub samples: usize,
    /// Samples that failed the containment test.
    pub outside: usize,
    /// Smallest density seen.
    pub min_density: f64,
}

impl AreaEstimate {
    pub fn relative_error(&self) -> f64 {
        ((self.estimate - self.expected) / self.expected).abs()
    }

    pub fn contained_ratio(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        (self.samples - self.outside) as f64 / self.samples as f64
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("at least {min} samples are needed to estimate an area, got {samples}")]
    TooFewSamples { samples: usize, min: usize },
    #[error("a sample has non-positive density {density}")]
    NonPositiveDensity { density: f64 },
    #[error("{outside} of {samples} samples fell outside the domain")]
    Containment { outside: usize, samples: usize },
    #[error("estimated area {estimate} deviates from {expected} by more than {tolerance} relative")]
    AreaMismatch {
        estimate: f64,
        expected: f64,
        tolerance: f64,
    },
}

/// Draws `samples` points from `distribution` and averages `1 / pdf` over them.
///
/// Sums are accumulated in double precision, whatever the scalar type.
/// Densities are evaluated regardless of containment, check
/// [`AreaEstimate::outside`](struct.AreaEstimate.html#structfield.outside).
pub fn estimate_area<D, G>(distribution: &D, generator: &mut G, samples: usize) -> AreaEstimate
where
    D: SquareMapping,
    G: UintGenerator + ?Sized,
{
    let mut sum = 0.0_f64;
    let mut outside = 0;
    let mut min_density = std::f64::INFINITY;

    for _ in 0..samples {
        let p = distribution.sample_with(generator);
        if !D::contains(&p) {
            outside += 1;
        }

        let density = to_f64(D::probability_density(&p));
        min_density = min_density.min(density);
        sum += 1.0 / density;
    }

    AreaEstimate {
        estimate: if samples == 0 { 0.0 } else { sum / samples as f64 },
        expected: to_f64(D::area()),
        samples,
        outside,
        min_density,
    }
}

/// Samples `distribution` and checks containment, density positivity and
/// convergence of the area estimate.
pub fn validate<D, G>(
    distribution: &D,
    generator: &mut G,
    config: &ValidationConfig,
) -> Result<AreaEstimate, ValidationError>
where
    D: SquareMapping,
    G: UintGenerator + ?Sized,
{
    if config.samples < MIN_SAMPLES {
        return Err(ValidationError::TooFewSamples {
            samples: config.samples,
            min: MIN_SAMPLES,
        });
    }

    let estimate = estimate_area(distribution, generator, config.samples);

    debug!(
        "estimated area {} (expected {}) from {} samples, {} outside",
        estimate.estimate, estimate.expected, estimate.samples, estimate.outside
    );

    if !(estimate.min_density > 0.0) {
        return Err(ValidationError::NonPositiveDensity {
            density: estimate.min_density,
        });
    }

    if estimate.outside > 0 {
        warn!(
            "{} of {} samples failed the containment test",
            estimate.outside, estimate.samples
        );
    }

    if estimate.contained_ratio() < config.min_contained_ratio {
        return Err(ValidationError::Containment {
            outside: estimate.outside,
            samples: estimate.samples,
        });
    }

    if !(estimate.relative_error() <= config.relative_tolerance) {
        return Err(ValidationError::AreaMismatch {
            estimate: estimate.estimate,
            expected: estimate.expected,
            tolerance: config.relative_tolerance,
        });
    }

    Ok(estimate)
}

fn to_f64<S: ToPrimitive>(x: S) -> f64 {
    x.to_f64().unwrap_or(std::f64::NAN)
}
