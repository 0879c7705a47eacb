//! Vincenty's inverse formula on the WGS-84 ellipsoid
//!
//! See <http://www.movable-type.co.uk/scripts/latlong-vincenty.html>.

use crate::core::distance::EARTH_RADIUS;
use crate::error::GeoError;
use crate::models::Coordinate;

/// Semi-major axis in meters
pub const SEMI_MAJOR_AXIS: f64 = EARTH_RADIUS;

/// Semi-minor axis in meters
pub const SEMI_MINOR_AXIS: f64 = 6356752.314245;

/// WGS-84 flattening
pub const FLATTENING: f64 = 1.0 / 298.257223563;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Bounds on the lambda fixed-point iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VincentyParams {
    /// Lambda updates allowed before giving up; 0 gives up without any
    pub max_iterations: u32,
    /// Convergence threshold on successive lambda values, in radians
    pub tolerance: f64,
}

impl Default for VincentyParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Result of a Vincenty evaluation
///
/// Coincident points and a failed iteration are different answers and are
/// never folded into each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VincentyOutcome {
    /// Converged geodesic length
    Distance(f64),
    /// Both points are the same, the distance is zero
    Coincident,
    /// The iteration did not settle within the budget (near-antipodal points)
    NotConverged { iterations: u32 },
}

impl VincentyOutcome {
    /// Numeric distance, `Some(0.0)` for coincident points, `None` when the
    /// formula did not converge
    pub fn value(&self) -> Option<f64> {
        match *self {
            VincentyOutcome::Distance(d) => Some(d),
            VincentyOutcome::Coincident => Some(0.0),
            VincentyOutcome::NotConverged { .. } => None,
        }
    }

    pub fn is_coincident(&self) -> bool {
        matches!(self, VincentyOutcome::Coincident)
    }

    pub fn is_converged(&self) -> bool {
        !matches!(self, VincentyOutcome::NotConverged { .. })
    }

    /// Apply `f` to a converged distance, leaving the other outcomes alone
    pub fn map<F: FnOnce(f64) -> f64>(self, f: F) -> Self {
        match self {
            VincentyOutcome::Distance(d) => VincentyOutcome::Distance(f(d)),
            other => other,
        }
    }

    pub fn into_result(self) -> Result<f64, GeoError> {
        match self {
            VincentyOutcome::NotConverged { iterations } => Err(GeoError::NotConverged { iterations }),
            other => Ok(other.value().unwrap_or_default()),
        }
    }
}

/// Trig state of the last lambda iteration
struct Converged {
    sin_sigma: f64,
    cos_sigma: f64,
    sigma: f64,
    cos_sq_alpha: f64,
    cos_2_sigma_m: f64,
}

/// Geodetic distance between two points in meters, accurate to within about
/// 0.5mm on the ellipsoid
///
/// # Arguments
/// * `from` - First point
/// * `to` - Second point
/// * `params` - Iteration budget and tolerance
pub fn vincenty_distance(from: &Coordinate, to: &Coordinate, params: &VincentyParams) -> VincentyOutcome {
    if params.max_iterations == 0 {
        return VincentyOutcome::NotConverged { iterations: 0 };
    }

    let a = SEMI_MAJOR_AXIS;
    let b = SEMI_MINOR_AXIS;
    let f = FLATTENING;

    let l = (to.longitude - from.longitude).to_radians();
    let u1 = ((1.0 - f) * from.latitude.to_radians().tan()).atan();
    let u2 = ((1.0 - f) * to.latitude.to_radians().tan()).atan();

    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut iterations = 0u32;

    let state = loop {
        iterations += 1;

        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();

        if sin_sigma == 0.0 {
            tracing::trace!("Coincident points after {} iterations", iterations);
            return VincentyOutcome::Coincident;
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // Equatorial line: cos_sq_alpha is 0 and so is sin_u1 * sin_u2
        let cos_2_sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };

        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_p = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2_sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2_sigma_m * cos_2_sigma_m)));

        // A NaN difference counts as settled so that bad input comes out as NaN
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        let settled = !((lambda - lambda_p).abs() > params.tolerance);

        if settled {
            break Converged {
                sin_sigma,
                cos_sigma,
                sigma,
                cos_sq_alpha,
                cos_2_sigma_m,
            };
        }

        if iterations >= params.max_iterations {
            tracing::debug!(
                "Vincenty failed to converge after {} iterations ({:?} -> {:?})",
                iterations,
                from,
                to
            );
            return VincentyOutcome::NotConverged { iterations };
        }
    };

    let Converged {
        sin_sigma,
        cos_sigma,
        sigma,
        cos_sq_alpha,
        cos_2_sigma_m,
    } = state;

    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2_sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2_sigma_m * cos_2_sigma_m)
                    - big_b / 6.0
                        * cos_2_sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2_sigma_m * cos_2_sigma_m)));

    tracing::trace!("Vincenty converged in {} iterations", iterations);

    VincentyOutcome::Distance(b * big_a * (sigma - delta_sigma))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flinders_peak() -> Coordinate {
        Coordinate::new(-(37.0 + 57.0 / 60.0 + 3.72030 / 3600.0), 144.0 + 25.0 / 60.0 + 29.52440 / 3600.0)
    }

    fn buninyong() -> Coordinate {
        Coordinate::new(-(37.0 + 39.0 / 60.0 + 10.15610 / 3600.0), 143.0 + 55.0 / 60.0 + 35.38390 / 3600.0)
    }

    #[test]
    fn test_flinders_peak_to_buninyong() {
        let outcome = vincenty_distance(&flinders_peak(), &buninyong(), &VincentyParams::default());
        let distance = outcome.value().unwrap();

        // Published value is 54972.271 m on a = 6378137
        assert!((distance - 54972.271).abs() < 0.005, "got {}", distance);
        assert!((distance - 54972.26984).abs() < 1e-4, "got {}", distance);
    }

    #[test]
    fn test_coincident_points() {
        let point = Coordinate::new(12.5, -33.25);
        let outcome = vincenty_distance(&point, &point, &VincentyParams::default());

        assert_eq!(outcome, VincentyOutcome::Coincident);
        assert_eq!(outcome.value(), Some(0.0));
        assert!(outcome.is_converged());
    }

    #[test]
    fn test_near_antipodal_does_not_converge() {
        let outcome = vincenty_distance(
            &Coordinate::new(0.0, 0.0),
            &Coordinate::new(0.5, 179.7),
            &VincentyParams::default(),
        );

        assert_eq!(outcome, VincentyOutcome::NotConverged { iterations: 100 });
        assert_eq!(outcome.value(), None);
        assert!(!outcome.is_coincident());
    }

    #[test]
    fn test_iteration_budget_is_honoured() {
        let params = VincentyParams {
            max_iterations: 7,
            ..VincentyParams::default()
        };
        let outcome = vincenty_distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.5, 179.7), &params);

        assert_eq!(outcome, VincentyOutcome::NotConverged { iterations: 7 });
    }

    #[test]
    fn test_zero_budget_runs_no_update() {
        let params = VincentyParams {
            max_iterations: 0,
            ..VincentyParams::default()
        };
        let outcome = vincenty_distance(&Coordinate::new(10.0, 20.0), &Coordinate::new(11.0, 21.0), &params);

        assert_eq!(outcome, VincentyOutcome::NotConverged { iterations: 0 });
    }

    #[test]
    fn test_equatorial_line() {
        let outcome = vincenty_distance(
            &Coordinate::new(0.0, 0.0),
            &Coordinate::new(0.0, 90.0),
            &VincentyParams::default(),
        );
        let distance = outcome.value().unwrap();

        // Quarter of the equator, whose radius here is b / (1 - f)
        let expected = SEMI_MINOR_AXIS / (1.0 - FLATTENING) * std::f64::consts::FRAC_PI_2;
        assert!((distance - expected).abs() < 1e-3, "got {}", distance);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(VincentyOutcome::Distance(12.0).into_result().unwrap(), 12.0);
        assert_eq!(VincentyOutcome::Coincident.into_result().unwrap(), 0.0);

        let err = VincentyOutcome::NotConverged { iterations: 100 }.into_result().unwrap_err();
        assert!(matches!(err, GeoError::NotConverged { iterations: 100 }));
    }

    #[test]
    fn test_map_only_touches_distances() {
        assert_eq!(VincentyOutcome::Distance(2000.0).map(|d| d / 1000.0), VincentyOutcome::Distance(2.0));
        assert_eq!(VincentyOutcome::Coincident.map(|d| d + 1.0), VincentyOutcome::Coincident);
        assert_eq!(
            VincentyOutcome::NotConverged { iterations: 3 }.map(|d| d + 1.0),
            VincentyOutcome::NotConverged { iterations: 3 }
        );
    }
}
