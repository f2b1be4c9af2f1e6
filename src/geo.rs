//! Geographic coordinates and geodesic distance.
//!
//! Distances are computed on the WGS84 ellipsoid with Vincenty's inverse
//! formula. Vincenty does not converge for nearly antipodal points; those fall
//! back to a great-circle (haversine) distance on the mean Earth radius.

use serde::{Deserialize, Serialize};

/// WGS84 semi-major axis in kilometers.
const WGS84_A_KM: f64 = 6378.137;
/// WGS84 flattening.
const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// Mean Earth radius (IUGG) in kilometers, used by the haversine fallback.
const MEAN_EARTH_RADIUS_KM: f64 = 6371.0088;

const VINCENTY_MAX_ITERATIONS: usize = 200;
const VINCENTY_TOLERANCE: f64 = 1e-12;

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180.0 to 180.0)
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Geodesic distance to another coordinate in kilometers.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        vincenty_km(self, other).unwrap_or_else(|| haversine_km(self, other))
    }

    /// Geodesic distance rounded to the nearest whole kilometer (ties to even).
    pub fn rounded_distance_km(&self, other: &Coordinate) -> f64 {
        self.distance_km(other).round_ties_even()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Vincenty inverse formula on the WGS84 ellipsoid.
///
/// Returns `None` when the iteration fails to converge.
fn vincenty_km(p1: &Coordinate, p2: &Coordinate) -> Option<f64> {
    let b = (1.0 - WGS84_F) * WGS84_A_KM;

    let l = (p2.longitude - p1.longitude).to_radians();
    let u1 = ((1.0 - WGS84_F) * p1.latitude.to_radians().tan()).atan();
    let u2 = ((1.0 - WGS84_F) * p2.latitude.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    for _ in 0..VINCENTY_MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // coincident points
            return Some(0.0);
        }
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // equatorial line: cos_sq_alpha == 0
        let cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };
        let c = WGS84_F / 16.0 * cos_sq_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));

        if (lambda - lambda_prev).abs() < VINCENTY_TOLERANCE {
            let a = WGS84_A_KM;
            let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
            let big_a =
                1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
            let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma.powi(2))
                                * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));
            return Some(b * big_a * (sigma - delta_sigma));
        }
    }

    None
}

/// Great-circle distance on a sphere of mean Earth radius.
fn haversine_km(p1: &Coordinate, p2: &Coordinate) -> f64 {
    let d_lat = (p2.latitude - p1.latitude).to_radians();
    let d_lon = (p2.longitude - p1.longitude).to_radians();
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * MEAN_EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}
