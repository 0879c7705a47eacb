use crate::models::Coordinate;

/// WGS-84 equatorial radius in meters
pub const EARTH_RADIUS: f64 = 6378136.6;

/// Approximate flat distance between two points in meters
///
/// Pythagoras on an equirectangular projection. Cheap, but the error grows
/// quickly with distance and latitude.
///
/// # Arguments
/// * `from` - First point
/// * `to` - Second point
///
/// # Returns
/// Distance in meters
#[inline]
pub fn flat_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat_a, lng_a) = from.to_radians();
    let (lat_b, lng_b) = to.to_radians();

    let x = (lng_b - lng_a) * ((lat_a + lat_b) / 2.0).cos();
    let y = lat_b - lat_a;

    (x * x + y * y).sqrt() * EARTH_RADIUS
}

/// Calculate the Haversine distance between two points in meters
///
/// Great-circle distance on a sphere of radius `EARTH_RADIUS`, accurate to
/// around 0.3% against the ellipsoid.
///
/// # Arguments
/// * `from` - First point
/// * `to` - Second point
///
/// # Returns
/// Distance in meters
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat_a, lng_a) = from.to_radians();
    let (lat_b, lng_b) = to.to_radians();

    let delta_lat = lat_b - lat_a;
    let delta_lon = lng_b - lng_a;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS * c
}
