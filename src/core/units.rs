use crate::models::Unit;

/// Miles in one meter
pub const METERS_PER_MILE: f64 = 0.000621371192;

/// Scale a distance in meters to `unit`
#[inline]
pub fn convert_meters(meters: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Kilometer => meters / 1000.0,
        Unit::Mile => meters * METERS_PER_MILE,
        Unit::Meter => meters,
    }
}
