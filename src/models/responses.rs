use serde::{Deserialize, Serialize};
use crate::models::domain::{Coordinate, Unit};

/// All three distance estimates for one pair of coordinates
///
/// `vincenty` is `None` when the iteration failed to converge. Coincident
/// points report `Some(0.0)` there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceReport {
    pub from: Coordinate,
    pub to: Coordinate,
    pub unit: Unit,
    pub flat: f64,
    pub haversine: f64,
    pub vincenty: Option<f64>,
}
