//! geo-distance - Distances between geographic coordinates
//!
//! This library computes the distance between two latitude/longitude pairs
//! with three methods of increasing accuracy and cost: a flat equirectangular
//! approximation, the Haversine great-circle formula and Vincenty's inverse
//! formula on the WGS-84 ellipsoid.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{
    DistanceCalculator,
    distance::{flat_distance, haversine_distance, EARTH_RADIUS},
    units::{convert_meters, METERS_PER_MILE},
    vincenty::{vincenty_distance, VincentyOutcome, VincentyParams},
};
pub use crate::config::{CalculatorSettings, LoggingSettings, Settings};
pub use error::GeoError;
pub use models::{Coordinate, DistanceReport, Unit};
