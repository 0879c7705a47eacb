// Core algorithm exports
pub mod calculator;
pub mod distance;
pub mod units;
pub mod vincenty;

pub use calculator::DistanceCalculator;
pub use distance::{flat_distance, haversine_distance};
pub use units::convert_meters;
pub use vincenty::{vincenty_distance, VincentyOutcome, VincentyParams};
