// Model exports
pub mod domain;
pub mod responses;

pub use domain::{Coordinate, Unit};
pub use responses::DistanceReport;
