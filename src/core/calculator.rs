use crate::config::CalculatorSettings;
use crate::core::{
    distance::{flat_distance, haversine_distance},
    units::convert_meters,
    vincenty::{vincenty_distance, VincentyOutcome, VincentyParams},
};
use crate::error::GeoError;
use crate::models::{Coordinate, DistanceReport, Unit};

/// Distance between two coordinates, by flat, Haversine or Vincenty
///
/// Setters return `&mut Self` so calls chain, and the order they are made in
/// does not matter. Nothing is cached: every method reads the current
/// endpoints and unit, so one calculator can be reused across pairs.
///
/// ```
/// use geo_distance::{Coordinate, DistanceCalculator, Unit};
///
/// let km = DistanceCalculator::new()
///     .set_from(Coordinate::new(48.8234055, 2.3072664))
///     .set_to(Coordinate::new(43.296482, 5.36978))
///     .in_unit(Unit::Kilometer)
///     .haversine();
/// assert!((km - 659.02).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceCalculator {
    from: Coordinate,
    to: Coordinate,
    unit: Unit,
    params: VincentyParams,
}

impl DistanceCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a calculator with the unit and iteration bounds from settings
    pub fn from_settings(settings: &CalculatorSettings) -> Self {
        Self {
            unit: settings.unit,
            params: settings.vincenty_params(),
            ..Self::default()
        }
    }

    pub fn with_params(mut self, params: VincentyParams) -> Self {
        self.params = params;
        self
    }

    pub fn set_from(&mut self, from: Coordinate) -> &mut Self {
        self.from = from;
        self
    }

    pub fn set_to(&mut self, to: Coordinate) -> &mut Self {
        self.to = to;
        self
    }

    pub fn in_unit(&mut self, unit: Unit) -> &mut Self {
        self.unit = unit;
        self
    }

    /// Select the unit by name; unknown names select meters
    pub fn in_named(&mut self, name: &str) -> &mut Self {
        self.in_unit(Unit::from_name(name))
    }

    pub fn from(&self) -> Coordinate {
        self.from
    }

    pub fn to(&self) -> Coordinate {
        self.to
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn params(&self) -> VincentyParams {
        self.params
    }

    /// Equirectangular approximation in the configured unit
    pub fn flat(&self) -> f64 {
        convert_meters(flat_distance(&self.from, &self.to), self.unit)
    }

    /// Great-circle distance in the configured unit
    pub fn haversine(&self) -> f64 {
        convert_meters(haversine_distance(&self.from, &self.to), self.unit)
    }

    /// Ellipsoidal distance in the configured unit
    ///
    /// # Returns
    /// `VincentyOutcome::Distance` on convergence, `Coincident` for identical
    /// points and `NotConverged` when the iteration budget ran out
    pub fn vincenty(&self) -> VincentyOutcome {
        let unit = self.unit;
        vincenty_distance(&self.from, &self.to, &self.params).map(|meters| convert_meters(meters, unit))
    }

    /// Same as [`vincenty`](Self::vincenty), with non-convergence as an error
    pub fn try_vincenty(&self) -> Result<f64, GeoError> {
        self.vincenty().into_result()
    }

    /// Run all three methods on the current state
    pub fn report(&self) -> DistanceReport {
        let report = DistanceReport {
            from: self.from,
            to: self.to,
            unit: self.unit,
            flat: self.flat(),
            haversine: self.haversine(),
            vincenty: self.vincenty().value(),
        };

        tracing::trace!(
            "Distance report {:?} -> {:?}: flat={} haversine={} vincenty={:?} {}",
            report.from,
            report.to,
            report.flat,
            report.haversine,
            report.vincenty,
            report.unit
        );

        report
    }
}
