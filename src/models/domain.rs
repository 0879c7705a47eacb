use serde::{Deserialize, Serialize};

/// Geographic position in decimal degrees
///
/// Values are taken as given: nothing here checks that the latitude lies in
/// [-90, 90] or the longitude in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude and longitude converted to radians
    #[inline]
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        geo::Point::new(coordinate.longitude, coordinate.latitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Unit distances are reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Unit {
    #[default]
    Meter,
    Kilometer,
    Mile,
}

impl Unit {
    /// Resolve a unit from its name or abbreviation.
    ///
    /// Unknown names are not an error: they resolve to `Unit::Meter`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Unit::Meter,
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Unit::Kilometer,
            "mi" | "mile" | "miles" => Unit::Mile,
            other => {
                tracing::debug!("Unrecognised unit {:?}, falling back to meters", other);
                Unit::Meter
            }
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Unit::Meter => "m",
            Unit::Kilometer => "km",
            Unit::Mile => "mi",
        }
    }
}

impl From<&str> for Unit {
    fn from(name: &str) -> Self {
        Unit::from_name(name)
    }
}

impl From<String> for Unit {
    fn from(name: String) -> Self {
        Unit::from_name(&name)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_names() {
        assert_eq!(Unit::from_name("km"), Unit::Kilometer);
        assert_eq!(Unit::from_name(" Kilometres "), Unit::Kilometer);
        assert_eq!(Unit::from_name("MI"), Unit::Mile);
        assert_eq!(Unit::from_name("meters"), Unit::Meter);
    }

    #[test]
    fn test_unknown_unit_falls_back_to_meter() {
        assert_eq!(Unit::from_name("furlong"), Unit::Meter);
        assert_eq!(Unit::from_name(""), Unit::Meter);
        assert_eq!(Unit::default(), Unit::Meter);
    }

    #[test]
    fn test_unit_deserialize_with_fallback() {
        let unit: Unit = serde_json::from_str("\"mile\"").unwrap();
        assert_eq!(unit, Unit::Mile);

        let unit: Unit = serde_json::from_str("\"parsec\"").unwrap();
        assert_eq!(unit, Unit::Meter);
    }

    #[test]
    fn test_unit_serialize() {
        assert_eq!(serde_json::to_string(&Unit::Kilometer).unwrap(), "\"kilometer\"");
        assert_eq!(Unit::Mile.to_string(), "mi");
    }

    #[test]
    fn test_coordinate_aliases() {
        let coord: Coordinate = serde_json::from_str(r#"{"lat": 48.8234055, "lng": 2.3072664}"#).unwrap();
        assert_eq!(coord, Coordinate::new(48.8234055, 2.3072664));
    }

    #[test]
    fn test_geo_point_conversion() {
        let coord = Coordinate::new(43.296482, 5.36978);
        let point: geo::Point<f64> = coord.into();

        assert_eq!(point.x(), 5.36978);
        assert_eq!(point.y(), 43.296482);
        assert_eq!(Coordinate::from(point), coord);
    }
}
