use thiserror::Error;

/// Errors surfaced by geo-distance
#[derive(Error, Debug)]
pub enum GeoError {
    #[error("Vincenty formula failed to converge after {iterations} iterations")]
    NotConverged { iterations: u32 },

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Logging initialisation failed: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_converged_display() {
        let err = GeoError::NotConverged { iterations: 100 };
        assert_eq!(
            err.to_string(),
            "Vincenty formula failed to converge after 100 iterations"
        );
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("calculator = [").unwrap_err();
        let err: GeoError = toml_err.into();
        assert!(matches!(err, GeoError::Toml(_)));
    }
}
