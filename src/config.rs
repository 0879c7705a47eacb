use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::vincenty::{VincentyParams, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::error::GeoError;
use crate::models::Unit;

/// Library configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub calculator: CalculatorSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorSettings {
    #[serde(default)]
    pub unit: Unit,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            unit: Unit::default(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

impl CalculatorSettings {
    pub fn vincenty_params(&self) -> VincentyParams {
        VincentyParams {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
        }
    }
}

fn default_max_iterations() -> u32 { DEFAULT_MAX_ITERATIONS }
fn default_tolerance() -> f64 { DEFAULT_TOLERANCE }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with GEODIST_)
    pub fn load() -> Result<Self, GeoError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local overrides for development
            .add_source(File::with_name("config/local").required(false))
            // e.g., GEODIST__CALCULATOR__UNIT -> calculator.unit
            .add_source(environment())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, GeoError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Parse configuration from a TOML document, without consulting the
    /// environment
    pub fn from_toml(source: &str) -> Result<Self, GeoError> {
        Ok(toml::from_str(source)?)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("GEODIST")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
