//! Numeric settings shared by distance and independence computations.

use crate::{
    coord::Real,
    error::{GeomError, Result},
    point::PointLike,
};
use linalg::GaussJordan;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Errors raised while loading a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file: {path}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration is not valid TOML or has unexpected fields.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// The solver tolerance must be finite and non-negative.
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(Real),
    /// The default Minkowski order must not be zero or NaN.
    #[error("Invalid default order: {0}")]
    InvalidOrder(Real),
}

/// Numeric settings.
///
/// Every field is optional in TOML:
///
/// ```toml
/// tolerance = 1e-8
/// default_order = 2.0
/// ```
///
/// The default tolerance is the one of [`GaussJordan::default`], so the
/// default configuration agrees with
/// [`linear_independent`](crate::linear_independent).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Relative tolerance of the linear solver.
    pub tolerance: Real,
    /// Minkowski order used by [`Config::distance`] and [`Config::norm`].
    pub default_order: Real,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: GaussJordan::<Real>::default().tolerance(),
            default_order: 2.0,
        }
    }
}

impl Config {
    /// Parses and validates a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> std::result::Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigError> {
        let string = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&string)?;
        log::info!("Loaded configuration from {}", path.display());
        log::info!("    - Solver tolerance: {}", config.tolerance);
        log::info!("    - Default order: {}", config.default_order);
        Ok(config)
    }

    /// Checks that every setting is in its domain.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if self.default_order == 0.0 || self.default_order.is_nan() {
            return Err(ConfigError::InvalidOrder(self.default_order));
        }
        Ok(())
    }

    /// Linear solver using the configured tolerance.
    pub fn solver(&self) -> GaussJordan<Real> { GaussJordan::new(self.tolerance) }

    /// Distance between two points of the configured order.
    pub fn distance(&self, a: &dyn PointLike, b: &dyn PointLike) -> Result<Real> {
        a.distance(b, self.default_order)
    }

    /// Norm of the configured order.
    pub fn norm(&self, a: &dyn PointLike) -> Result<Real> { a.norm(self.default_order) }
}

impl From<ConfigError> for GeomError {
    fn from(err: ConfigError) -> Self { GeomError::InvalidParameter(err.to_string()) }
}
