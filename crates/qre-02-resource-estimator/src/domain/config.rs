//! Fault-tolerance configuration and hardware profiles
//!
//! The surface-code model has four tunable constants. Defaults reproduce the
//! reference superconducting profile exactly.
//!
//! # Example
//!
//! ```
//! use qre_02_resource_estimator::domain::{FaultToleranceConfigBuilder, HardwareProfile};
//!
//! let config = FaultToleranceConfigBuilder::new()
//!     .hardware(HardwareProfile::TrappedIon)
//!     .target_logical_error_rate(1e-12)
//!     .build()
//!     .expect("valid config");
//! assert_eq!(config.syndrome_cycle_time_secs, 1e-4);
//! ```

use crate::error::EstimationError;
use serde::{Deserialize, Serialize};
use std::env;

/// Default target logical error rate per operation.
pub const DEFAULT_TARGET_LOGICAL_ERROR_RATE: f64 = 1e-10;

/// Syndrome extraction cycle on superconducting hardware (1 µs).
pub const SUPERCONDUCTING_CYCLE_SECS: f64 = 1e-6;

/// Syndrome extraction cycle on trapped-ion hardware (100 µs).
pub const TRAPPED_ION_CYCLE_SECS: f64 = 1e-4;

/// Physical qubits per d² patch in the surface-code tile layout.
pub const DEFAULT_TILE_FACTOR: f64 = 4.0;

/// Smallest code distance ever reported.
pub const DEFAULT_MIN_CODE_DISTANCE: u64 = 3;

/// Qubit technology, which fixes the syndrome cycle time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HardwareProfile {
    /// Superconducting qubits, ~1 µs syndrome extraction.
    #[default]
    Superconducting,
    /// Trapped ions, slower gates.
    TrappedIon,
    /// Arbitrary cycle time in seconds.
    Custom { syndrome_cycle_time_secs: f64 },
}

impl HardwareProfile {
    /// Syndrome extraction cycle time in seconds.
    pub fn syndrome_cycle_time_secs(&self) -> f64 {
        match self {
            HardwareProfile::Superconducting => SUPERCONDUCTING_CYCLE_SECS,
            HardwareProfile::TrappedIon => TRAPPED_ION_CYCLE_SECS,
            HardwareProfile::Custom {
                syndrome_cycle_time_secs,
            } => *syndrome_cycle_time_secs,
        }
    }
}

/// Surface-code projection constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaultToleranceConfig {
    /// Target logical error rate, in (0, 1)
    pub target_logical_error_rate: f64,
    /// Seconds per syndrome extraction cycle
    pub syndrome_cycle_time_secs: f64,
    /// Physical qubits per logical qubit per d²
    pub tile_factor: f64,
    /// Lower bound on the code distance
    pub min_code_distance: u64,
}

impl Default for FaultToleranceConfig {
    fn default() -> Self {
        Self {
            target_logical_error_rate: DEFAULT_TARGET_LOGICAL_ERROR_RATE,
            syndrome_cycle_time_secs: SUPERCONDUCTING_CYCLE_SECS,
            tile_factor: DEFAULT_TILE_FACTOR,
            min_code_distance: DEFAULT_MIN_CODE_DISTANCE,
        }
    }
}

impl FaultToleranceConfig {
    /// Default constants with the cycle time of the given hardware.
    pub fn for_hardware(profile: HardwareProfile) -> Self {
        Self {
            syndrome_cycle_time_secs: profile.syndrome_cycle_time_secs(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), EstimationError> {
        let target = self.target_logical_error_rate;
        if !(target > 0.0 && target < 1.0) {
            return Err(EstimationError::InvalidConfig(format!(
                "target_logical_error_rate must be in (0, 1), got {}",
                target
            )));
        }

        let cycle = self.syndrome_cycle_time_secs;
        if !(cycle.is_finite() && cycle > 0.0) {
            return Err(EstimationError::InvalidConfig(format!(
                "syndrome_cycle_time_secs must be positive and finite, got {}",
                cycle
            )));
        }

        if !(self.tile_factor.is_finite() && self.tile_factor > 0.0) {
            return Err(EstimationError::InvalidConfig(format!(
                "tile_factor must be positive and finite, got {}",
                self.tile_factor
            )));
        }

        if self.min_code_distance == 0 {
            return Err(EstimationError::InvalidConfig(
                "min_code_distance cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Load from environment variables, falling back to defaults.
    ///
    /// - `QRE_TARGET_LOGICAL_ERROR_RATE`
    /// - `QRE_SYNDROME_CYCLE_SECS`
    /// - `QRE_TILE_FACTOR`
    /// - `QRE_MIN_CODE_DISTANCE`
    ///
    /// Unparsable values are ignored. The result is not validated.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading through an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parse_f64 = |key: &str, fallback: f64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .unwrap_or(fallback)
        };

        Self {
            target_logical_error_rate: parse_f64(
                "QRE_TARGET_LOGICAL_ERROR_RATE",
                defaults.target_logical_error_rate,
            ),
            syndrome_cycle_time_secs: parse_f64(
                "QRE_SYNDROME_CYCLE_SECS",
                defaults.syndrome_cycle_time_secs,
            ),
            tile_factor: parse_f64("QRE_TILE_FACTOR", defaults.tile_factor),
            min_code_distance: lookup("QRE_MIN_CODE_DISTANCE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.min_code_distance),
        }
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, EstimationError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EstimationError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder for FaultToleranceConfig with validation
#[derive(Default)]
pub struct FaultToleranceConfigBuilder {
    target_logical_error_rate: Option<f64>,
    syndrome_cycle_time_secs: Option<f64>,
    tile_factor: Option<f64>,
    min_code_distance: Option<u64>,
}

impl FaultToleranceConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target logical error rate
    pub fn target_logical_error_rate(mut self, rate: f64) -> Self {
        self.target_logical_error_rate = Some(rate);
        self
    }

    /// Set the syndrome cycle time directly
    pub fn syndrome_cycle_time_secs(mut self, secs: f64) -> Self {
        self.syndrome_cycle_time_secs = Some(secs);
        self
    }

    /// Take the syndrome cycle time from a hardware profile
    pub fn hardware(mut self, profile: HardwareProfile) -> Self {
        self.syndrome_cycle_time_secs = Some(profile.syndrome_cycle_time_secs());
        self
    }

    /// Set the tile factor
    pub fn tile_factor(mut self, factor: f64) -> Self {
        self.tile_factor = Some(factor);
        self
    }

    /// Set the minimum code distance
    pub fn min_code_distance(mut self, distance: u64) -> Self {
        self.min_code_distance = Some(distance);
        self
    }

    /// Build the config, validating all fields
    pub fn build(self) -> Result<FaultToleranceConfig, EstimationError> {
        let defaults = FaultToleranceConfig::default();

        let config = FaultToleranceConfig {
            target_logical_error_rate: self
                .target_logical_error_rate
                .unwrap_or(defaults.target_logical_error_rate),
            syndrome_cycle_time_secs: self
                .syndrome_cycle_time_secs
                .unwrap_or(defaults.syndrome_cycle_time_secs),
            tile_factor: self.tile_factor.unwrap_or(defaults.tile_factor),
            min_code_distance: self.min_code_distance.unwrap_or(defaults.min_code_distance),
        };

        config.validate()?;
        Ok(config)
    }
}
