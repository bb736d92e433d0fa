//! Estimation parameter set
//!
//! Caller-constructed per estimation. Validation happens before any formula
//! is evaluated so logarithms never see a non-positive argument.

use crate::error::EstimationError;
use serde::{Deserialize, Serialize};

/// Inputs to a single estimation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSet {
    /// Problem-size proxy N (> 1)
    pub system_size: f64,
    /// Target solution precision ε, in (0, 1]
    pub precision: f64,
    /// Per-gate physical error probability, in (0, 1)
    pub physical_error_rate: f64,
    /// Lattice hopping amplitude (fermi-hubbard only, ≥ 0)
    pub hopping_parameter: f64,
    /// On-site interaction strength (fermi-hubbard only, ≥ 0)
    pub interaction_strength: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            system_size: 800.0,
            precision: 0.0001,
            physical_error_rate: 0.001,
            hopping_parameter: 1.0,
            interaction_strength: 8.0,
        }
    }
}

impl ParameterSet {
    /// Create a parameter set with validation
    pub fn new(
        system_size: f64,
        precision: f64,
        physical_error_rate: f64,
        hopping_parameter: f64,
        interaction_strength: f64,
    ) -> Result<Self, EstimationError> {
        let params = Self {
            system_size,
            precision,
            physical_error_rate,
            hopping_parameter,
            interaction_strength,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every field against its invariant.
    ///
    /// NaN fails every check, so comparisons are written to reject it.
    pub fn validate(&self) -> Result<(), EstimationError> {
        if !(self.system_size.is_finite() && self.system_size > 1.0) {
            return Err(EstimationError::InvalidParameter {
                parameter: "systemSize",
                value: self.system_size,
                constraint: "finite and greater than 1",
            });
        }

        if !(self.precision > 0.0 && self.precision <= 1.0) {
            return Err(EstimationError::InvalidParameter {
                parameter: "precision",
                value: self.precision,
                constraint: "in (0, 1]",
            });
        }

        if !(self.physical_error_rate > 0.0 && self.physical_error_rate < 1.0) {
            return Err(EstimationError::InvalidParameter {
                parameter: "physicalErrorRate",
                value: self.physical_error_rate,
                constraint: "in (0, 1)",
            });
        }

        if !(self.hopping_parameter.is_finite() && self.hopping_parameter >= 0.0) {
            return Err(EstimationError::InvalidParameter {
                parameter: "hoppingParameter",
                value: self.hopping_parameter,
                constraint: "finite and non-negative",
            });
        }

        if !(self.interaction_strength.is_finite() && self.interaction_strength >= 0.0) {
            return Err(EstimationError::InvalidParameter {
                parameter: "interactionStrength",
                value: self.interaction_strength,
                constraint: "finite and non-negative",
            });
        }

        Ok(())
    }

    /// Builder-style method to set the system size
    pub fn with_system_size(mut self, n: f64) -> Self {
        self.system_size = n;
        self
    }

    /// Builder-style method to set the precision
    pub fn with_precision(mut self, epsilon: f64) -> Self {
        self.precision = epsilon;
        self
    }

    /// Builder-style method to set the physical error rate
    pub fn with_physical_error_rate(mut self, p: f64) -> Self {
        self.physical_error_rate = p;
        self
    }

    /// Builder-style method to set the hopping parameter
    pub fn with_hopping_parameter(mut self, t: f64) -> Self {
        self.hopping_parameter = t;
        self
    }

    /// Builder-style method to set the interaction strength
    pub fn with_interaction_strength(mut self, u: f64) -> Self {
        self.interaction_strength = u;
        self
    }
}
