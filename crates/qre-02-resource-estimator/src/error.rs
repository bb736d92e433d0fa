//! Error types for the Resource Estimator subsystem

use qre_01_application_registry::RegistryError;
use thiserror::Error;

/// Errors that can occur while estimating resources
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimationError {
    #[error("Application domain not found: {0}")]
    DomainNotFound(String),

    #[error("Invalid parameter {parameter} = {value}: must be {constraint}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        constraint: &'static str,
    },

    #[error("Invalid fault-tolerance configuration: {0}")]
    InvalidConfig(String),

    #[error("Degenerate estimate: {quantity} = {value}")]
    DegenerateEstimate { quantity: &'static str, value: f64 },
}

impl EstimationError {
    /// True for unknown domain ids.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EstimationError::DomainNotFound(_))
    }

    /// True for parameter sets violating their invariants.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, EstimationError::InvalidParameter { .. })
    }
}

impl From<RegistryError> for EstimationError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::DomainNotFound(id) => EstimationError::DomainNotFound(id),
        }
    }
}
