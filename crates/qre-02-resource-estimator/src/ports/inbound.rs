//! Inbound Ports (Driving Ports)
//!
//! The API a presentation layer uses to request estimates.

use qre_01_application_registry::DomainKind;

use crate::domain::{FaultToleranceConfig, ParameterSet, ResourceReport, ScalingFormula};
use crate::error::EstimationError;

/// Primary resource estimation API (Driving Port)
///
/// Every method is a pure function of its arguments and the estimator's
/// immutable configuration.
pub trait ResourceEstimatorApi: Send + Sync {
    /// Estimate resources for a registered domain.
    ///
    /// Unknown ids fail with `DomainNotFound` before parameters are looked
    /// at; invalid parameters fail with `InvalidParameter` before any formula
    /// runs.
    fn estimate(
        &self,
        domain_id: &str,
        params: &ParameterSet,
    ) -> Result<ResourceReport, EstimationError>;

    /// Estimate resources for a domain kind (no registry lookup).
    fn estimate_kind(
        &self,
        kind: DomainKind,
        params: &ParameterSet,
    ) -> Result<ResourceReport, EstimationError>;

    /// Estimate resources with a caller-supplied stage-1 formula.
    fn estimate_with_formula(
        &self,
        formula: &dyn ScalingFormula,
        params: &ParameterSet,
    ) -> Result<ResourceReport, EstimationError>;

    /// Fault-tolerance constants used for stage 2.
    fn config(&self) -> &FaultToleranceConfig;
}
