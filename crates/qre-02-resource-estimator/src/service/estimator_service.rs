//! Resource Estimator Service
//!
//! Implements `ResourceEstimatorApi` on top of an injected registry.

use std::sync::Arc;

use qre_01_application_registry::{ApplicationRegistryApi, DomainKind, StaticRegistry};
use tracing::{debug, warn};

use crate::domain::{
    formula_for, project, FaultToleranceConfig, FaultTolerantProjection, ParameterSet,
    ResourceReport, ScalingEstimate, ScalingFormula,
};
use crate::error::EstimationError;
use crate::ports::ResourceEstimatorApi;

/// Stateless resource estimator.
///
/// Cloning is cheap; clones share the registry and carry their own copy of
/// the configuration.
pub struct ResourceEstimator<R: ApplicationRegistryApi> {
    /// Domain catalog (driven dependency)
    registry: Arc<R>,
    /// Stage-2 constants
    config: FaultToleranceConfig,
}

impl<R: ApplicationRegistryApi> Clone for ResourceEstimator<R> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            config: self.config.clone(),
        }
    }
}

impl Default for ResourceEstimator<StaticRegistry> {
    fn default() -> Self {
        Self::new(Arc::new(StaticRegistry::new()))
    }
}

impl<R: ApplicationRegistryApi> ResourceEstimator<R> {
    /// Create an estimator with the reference configuration
    pub fn new(registry: Arc<R>) -> Self {
        Self {
            registry,
            config: FaultToleranceConfig::default(),
        }
    }

    /// Create with a custom configuration, validated up front
    pub fn with_config(
        registry: Arc<R>,
        config: FaultToleranceConfig,
    ) -> Result<Self, EstimationError> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    /// Registry this estimator resolves domain ids against
    pub fn registry(&self) -> &R {
        &self.registry
    }

    fn run(
        &self,
        formula: &dyn ScalingFormula,
        params: &ParameterSet,
    ) -> Result<ResourceReport, EstimationError> {
        if let Err(err) = params.validate() {
            warn!("[qre-02] Rejected parameters for {}: {}", formula.name(), err);
            return Err(err);
        }

        let logical = formula.evaluate(params);
        if let Err(err) = check_logical_estimate(&logical) {
            warn!("[qre-02] {} overflowed: {}", formula.name(), err);
            return Err(err);
        }

        let projection = project(&logical, params.physical_error_rate, &self.config);
        if let Err(err) = check_projection(&projection) {
            warn!("[qre-02] {} projection overflowed: {}", formula.name(), err);
            return Err(err);
        }

        let report = ResourceReport::from_stages(&logical, &projection);

        debug!(
            formula = formula.name(),
            system_size = params.system_size,
            code_distance = report.surface_code_distance,
            logical_qubits = report.logical_qubits,
            physical_qubits = report.physical_qubits,
            runtime_hours = report.runtime_hours,
            "[qre-02] Estimate complete"
        );

        Ok(report)
    }
}

/// Reject stage-1 output that would poison stage 2.
fn check_logical_estimate(logical: &ScalingEstimate) -> Result<(), EstimationError> {
    check_quantities([
        ("alpha", logical.alpha),
        ("logicalGates", logical.logical_gates),
        ("logicalQubits", logical.logical_qubits),
    ])
}

/// Reject stage-2 output that left the `f64` range.
fn check_projection(projection: &FaultTolerantProjection) -> Result<(), EstimationError> {
    check_quantities([
        ("physicalQubits", projection.physical_qubits),
        ("runtimeSeconds", projection.runtime_seconds),
        ("faultTolerantOverhead", projection.overhead),
    ])
}

fn check_quantities<const N: usize>(
    quantities: [(&'static str, f64); N],
) -> Result<(), EstimationError> {
    for (quantity, value) in quantities {
        if !(value.is_finite() && value >= 0.0) {
            return Err(EstimationError::DegenerateEstimate { quantity, value });
        }
    }
    Ok(())
}

impl<R: ApplicationRegistryApi> ResourceEstimatorApi for ResourceEstimator<R> {
    fn estimate(
        &self,
        domain_id: &str,
        params: &ParameterSet,
    ) -> Result<ResourceReport, EstimationError> {
        let domain = self.registry.get_domain(domain_id)?;
        self.estimate_kind(domain.kind, params)
    }

    fn estimate_kind(
        &self,
        kind: DomainKind,
        params: &ParameterSet,
    ) -> Result<ResourceReport, EstimationError> {
        self.run(formula_for(kind), params)
    }

    fn estimate_with_formula(
        &self,
        formula: &dyn ScalingFormula,
        params: &ParameterSet,
    ) -> Result<ResourceReport, EstimationError> {
        self.run(formula, params)
    }

    fn config(&self) -> &FaultToleranceConfig {
        &self.config
    }
}
