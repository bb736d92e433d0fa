//! Caller-held estimation state
//!
//! Owns the `(domain, parameters, report)` triple a presentation layer
//! displays. The estimator itself stays stateless; this type only decides
//! when to call it again.

use qre_01_application_registry::DEFAULT_DOMAIN;
use tracing::debug;

use crate::domain::{ParameterSet, ResourceReport};
use crate::error::EstimationError;
use crate::ports::ResourceEstimatorApi;

/// Current selection plus the report computed from it.
///
/// The three fields are always mutually consistent: a failed update leaves
/// the previous triple untouched.
pub struct EstimationSession<E: ResourceEstimatorApi> {
    estimator: E,
    domain_id: String,
    parameters: ParameterSet,
    report: ResourceReport,
}

impl<E: ResourceEstimatorApi> EstimationSession<E> {
    /// Start on the default domain with default parameters.
    pub fn new(estimator: E) -> Result<Self, EstimationError> {
        Self::with_selection(estimator, DEFAULT_DOMAIN.id(), ParameterSet::default())
    }

    /// Start on an explicit selection.
    pub fn with_selection(
        estimator: E,
        domain_id: &str,
        parameters: ParameterSet,
    ) -> Result<Self, EstimationError> {
        let report = estimator.estimate(domain_id, &parameters)?;
        Ok(Self {
            estimator,
            domain_id: domain_id.to_string(),
            parameters,
            report,
        })
    }

    /// Selected domain id.
    pub fn domain_id(&self) -> &str {
        &self.domain_id
    }

    /// Current parameters.
    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// Report for the current selection.
    pub fn report(&self) -> &ResourceReport {
        &self.report
    }

    /// Switch domain. Returns `true` if a new report was computed.
    pub fn select_domain(&mut self, domain_id: &str) -> Result<bool, EstimationError> {
        if domain_id == self.domain_id {
            return Ok(false);
        }
        self.report = self.estimator.estimate(domain_id, &self.parameters)?;
        self.domain_id = domain_id.to_string();
        debug!("[qre-02] Session switched to {}", domain_id);
        Ok(true)
    }

    /// Replace parameters. Returns `true` if a new report was computed.
    pub fn update_parameters(&mut self, parameters: ParameterSet) -> Result<bool, EstimationError> {
        if parameters == self.parameters {
            return Ok(false);
        }
        self.report = self.estimator.estimate(&self.domain_id, &parameters)?;
        self.parameters = parameters;
        Ok(true)
    }

    /// Recompute the report for the current selection.
    pub fn recalculate(&mut self) -> Result<&ResourceReport, EstimationError> {
        self.report = self.estimator.estimate(&self.domain_id, &self.parameters)?;
        Ok(&self.report)
    }
}
