//! # QRE-02 Resource Estimator
//!
//! Maps an application domain and a parameter set to the physical resources
//! a fault-tolerant quantum computer needs to run it.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure estimation logic, no I/O
//!   - `ParameterSet`: Validated inputs
//!   - `ScalingFormula`: Stage 1, one implementation per domain
//!   - `project`: Stage 2, surface-code projection
//!   - `FaultToleranceConfig`: Stage-2 constants and hardware profiles
//!   - `ResourceReport`: Output
//!   - `format_compact`: Display helper
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `ResourceEstimatorApi`: Driving port (inbound API)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `ResourceEstimator`: Implements `ResourceEstimatorApi` over a registry
//!   - `EstimationSession`: Caller-held `(domain, parameters, report)` state
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: `surface_code_distance >= min_code_distance` (3 by default)
//! - **INVARIANT-2**: `physical_qubits == round(tile · Q · d²)`
//! - **INVARIANT-3**: `fault_tolerant_overhead == d²`
//! - **INVARIANT-4**: identical inputs give bit-identical reports
//!
//! ## Usage Example
//!
//! ```
//! use qre_02_resource_estimator::{estimate, format_compact, ParameterSet};
//!
//! let report = estimate("quantum-chemistry", &ParameterSet::default())?;
//! assert_eq!(report.logical_qubits, 800);
//! assert_eq!(format_compact(report.physical_qubits as f64), "51.2K");
//! # Ok::<(), qre_02_resource_estimator::EstimationError>(())
//! ```

#![warn(clippy::all)]

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    format_compact, FaultToleranceConfig, FaultToleranceConfigBuilder, GenericScaling,
    HardwareProfile, ParameterSet, ResourceReport, ScalingEstimate, ScalingFormula,
};
pub use error::EstimationError;
pub use ports::ResourceEstimatorApi;
pub use service::{EstimationSession, ResourceEstimator};

use qre_01_application_registry::StaticRegistry;

/// Estimate resources against the reference catalog and configuration.
pub fn estimate(domain_id: &str, params: &ParameterSet) -> Result<ResourceReport, EstimationError> {
    ResourceEstimator::<StaticRegistry>::default().estimate(domain_id, params)
}
