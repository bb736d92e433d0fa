//! Domain Layer - Pure estimation logic
//!
//! This layer contains:
//! - Parameter sets and their validation
//! - Fault-tolerance configuration and hardware profiles
//! - Per-domain scaling formulas (stage 1)
//! - Surface-code projection (stage 2)
//! - Resource reports and compact number formatting
//!
//! RULES:
//! - No I/O operations
//! - No shared mutable state
//! - Pure functions where possible

pub mod config;
pub mod fault_tolerance;
pub mod format;
pub mod parameters;
pub mod report;
pub mod scaling;

pub use config::{FaultToleranceConfig, FaultToleranceConfigBuilder, HardwareProfile};
pub use fault_tolerance::{project, surface_code_distance, FaultTolerantProjection};
pub use format::format_compact;
pub use parameters::ParameterSet;
pub use report::ResourceReport;
pub use scaling::{
    formula_for, FermiHubbardScaling, GenericScaling, MachineLearningScaling,
    OptimizationScaling, QuantumChemistryScaling, ScalingEstimate, ScalingFormula,
};
