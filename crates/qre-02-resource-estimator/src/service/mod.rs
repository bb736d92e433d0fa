//! Service Layer
//!
//! Orchestrates registry lookup, validation and the two estimation stages.

pub mod estimator_service;
pub mod session;

pub use estimator_service::ResourceEstimator;
pub use session::EstimationSession;
