//! Ports Layer
//!
//! Trait definitions for the Resource Estimator.

pub mod inbound;

pub use inbound::ResourceEstimatorApi;
