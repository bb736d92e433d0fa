//! # Service Layer
//!
//! Implements `ApplicationRegistryApi` over the static catalog.

pub mod registry_service;

pub use registry_service::StaticRegistry;
