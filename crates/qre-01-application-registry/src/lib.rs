//! # QRE-01 Application Registry
//!
//! Static catalog of the application domains the resource estimator knows
//! how to scale, plus the algorithmic primitives those domains are built from.
//!
//! **Subsystem ID:** 1  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Module Structure
//!
//! ```text
//! qre-01-application-registry/
//! ├── domain/          # DomainKind, ApplicationDomain, AlgorithmicPrimitive, catalog data
//! ├── ports/           # ApplicationRegistryApi
//! └── service/         # StaticRegistry
//! ```
//!
//! ## Invariants
//!
//! - The catalog is fixed at compile time; there is no runtime registration.
//! - Every `DomainKind` variant has exactly one catalog entry, in declaration order.
//! - Domain ids are unique.
//!
//! ## Usage
//!
//! ```rust
//! use qre_01_application_registry::{ApplicationRegistryApi, StaticRegistry};
//!
//! let registry = StaticRegistry::new();
//! let domain = registry.get_domain("quantum-chemistry").unwrap();
//! assert_eq!(domain.complexity_class, "O(N^3 / ε)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    AlgorithmicPrimitive, ApplicationDomain, DomainKind, RegistryError, DEFAULT_DOMAIN,
};
pub use ports::ApplicationRegistryApi;
pub use service::StaticRegistry;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
