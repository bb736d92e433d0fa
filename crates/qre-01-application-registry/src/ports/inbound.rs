//! # Inbound Ports
//!
//! API trait defining what the Application Registry can do.

use crate::domain::{AlgorithmicPrimitive, ApplicationDomain, RegistryError};

/// Application registry API - inbound port.
///
/// Implementations must be immutable after construction so callers can share
/// them across threads without locking.
pub trait ApplicationRegistryApi: Send + Sync {
    /// All registered domains, in catalog order.
    fn list_domains(&self) -> &[ApplicationDomain];

    /// Look up a domain by id.
    ///
    /// Fails with `RegistryError::DomainNotFound` for unknown ids.
    fn get_domain(&self, id: &str) -> Result<&ApplicationDomain, RegistryError>;

    /// All catalogued algorithmic primitives.
    fn list_primitives(&self) -> &[AlgorithmicPrimitive];

    /// Look up a primitive by display name.
    fn get_primitive(&self, name: &str) -> Option<&AlgorithmicPrimitive> {
        self.list_primitives().iter().find(|p| p.name == name)
    }

    /// Check whether an id resolves.
    fn contains(&self, id: &str) -> bool {
        self.get_domain(id).is_ok()
    }
}
