//! Static registry service.

use tracing::debug;

use crate::domain::{
    AlgorithmicPrimitive, ApplicationDomain, RegistryError, ALGORITHMIC_PRIMITIVES,
    APPLICATION_DOMAINS,
};
use crate::ports::ApplicationRegistryApi;

/// Registry backed by the compiled-in reference catalog.
///
/// Zero-sized: construct as many as needed, they all see the same data.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticRegistry;

impl StaticRegistry {
    /// Create a registry over the reference catalog.
    pub fn new() -> Self {
        Self
    }
}

impl ApplicationRegistryApi for StaticRegistry {
    fn list_domains(&self) -> &[ApplicationDomain] {
        &APPLICATION_DOMAINS
    }

    fn get_domain(&self, id: &str) -> Result<&ApplicationDomain, RegistryError> {
        match APPLICATION_DOMAINS.iter().find(|d| d.id == id) {
            Some(domain) => {
                debug!("[qre-01] Resolved application domain {}", id);
                Ok(domain)
            }
            None => {
                debug!("[qre-01] Unknown application domain {}", id);
                Err(RegistryError::DomainNotFound(id.to_string()))
            }
        }
    }

    fn list_primitives(&self) -> &[AlgorithmicPrimitive] {
        &ALGORITHMIC_PRIMITIVES
    }
}
