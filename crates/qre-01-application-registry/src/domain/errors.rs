//! # Domain Errors

use thiserror::Error;

/// Registry error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No application domain is registered under the given id.
    #[error("Application domain not found: {0}")]
    DomainNotFound(String),
}
