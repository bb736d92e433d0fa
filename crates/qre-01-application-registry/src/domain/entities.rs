//! # Domain Entities
//!
//! Display metadata for application domains and algorithmic primitives.

use super::value_objects::DomainKind;
use serde::Serialize;

/// A supported application domain.
///
/// Immutable, registry-defined. Fields are display strings consumed by the
/// presentation layer; the estimator only looks at `kind`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDomain {
    /// Variant used by the estimator to select a formula.
    #[serde(skip)]
    pub kind: DomainKind,
    /// Unique short key, e.g. `fermi-hubbard`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Ordered names of the primitive algorithms this domain uses.
    pub primitives: &'static [&'static str],
    /// Asymptotic complexity expression.
    pub complexity_class: &'static str,
    /// Why classical computation struggles with this domain.
    pub classical_challenge: &'static str,
}

impl ApplicationDomain {
    /// Whether hopping/interaction parameters are meaningful for this domain.
    pub fn uses_lattice_parameters(&self) -> bool {
        self.kind.uses_lattice_parameters()
    }
}

/// A building-block quantum algorithm shared across applications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AlgorithmicPrimitive {
    /// Display name, e.g. "Qubitization".
    pub name: &'static str,
    /// What the primitive does.
    pub description: &'static str,
    /// Asymptotic cost expression.
    pub complexity: &'static str,
}
