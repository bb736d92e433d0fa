//! # Domain Value Objects
//!
//! The closed set of application domain kinds.

use super::errors::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Domain selected when a caller has not chosen one yet.
pub const DEFAULT_DOMAIN: DomainKind = DomainKind::FermiHubbard;

/// Supported application domains.
///
/// Adding a domain means adding a variant here, a catalog entry, and a
/// scaling formula in the estimator. Nothing else dispatches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DomainKind {
    /// Fermi-Hubbard lattice simulation.
    FermiHubbard,
    /// Molecular ground-state energy estimation.
    QuantumChemistry,
    /// Combinatorial optimization.
    Optimization,
    /// Quantum machine learning.
    MachineLearning,
}

impl DomainKind {
    /// All kinds, in catalog order.
    pub const ALL: [DomainKind; 4] = [
        DomainKind::FermiHubbard,
        DomainKind::QuantumChemistry,
        DomainKind::Optimization,
        DomainKind::MachineLearning,
    ];

    /// Short registry key.
    pub fn id(&self) -> &'static str {
        match self {
            DomainKind::FermiHubbard => "fermi-hubbard",
            DomainKind::QuantumChemistry => "quantum-chemistry",
            DomainKind::Optimization => "optimization",
            DomainKind::MachineLearning => "machine-learning",
        }
    }

    /// Whether the hopping/interaction parameters feed this domain's formula.
    pub fn uses_lattice_parameters(&self) -> bool {
        matches!(self, DomainKind::FermiHubbard)
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DomainKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| RegistryError::DomainNotFound(s.to_string()))
    }
}
