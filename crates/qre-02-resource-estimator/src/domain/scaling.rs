//! Stage 1: domain-specific logical scaling
//!
//! Each application domain maps `(N, ε, hopping, interaction)` to three raw
//! quantities:
//!
//! | domain | alpha | logical gates | logical qubits |
//! |---|---|---|---|
//! | fermi-hubbard | (2t + U/8)·N | α·5·N·log2(N)/ε | N + log2(N) |
//! | quantum-chemistry | 2N | N³/ε | N |
//! | optimization | √N | √N/ε | log2(N) |
//! | machine-learning | log2(N) | log2(N)·N/ε | log2(N) |
//! | generic | N | N/ε | N |
//!
//! Operation order inside each formula is fixed; changing it changes the
//! last bits of the result.

use qre_01_application_registry::DomainKind;

use super::parameters::ParameterSet;

/// Raw, unrounded stage-1 output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalingEstimate {
    /// Block-encoding scale parameter
    pub alpha: f64,
    /// Logical gate count
    pub logical_gates: f64,
    /// Logical qubit count
    pub logical_qubits: f64,
}

/// A closed-form logical resource model for one application domain.
///
/// Implementations must be pure: same parameters, same bits out.
pub trait ScalingFormula: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Evaluate on already-validated parameters.
    fn evaluate(&self, params: &ParameterSet) -> ScalingEstimate;
}

/// Qubitized phase estimation on a Fermi-Hubbard lattice.
#[derive(Clone, Copy, Debug, Default)]
pub struct FermiHubbardScaling;

impl ScalingFormula for FermiHubbardScaling {
    fn name(&self) -> &'static str {
        "fermi-hubbard"
    }

    fn evaluate(&self, params: &ParameterSet) -> ScalingEstimate {
        let n = params.system_size;
        let log_n = n.log2();
        let alpha = (2.0 * params.hopping_parameter + params.interaction_strength / 8.0) * n;

        ScalingEstimate {
            alpha,
            logical_gates: alpha * 5.0 * n * log_n / params.precision,
            logical_qubits: n + log_n,
        }
    }
}

/// Molecular Hamiltonian simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuantumChemistryScaling;

impl ScalingFormula for QuantumChemistryScaling {
    fn name(&self) -> &'static str {
        "quantum-chemistry"
    }

    fn evaluate(&self, params: &ParameterSet) -> ScalingEstimate {
        let n = params.system_size;
        ScalingEstimate {
            alpha: n * 2.0,
            logical_gates: n.powf(3.0) / params.precision,
            logical_qubits: n,
        }
    }
}

/// Grover-style search over N candidates.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptimizationScaling;

impl ScalingFormula for OptimizationScaling {
    fn name(&self) -> &'static str {
        "optimization"
    }

    fn evaluate(&self, params: &ParameterSet) -> ScalingEstimate {
        let n = params.system_size;
        ScalingEstimate {
            alpha: n.sqrt(),
            logical_gates: n.sqrt() / params.precision,
            logical_qubits: n.log2(),
        }
    }
}

/// Quantum linear algebra over an N-dimensional feature space.
#[derive(Clone, Copy, Debug, Default)]
pub struct MachineLearningScaling;

impl ScalingFormula for MachineLearningScaling {
    fn name(&self) -> &'static str {
        "machine-learning"
    }

    fn evaluate(&self, params: &ParameterSet) -> ScalingEstimate {
        let n = params.system_size;
        let log_n = n.log2();
        ScalingEstimate {
            alpha: log_n,
            logical_gates: log_n * n / params.precision,
            logical_qubits: log_n,
        }
    }
}

/// Linear model for workloads without a dedicated formula.
///
/// Not reachable through a domain id; callers opt in explicitly.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenericScaling;

impl ScalingFormula for GenericScaling {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn evaluate(&self, params: &ParameterSet) -> ScalingEstimate {
        let n = params.system_size;
        ScalingEstimate {
            alpha: n,
            logical_gates: n / params.precision,
            logical_qubits: n,
        }
    }
}

/// Formula registered for a domain kind.
pub fn formula_for(kind: DomainKind) -> &'static dyn ScalingFormula {
    match kind {
        DomainKind::FermiHubbard => &FermiHubbardScaling,
        DomainKind::QuantumChemistry => &QuantumChemistryScaling,
        DomainKind::Optimization => &OptimizationScaling,
        DomainKind::MachineLearning => &MachineLearningScaling,
    }
}
