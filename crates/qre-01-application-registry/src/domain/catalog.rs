//! # Catalog Data
//!
//! The fixed reference catalog. Entries in `APPLICATION_DOMAINS` follow
//! `DomainKind::ALL` order.

use super::entities::{AlgorithmicPrimitive, ApplicationDomain};
use super::value_objects::DomainKind;

/// Reference application domains.
pub static APPLICATION_DOMAINS: [ApplicationDomain; 4] = [
    ApplicationDomain {
        kind: DomainKind::FermiHubbard,
        id: "fermi-hubbard",
        name: "Fermi-Hubbard Model",
        description: "Quantum simulation of electronic materials and superconductors",
        primitives: &[
            "Quantum Phase Estimation",
            "Qubitization",
            "Block Encoding",
            "State Preparation",
        ],
        complexity_class: "O(N log N / ε)",
        classical_challenge: "Exponential scaling for 2D systems",
    },
    ApplicationDomain {
        kind: DomainKind::QuantumChemistry,
        id: "quantum-chemistry",
        name: "Quantum Chemistry",
        description: "Molecular ground state energy calculation",
        primitives: &[
            "Hamiltonian Simulation",
            "Variational Quantum Eigensolver",
            "Amplitude Amplification",
        ],
        complexity_class: "O(N^3 / ε)",
        classical_challenge: "Exponential scaling with system size",
    },
    ApplicationDomain {
        kind: DomainKind::Optimization,
        id: "optimization",
        name: "Quantum Optimization",
        description: "Solving combinatorial optimization problems",
        primitives: &[
            "Grover's Algorithm",
            "Quantum Approximate Optimization",
            "Amplitude Amplification",
        ],
        complexity_class: "O(√N)",
        classical_challenge: "NP-hard problems",
    },
    ApplicationDomain {
        kind: DomainKind::MachineLearning,
        id: "machine-learning",
        name: "Quantum Machine Learning",
        description: "Quantum-enhanced learning algorithms",
        primitives: &[
            "Quantum Linear Algebra",
            "Quantum Principal Component Analysis",
            "Quantum Support Vector Machines",
        ],
        complexity_class: "O(log N)",
        classical_challenge: "Feature space dimensionality",
    },
];

/// Reference algorithmic primitives.
pub static ALGORITHMIC_PRIMITIVES: [AlgorithmicPrimitive; 6] = [
    AlgorithmicPrimitive {
        name: "Quantum Phase Estimation",
        description: "Estimates eigenvalues of unitary operators with high precision",
        complexity: "O(1/ε)",
    },
    AlgorithmicPrimitive {
        name: "Hamiltonian Simulation",
        description: "Simulates time evolution under quantum Hamiltonians",
        complexity: "O(t²/ε)",
    },
    AlgorithmicPrimitive {
        name: "Amplitude Amplification",
        description: "Generalizes Grover's algorithm for amplitude enhancement",
        complexity: "O(√N)",
    },
    AlgorithmicPrimitive {
        name: "Quantum Linear Algebra",
        description: "Solves linear systems and performs matrix operations",
        complexity: "O(log N)",
    },
    AlgorithmicPrimitive {
        name: "Block Encoding",
        description: "Encodes matrices into quantum circuits efficiently",
        complexity: "O(||A||)",
    },
    AlgorithmicPrimitive {
        name: "Qubitization",
        description: "Implements Hamiltonian evolution with optimal scaling",
        complexity: "O(||H||)",
    },
];
