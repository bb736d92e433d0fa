//! Resource report
//!
//! Created fresh by every estimation and never updated in place.

use serde::{Deserialize, Serialize};

use super::fault_tolerance::{FaultTolerantProjection, SECONDS_PER_HOUR};
use super::scaling::ScalingEstimate;

/// End-to-end resource estimate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceReport {
    /// Logical gate operations, rounded
    pub logical_gates: u64,
    /// Error-corrected logical qubits, rounded
    pub logical_qubits: u64,
    /// Physical qubits after encoding, rounded
    pub physical_qubits: u64,
    /// Surface-code distance (≥ the configured minimum)
    pub surface_code_distance: u64,
    /// Wall-clock runtime in hours
    pub runtime_hours: f64,
    /// Per-logical-qubit multiplier d²
    pub fault_tolerant_overhead: f64,
    /// Block-encoding scale parameter
    pub alpha: f64,
}

/// Round half-to-even into an unsigned count. Saturates on overflow.
fn round_count(value: f64) -> u64 {
    value.round_ties_even() as u64
}

impl ResourceReport {
    /// Assemble a report from the two estimation stages.
    pub fn from_stages(logical: &ScalingEstimate, projection: &FaultTolerantProjection) -> Self {
        Self {
            logical_gates: round_count(logical.logical_gates),
            logical_qubits: round_count(logical.logical_qubits),
            physical_qubits: round_count(projection.physical_qubits),
            surface_code_distance: projection.code_distance,
            runtime_hours: projection.runtime_hours(),
            fault_tolerant_overhead: projection.overhead,
            alpha: logical.alpha,
        }
    }

    /// Total runtime in seconds.
    pub fn total_runtime_seconds(&self) -> f64 {
        self.runtime_hours * SECONDS_PER_HOUR
    }

    /// Physical qubits per logical qubit, or `None` with no logical qubits.
    pub fn physical_to_logical_ratio(&self) -> Option<f64> {
        if self.logical_qubits == 0 {
            return None;
        }
        Some(self.physical_qubits as f64 / self.logical_qubits as f64)
    }

    /// Logical gate throughput, or `None` for a zero-length run.
    pub fn gates_per_hour(&self) -> Option<f64> {
        if self.runtime_hours <= 0.0 {
            return None;
        }
        Some(self.logical_gates as f64 / self.runtime_hours)
    }

    /// Physical syndrome cycles per logical operation (= d).
    pub fn time_overhead(&self) -> u64 {
        self.surface_code_distance
    }
}
