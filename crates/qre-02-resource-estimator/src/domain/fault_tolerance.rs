//! Stage 2: surface-code fault-tolerance projection
//!
//! Identical for every domain:
//!
//! - d = max(d_min, ceil(ln(p_L) / ln(p_phys)))
//! - physical qubits = tile · Q · d²
//! - runtime = G · d · t_cycle
//! - overhead = d²

use super::config::FaultToleranceConfig;
use super::scaling::ScalingEstimate;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Unrounded stage-2 output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaultTolerantProjection {
    /// Surface-code distance
    pub code_distance: u64,
    /// Physical qubits after encoding
    pub physical_qubits: f64,
    /// Wall-clock runtime in seconds
    pub runtime_seconds: f64,
    /// Per-logical-qubit multiplier d²
    pub overhead: f64,
}

impl FaultTolerantProjection {
    /// Runtime in hours.
    pub fn runtime_hours(&self) -> f64 {
        self.runtime_seconds / SECONDS_PER_HOUR
    }
}

/// Code distance needed to reach the configured logical error rate.
///
/// `physical_error_rate` must be in (0, 1). Non-decreasing in both the
/// physical error rate and the strictness of the target.
///
/// The ratio stays below about 2.1e17 for every `f64` under 1, so the
/// ceiling is exact in a `u64`.
pub fn surface_code_distance(physical_error_rate: f64, config: &FaultToleranceConfig) -> u64 {
    let required = (config.target_logical_error_rate.ln() / physical_error_rate.ln()).ceil();
    (required as u64).max(config.min_code_distance)
}

/// Project a logical estimate onto surface-code hardware.
pub fn project(
    logical: &ScalingEstimate,
    physical_error_rate: f64,
    config: &FaultToleranceConfig,
) -> FaultTolerantProjection {
    let code_distance = surface_code_distance(physical_error_rate, config);
    let d = code_distance as f64;
    let overhead = d.powi(2);

    FaultTolerantProjection {
        code_distance,
        physical_qubits: config.tile_factor * logical.logical_qubits * overhead,
        runtime_seconds: logical.logical_gates * d * config.syndrome_cycle_time_secs,
        overhead,
    }
}
