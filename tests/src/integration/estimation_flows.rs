//! # Estimation Flow Tests
//!
//! The path a presentation layer takes:
//!
//! ```text
//! [Registry (1)] ──list/get──→ ApplicationDomain
//!        │
//!        ↓ id
//! [Estimator (2)] ──estimate──→ ResourceReport ──format_compact──→ display
//!        ↑
//! [EstimationSession] (caller-held state)
//! ```

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use qre_01_application_registry::{ApplicationRegistryApi, DomainKind, StaticRegistry};
    use qre_02_resource_estimator::{
        estimate, format_compact, EstimationError, EstimationSession, FaultToleranceConfig,
        GenericScaling, HardwareProfile, ParameterSet, ResourceEstimator, ResourceEstimatorApi,
    };

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn estimator() -> ResourceEstimator<StaticRegistry> {
        ResourceEstimator::new(Arc::new(StaticRegistry::new()))
    }

    fn params(n: f64, eps: f64, p: f64) -> ParameterSet {
        ParameterSet::default()
            .with_system_size(n)
            .with_precision(eps)
            .with_physical_error_rate(p)
    }

    // =========================================================================
    // HAPPY PATH
    // =========================================================================

    #[test]
    fn test_every_listed_domain_estimates() {
        let registry = StaticRegistry::new();
        let est = estimator();
        for domain in registry.list_domains() {
            let report = est.estimate(domain.id, &ParameterSet::default()).unwrap();
            assert!(report.surface_code_distance >= 3, "{}", domain.id);
            assert!(report.physical_qubits >= report.logical_qubits, "{}", domain.id);
            assert!(report.runtime_hours > 0.0, "{}", domain.id);
        }
    }

    #[test]
    fn test_scenario_a_quantum_chemistry() {
        let report = estimate("quantum-chemistry", &params(800.0, 0.0001, 0.001)).unwrap();
        assert_eq!(
            report.logical_gates,
            (800f64.powf(3.0) / 0.0001).round_ties_even() as u64
        );
        assert_eq!(report.logical_qubits, 800);
    }

    #[test]
    fn test_scenario_b_optimization() {
        let report = estimate("optimization", &params(800.0, 0.0001, 0.001)).unwrap();
        assert_eq!(report.alpha, 800f64.sqrt());
        assert_eq!(report.logical_qubits, 800f64.log2().round() as u64);
    }

    #[test]
    fn test_reference_report_for_default_fermi_hubbard() {
        let report = estimate("fermi-hubbard", &ParameterSet::default()).unwrap();
        let n = 800f64;
        let alpha = (2.0 * 1.0 + 8.0 / 8.0) * n;
        let gates = alpha * 5.0 * n * n.log2() / 0.0001;

        assert_eq!(report.alpha, alpha);
        assert_eq!(report.logical_gates, gates.round_ties_even() as u64);
        assert_eq!(report.surface_code_distance, 4);
        assert_eq!(report.fault_tolerant_overhead, 16.0);
        assert_eq!(report.runtime_hours, gates * 4.0 * 1e-6 / 3600.0);
    }

    #[test]
    fn test_physical_qubits_identity_for_integer_qubit_domains() {
        // Domains whose logical-qubit formula is already integral at N = 1024.
        for id in ["quantum-chemistry", "optimization", "machine-learning"] {
            let report = estimate(id, &params(1024.0, 0.001, 0.001)).unwrap();
            let d = report.surface_code_distance;
            assert_eq!(report.physical_qubits, 4 * report.logical_qubits * d * d, "{id}");
            assert_eq!(report.fault_tolerant_overhead, (d * d) as f64, "{id}");
        }
    }

    #[test]
    fn test_report_formats_for_display() {
        let report = estimate("quantum-chemistry", &ParameterSet::default()).unwrap();
        assert_eq!(format_compact(report.logical_qubits as f64), "800");
        assert_eq!(format_compact(report.physical_qubits as f64), "51.2K");
        assert_eq!(format_compact(report.fault_tolerant_overhead), "16");
        assert!(format_compact(report.logical_gates as f64).ends_with('B'));

        // Formatting never touches the report.
        let again = estimate("quantum-chemistry", &ParameterSet::default()).unwrap();
        assert_eq!(report, again);
    }

    #[test]
    fn test_derived_display_metrics() {
        let report = estimate("quantum-chemistry", &ParameterSet::default()).unwrap();
        assert_eq!(report.physical_to_logical_ratio(), Some(64.0));
        assert_eq!(report.time_overhead(), 4);
        let gph = report.gates_per_hour().unwrap();
        assert!((gph - 3600.0 / (4.0 * 1e-6)).abs() / gph < 1e-9);
    }

    // =========================================================================
    // ERROR PATHS
    // =========================================================================

    #[test]
    fn test_scenario_c_unknown_domain() {
        let err = estimate("topological-data-analysis", &ParameterSet::default()).unwrap_err();
        assert_eq!(
            err,
            EstimationError::DomainNotFound("topological-data-analysis".to_string())
        );
    }

    #[test]
    fn test_scenario_d_error_rate_bounds() {
        for p in [0.0, 1.0, 3.0, -0.5, f64::NAN] {
            let err = estimate("fermi-hubbard", &params(800.0, 0.0001, p)).unwrap_err();
            assert!(err.is_invalid_parameter(), "p = {p}");
        }
    }

    #[test]
    fn test_scenario_e_system_size_one() {
        for kind in DomainKind::ALL {
            let err = estimate(kind.id(), &params(1.0, 0.0001, 0.001)).unwrap_err();
            assert!(matches!(
                err,
                EstimationError::InvalidParameter {
                    parameter: "systemSize",
                    ..
                }
            ));
        }
    }

    // =========================================================================
    // CONFIGURATION
    // =========================================================================

    #[test]
    fn test_hardware_profile_changes_runtime_not_space() {
        let ion = ResourceEstimator::with_config(
            Arc::new(StaticRegistry::new()),
            FaultToleranceConfig::for_hardware(HardwareProfile::TrappedIon),
        )
        .unwrap();
        let p = ParameterSet::default();
        let sc = estimator().estimate("optimization", &p).unwrap();
        let ti = ion.estimate("optimization", &p).unwrap();
        assert_eq!(sc.physical_qubits, ti.physical_qubits);
        assert!(ti.runtime_hours > sc.runtime_hours);
    }

    #[test]
    fn test_stricter_target_increases_distance() {
        let strict = ResourceEstimator::with_config(
            Arc::new(StaticRegistry::new()),
            FaultToleranceConfig {
                target_logical_error_rate: 1e-15,
                ..Default::default()
            },
        )
        .unwrap();
        let p = ParameterSet::default();
        let loose = estimator().estimate("optimization", &p).unwrap();
        let tight = strict.estimate("optimization", &p).unwrap();
        assert!(tight.surface_code_distance > loose.surface_code_distance);
        assert!(tight.physical_qubits > loose.physical_qubits);
    }

    #[test]
    fn test_generic_fallback_is_opt_in() {
        let est = estimator();
        assert!(est.estimate("generic", &ParameterSet::default()).is_err());
        let report = est
            .estimate_with_formula(&GenericScaling, &ParameterSet::default())
            .unwrap();
        assert_eq!(report.logical_qubits, 800);
    }

    // =========================================================================
    // SESSION
    // =========================================================================

    #[test]
    fn test_session_follows_user_edits() {
        let mut session = EstimationSession::new(estimator()).unwrap();
        assert_eq!(session.domain_id(), "fermi-hubbard");

        assert!(session.select_domain("machine-learning").unwrap());
        let ml = *session.report();
        assert_eq!(ml.logical_qubits, 800f64.log2().round() as u64);

        let edited = session.parameters().with_physical_error_rate(0.0001);
        assert!(session.update_parameters(edited).unwrap());
        assert!(session.report().surface_code_distance <= ml.surface_code_distance);

        let rejected = session.parameters().with_precision(0.0);
        assert!(session.update_parameters(rejected).is_err());
        assert_eq!(session.parameters().physical_error_rate, 0.0001);
    }
}
