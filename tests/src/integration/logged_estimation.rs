//! # Logged Estimation Tests
//!
//! A host installs logging through `qre-telemetry`, then estimates inside a
//! subsystem span. Logging must not change any result.

#[cfg(test)]
mod tests {
    use qre_02_resource_estimator::{estimate, ParameterSet};
    use qre_telemetry::{estimation_span, init_logging, TelemetryConfig, TelemetryError};

    #[test]
    fn test_estimates_unchanged_under_logging() {
        let baseline = estimate("optimization", &ParameterSet::default()).unwrap();

        let config = TelemetryConfig::from_lookup(|key| match key {
            "QRE_LOG_LEVEL" => Some("debug".to_string()),
            "QRE_CONSOLE_OUTPUT" => Some("false".to_string()),
            _ => None,
        });
        assert_eq!(config.log_level, "debug");

        let guard = init_logging(&config);
        if let Err(err) = &guard {
            assert!(matches!(err, TelemetryError::AlreadyInitialized));
        }

        let span = estimation_span!("estimate", "qre-02", domain = "optimization");
        let logged = span.in_scope(|| estimate("optimization", &ParameterSet::default()).unwrap());
        assert_eq!(logged, baseline);

        // Rejections are logged, not panicked on.
        let bad = ParameterSet::default().with_system_size(0.5);
        assert!(span.in_scope(|| estimate("optimization", &bad)).is_err());
    }
}
