//! # QRE Telemetry
//!
//! Logging bootstrap for applications that embed the estimator crates.
//! Library crates only emit `tracing` events; installing a subscriber is the
//! host's job, and this crate is how it does it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use qre_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! let _guard = init_logging(&config).expect("Failed to init logging");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QRE_SERVICE_NAME` | `quantum-resource-estimator` | Service name in logs |
//! | `QRE_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `QRE_JSON_LOGS` | `false` | Emit JSON lines |
//! | `QRE_CONSOLE_OUTPUT` | `true` | Write logs to stdout |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{init_logging, LoggingGuard};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("A global subscriber is already installed")]
    AlreadyInitialized,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Span tagged with the subsystem that owns it.
///
/// # Example
///
/// ```rust,ignore
/// use qre_telemetry::estimation_span;
///
/// let span = estimation_span!("estimate", "qre-02", domain = "optimization");
/// let _entered = span.enter();
/// ```
#[macro_export]
macro_rules! estimation_span {
    ($name:expr, $subsystem:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name, subsystem = $subsystem $(, $($field)*)?)
    };
}
