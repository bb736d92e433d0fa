//! # Quantum Resource Estimator Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/  # Cross-crate flows: registry → estimator → display, logging
//! └── benches/          # Criterion benchmarks per domain
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qre-tests
//!
//! # Benchmarks
//! cargo bench -p qre-tests
//! ```
