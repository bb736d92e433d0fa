//! # Ports Module
//!
//! Inbound API for the Application Registry.

pub mod inbound;

pub use inbound::ApplicationRegistryApi;
