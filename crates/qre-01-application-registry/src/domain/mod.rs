//! # Domain Module
//!
//! Core types for the Application Registry.
//!
//! RULES:
//! - No I/O operations
//! - Catalog data is `'static`

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use catalog::{APPLICATION_DOMAINS, ALGORITHMIC_PRIMITIVES};
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
