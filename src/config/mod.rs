//! Configuration parsing and validation
//!
//! This module handles parsing of tasklane.yml configuration files,
//! validation of their structure and registration of the declared tasks.

pub mod extension;
pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use extension::*;
pub use parse::*;
pub use schema::*;
pub use types::*;
