//! Error types produced while acquiring configuration sources.

mod aggregate;
mod types;

pub use aggregate::ConfigErrors;
pub use types::ConfigError;
