//! Test helpers shared across crates in the workspace.
//!
//! * `env` serialises and reverts environment mutations.
//! * `figment` runs closures inside a `figment::Jail` sandbox.

pub mod env;
pub mod figment;
