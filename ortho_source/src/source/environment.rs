//! Environment variables as a flat configuration map.

use std::collections::BTreeMap;

use crate::{ConfigResult, Node};

use super::PropertySource;

const LABEL: &str = "envars";

/// Read access to a set of environment variables.
///
/// This allows testing without modifying the actual environment.
pub trait EnvReader: Send + Sync {
    /// Every variable as a name/value pair.
    fn vars(&self) -> Vec<(String, String)>;
}

/// Reads the current process environment.
///
/// Names and values that are not valid Unicode are decoded lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvReader for ProcessEnv {
    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .map(|(name, value)| {
                (
                    name.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }
}

/// Fixed environment, independent of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticEnv(BTreeMap<String, String>);

impl StaticEnv {
    /// Create an empty environment.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add a variable, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl EnvReader for StaticEnv {
    fn vars(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Exposes every environment variable as a flat map labelled `envars`.
///
/// Names and values are kept verbatim. An empty environment yields an empty
/// map, never [`Node::Undefined`], and reading never fails.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentVariablesPropertySource<E = ProcessEnv> {
    env: E,
}

impl EnvironmentVariablesPropertySource {
    /// Read from the process environment.
    #[must_use]
    pub const fn new() -> Self {
        Self { env: ProcessEnv }
    }
}

impl<E: EnvReader> EnvironmentVariablesPropertySource<E> {
    /// Read from `env` instead of the process environment.
    #[must_use]
    pub const fn with_env(env: E) -> Self {
        Self { env }
    }
}

impl<E: EnvReader> PropertySource for EnvironmentVariablesPropertySource<E> {
    fn node(&self) -> ConfigResult<Node> {
        let vars = self.env.vars();
        tracing::debug!(count = vars.len(), "read environment variables");
        ConfigResult::valid(Node::flat_map(LABEL, vars))
    }
}
