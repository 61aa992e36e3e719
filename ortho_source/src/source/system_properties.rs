//! Override properties taken from the process-wide property table.

use crate::sysprops::{PropertyReader, SystemProperties};
use crate::{ConfigResult, Node};

use super::PropertySource;

/// Prefix selecting process-wide properties as configuration overrides.
///
/// Matching is exact and case-sensitive; the prefix is stripped verbatim.
pub const OVERRIDE_PREFIX: &str = "config.override.";

const LABEL: &str = "sysprops";

/// Exposes `config.override.*` properties as a flat map labelled `sysprops`.
///
/// When no property carries the prefix the source yields
/// [`Node::Undefined`] rather than an empty map. Reading never fails.
///
/// # Examples
///
/// ```
/// use ortho_source::{Node, PropertySource, SystemPropertiesPropertySource};
/// use ortho_source::sysprops::StaticProperties;
///
/// let props = StaticProperties::new().with("config.override.port", "8080");
/// let node = SystemPropertiesPropertySource::with_reader(props).node();
/// let node = node.ok().expect("system properties never fail");
/// assert_eq!(node.get("port").and_then(Node::as_str), Some("8080"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SystemPropertiesPropertySource<R = SystemProperties> {
    reader: R,
}

impl SystemPropertiesPropertySource {
    /// Read from the live process-wide property table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reader: SystemProperties,
        }
    }
}

impl<R: PropertyReader> SystemPropertiesPropertySource<R> {
    /// Read from `reader` instead of the process-wide table.
    #[must_use]
    pub const fn with_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: PropertyReader> PropertySource for SystemPropertiesPropertySource<R> {
    fn node(&self) -> ConfigResult<Node> {
        let overrides: Vec<(String, String)> = self
            .reader
            .properties()
            .into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(OVERRIDE_PREFIX)
                    .map(|stripped| (stripped.to_owned(), value))
            })
            .collect();
        if overrides.is_empty() {
            tracing::debug!("no system property overrides present");
            return ConfigResult::valid(Node::Undefined);
        }
        tracing::debug!(count = overrides.len(), "collected system property overrides");
        ConfigResult::valid(Node::flat_map(LABEL, overrides))
    }
}
