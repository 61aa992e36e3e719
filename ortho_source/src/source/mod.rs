//! Property sources and the default precedence order.
//!
//! A [`PropertySource`] turns one configuration origin into a
//! [`ConfigResult<Node>`]. Sources hold only their construction parameters:
//! every call to [`PropertySource::node`] re-reads the origin and nothing is
//! cached, so callers that need a stable view must keep the returned node.

mod config_file;
mod environment;
mod system_properties;

use std::sync::Arc;

use crate::{ConfigResult, Node};

pub use config_file::ConfigFilePropertySource;
pub use environment::{EnvReader, EnvironmentVariablesPropertySource, ProcessEnv, StaticEnv};
pub use system_properties::{OVERRIDE_PREFIX, SystemPropertiesPropertySource};

/// Produces the configuration tree of one origin.
pub trait PropertySource: Send + Sync {
    /// Read the origin and normalise it into a node.
    ///
    /// [`Node::Undefined`] means the origin holds no data and should be
    /// skipped by the merger.
    fn node(&self) -> ConfigResult<Node>;
}

impl<S: PropertySource + ?Sized> PropertySource for Box<S> {
    fn node(&self) -> ConfigResult<Node> {
        (**self).node()
    }
}

impl<S: PropertySource + ?Sized> PropertySource for Arc<S> {
    fn node(&self) -> ConfigResult<Node> {
        (**self).node()
    }
}

/// Sources enabled without explicit configuration, in precedence order.
///
/// Later entries override earlier ones once merged. Only system property
/// overrides are enabled by default; environment variables are opt-in via
/// [`EnvironmentVariablesPropertySource`].
///
/// # Examples
///
/// ```
/// use ortho_source::default_property_sources;
///
/// assert_eq!(default_property_sources().len(), 1);
/// ```
#[must_use]
pub fn default_property_sources() -> Vec<Box<dyn PropertySource>> {
    vec![Box::new(SystemPropertiesPropertySource::new())]
}

/// Read every source in order, keeping each outcome for the merger.
///
/// A failing source does not stop the others from being read.
pub fn collect_nodes<S: PropertySource>(sources: &[S]) -> Vec<ConfigResult<Node>> {
    sources.iter().map(PropertySource::node).collect()
}
