//! Source acquisition for the `OrthoConfig` family of configuration crates.
//!
//! Configuration arrives from unrelated origins: process-wide override
//! properties, environment variables and files in several formats. This crate
//! normalises each origin into a [`Node`] tree and reports failures as a
//! [`ConfigResult`], which accumulates errors from independent steps instead
//! of stopping at the first one.
//!
//! ```
//! use ortho_source::{
//!     ConfigFilePropertySource, EnvironmentVariablesPropertySource, PropertySource,
//!     StaticEnv, collect_nodes,
//! };
//!
//! let sources: Vec<Box<dyn PropertySource>> = vec![
//!     Box::new(EnvironmentVariablesPropertySource::with_env(
//!         StaticEnv::new().with("APP_PORT", "8080"),
//!     )),
//!     Box::new(ConfigFilePropertySource::inline("app.properties", "host=localhost")),
//! ];
//! let nodes = collect_nodes(&sources);
//! assert!(nodes.iter().all(|node| node.is_valid()));
//! ```
//!
//! Merging the resulting nodes is left to the caller; [`NodeProvider`] adapts
//! a node for use with `figment`.

mod error;
mod file_source;
mod node;
mod parser;
mod provider;
mod result;
mod source;
pub mod sysprops;

pub use error::{ConfigError, ConfigErrors};
pub use file_source::{FileSource, InlineFileSource, PathFileSource, RawInput};
pub use node::{ListNode, MapNode, Node, Provenance, Scalar, ScalarNode};
#[cfg(feature = "serde_json")]
pub use parser::JsonParser;
#[cfg(feature = "toml")]
pub use parser::TomlParser;
#[cfg(feature = "yaml")]
pub use parser::YamlParser;
pub use parser::{DefaultParserRegistry, Parser, ParserRegistry, PropertiesParser};
pub use provider::NodeProvider;
pub use result::{ConfigResult, ap};
pub use source::{
    ConfigFilePropertySource, EnvReader, EnvironmentVariablesPropertySource, OVERRIDE_PREFIX,
    ProcessEnv, PropertySource, StaticEnv, SystemPropertiesPropertySource, collect_nodes,
    default_property_sources,
};
