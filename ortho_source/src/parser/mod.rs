//! Parsers turning raw file content into [`Node`] trees, keyed by extension.
//!
//! The [`Parser`] and [`ParserRegistry`] traits are the seam between source
//! acquisition and format-specific syntax. [`DefaultParserRegistry`] ships
//! with the formats enabled through cargo features:
//!
//! | extension          | parser               | feature      |
//! |--------------------|----------------------|--------------|
//! | `properties`       | [`PropertiesParser`] | always       |
//! | `toml`             | `TomlParser`         | `toml`       |
//! | `json`             | `JsonParser`         | `serde_json` |
//! | `yaml`, `yml`      | `YamlParser`         | `yaml`       |

#[cfg(feature = "serde_json")]
mod json;
mod properties;
mod registry;
#[cfg(feature = "toml")]
mod toml;
#[cfg(feature = "yaml")]
mod yaml;

use std::io::Read;
use std::sync::Arc;

use crate::{ConfigError, ConfigResult, Node, RawInput};

#[cfg(feature = "serde_json")]
pub use json::JsonParser;
pub use properties::PropertiesParser;
pub use registry::DefaultParserRegistry;
#[cfg(feature = "toml")]
pub use toml::TomlParser;
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;

/// Turns raw configuration content into a [`Node`].
pub trait Parser: Send + Sync {
    /// Parse `input`, labelling the resulting nodes with `description`.
    ///
    /// Syntax errors are reported as [`ConfigError::Parse`].
    fn load(&self, input: RawInput, description: &str) -> ConfigResult<Node>;
}

/// Maps file extensions to [`Parser`]s.
pub trait ParserRegistry: Send + Sync {
    /// Find the parser registered for `extension`.
    ///
    /// Fails with [`ConfigError::NoParser`] when none is registered.
    fn locate(&self, extension: &str) -> ConfigResult<Arc<dyn Parser>>;
}

impl<R: ParserRegistry + ?Sized> ParserRegistry for Arc<R> {
    fn locate(&self, extension: &str) -> ConfigResult<Arc<dyn Parser>> {
        (**self).locate(extension)
    }
}

/// Drain `input` into a UTF-8 string, reporting failures against `description`.
pub(crate) fn read_to_string(mut input: RawInput, description: &str) -> ConfigResult<String> {
    let mut text = String::new();
    match input.read_to_string(&mut text) {
        Ok(_) => ConfigResult::valid(text),
        Err(err) => ConfigResult::invalid(ConfigError::parse(description, err)),
    }
}

#[cfg(test)]
mod tests;
