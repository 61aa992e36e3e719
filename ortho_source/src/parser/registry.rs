//! Extension-keyed parser registry.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::{ConfigError, ConfigResult};

use super::{Parser, ParserRegistry, PropertiesParser};

/// Registry mapping lower-cased file extensions to parsers.
///
/// The `Default` registry holds every built-in format enabled
/// at compile time; [`DefaultParserRegistry::empty`] starts with none.
///
/// # Examples
///
/// ```
/// use ortho_source::{DefaultParserRegistry, ParserRegistry};
///
/// let registry = DefaultParserRegistry::default();
/// assert!(registry.locate("PROPERTIES").is_valid());
/// assert!(registry.locate("ini").is_invalid());
/// ```
#[derive(Clone)]
pub struct DefaultParserRegistry {
    parsers: BTreeMap<String, Arc<dyn Parser>>,
}

impl DefaultParserRegistry {
    /// Create a registry with no parsers.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            parsers: BTreeMap::new(),
        }
    }

    /// Register `parser` for `extension`, replacing any previous entry.
    pub fn register(&mut self, extension: &str, parser: Arc<dyn Parser>) {
        self.parsers.insert(normalise_extension(extension), parser);
    }

    /// Builder-style variant of [`DefaultParserRegistry::register`].
    #[must_use]
    pub fn with_parser(mut self, extension: &str, parser: Arc<dyn Parser>) -> Self {
        self.register(extension, parser);
        self
    }

    /// Registered extensions in sorted order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.parsers.keys().map(String::as_str)
    }
}

fn normalise_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}

impl Default for DefaultParserRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("properties", Arc::new(PropertiesParser));
        #[cfg(feature = "toml")]
        registry.register("toml", Arc::new(super::TomlParser));
        #[cfg(feature = "serde_json")]
        registry.register("json", Arc::new(super::JsonParser));
        #[cfg(feature = "yaml")]
        {
            registry.register("yaml", Arc::new(super::YamlParser));
            registry.register("yml", Arc::new(super::YamlParser));
        }
        registry
    }
}

impl ParserRegistry for DefaultParserRegistry {
    fn locate(&self, extension: &str) -> ConfigResult<Arc<dyn Parser>> {
        self.parsers
            .get(&normalise_extension(extension))
            .map_or_else(
                || ConfigResult::invalid(ConfigError::no_parser(extension)),
                |parser| ConfigResult::valid(Arc::clone(parser)),
            )
    }
}

impl fmt::Debug for DefaultParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultParserRegistry")
            .field("extensions", &self.parsers.keys().collect::<Vec<_>>())
            .finish()
    }
}
