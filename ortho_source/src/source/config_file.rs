//! Configuration files located by a [`FileSource`] and parsed by extension.

use camino::Utf8PathBuf;

use crate::{
    ConfigError, ConfigResult, DefaultParserRegistry, FileSource, InlineFileSource, Node,
    ParserRegistry, PathFileSource, RawInput, ap,
};

use super::PropertySource;

/// Loads one configuration file.
///
/// Locating the parser and opening the file are independent steps; when both
/// fail, both errors are reported in the same [`ConfigResult::Invalid`].
///
/// # Examples
///
/// ```
/// use ortho_source::{ConfigFilePropertySource, Node, PropertySource};
///
/// let source = ConfigFilePropertySource::inline("app.properties", "key=value");
/// let node = source.node().ok().expect("inline properties parse");
/// assert_eq!(node.get("key").and_then(Node::as_str), Some("value"));
/// assert_eq!(node.label(), Some("app.properties"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigFilePropertySource<F = PathFileSource, R = DefaultParserRegistry> {
    file: F,
    registry: R,
    optional: bool,
}

impl<F: FileSource, R: ParserRegistry> ConfigFilePropertySource<F, R> {
    /// Load `file` with a parser chosen from `registry`.
    #[must_use]
    pub const fn new(file: F, registry: R) -> Self {
        Self {
            file,
            registry,
            optional: false,
        }
    }

    /// Like [`ConfigFilePropertySource::new`], but a missing file yields
    /// [`Node::Undefined`] instead of an error.
    ///
    /// A missing parser is still reported.
    #[must_use]
    pub const fn optional(file: F, registry: R) -> Self {
        Self {
            file,
            registry,
            optional: true,
        }
    }

    /// The file this source reads.
    #[must_use]
    pub const fn file(&self) -> &F {
        &self.file
    }

    fn open_input(&self) -> ConfigResult<Option<RawInput>> {
        match self.file.open() {
            ConfigResult::Valid(input) => ConfigResult::valid(Some(input)),
            ConfigResult::Invalid(errors)
                if self.optional && errors.iter().all(ConfigError::is_not_found) =>
            {
                tracing::debug!(file = %self.file.describe(), "optional configuration file absent");
                ConfigResult::valid(None)
            }
            ConfigResult::Invalid(errors) => ConfigResult::Invalid(errors),
        }
    }
}

impl ConfigFilePropertySource {
    /// Load the file at `path` using the built-in parsers.
    #[must_use]
    pub fn from_path(path: impl Into<Utf8PathBuf>) -> Self {
        Self::new(PathFileSource::new(path), DefaultParserRegistry::default())
    }
}

impl ConfigFilePropertySource<InlineFileSource> {
    /// Parse in-memory `contents` as if read from a file called `name`.
    #[must_use]
    pub fn inline(name: impl Into<String>, contents: impl AsRef<str>) -> Self {
        Self::new(
            InlineFileSource::new(name, contents),
            DefaultParserRegistry::default(),
        )
    }
}

impl<F: FileSource, R: ParserRegistry> PropertySource for ConfigFilePropertySource<F, R> {
    fn node(&self) -> ConfigResult<Node> {
        let description = self.file.describe();
        let parser = self.registry.locate(self.file.ext());
        let input = self.open_input();
        let result = ap(parser, input, |parser, input| match input {
            Some(raw) => parser.load(raw, &description),
            None => ConfigResult::valid(Node::Undefined),
        });
        match result.errors() {
            Some(errors) => tracing::warn!(
                file = %description,
                errors = errors.len(),
                "failed to load configuration file"
            ),
            None => tracing::debug!(file = %description, "loaded configuration file"),
        }
        result
    }
}
