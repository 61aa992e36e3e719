//! Primary error enum for source acquisition.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a configuration source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// No parser is registered for a file extension.
    #[error("no parser for extension {extension}")]
    NoParser {
        /// Extension that was looked up, as reported by the file source.
        extension: String,
    },

    /// A configuration file could not be opened or read.
    #[error("failed to open configuration file '{path}': {source}")]
    File {
        /// Path or description of the file that failed.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A parser rejected the content of a configuration file.
    #[error("failed to parse {description}: {message}")]
    Parse {
        /// Description of the input that failed to parse.
        description: String,
        /// Parser-specific explanation.
        message: String,
    },

    /// A node could not be handed to the merger because its root is not a map.
    #[error("configuration from {label} must be a map at the root, found {found}")]
    InvalidRoot {
        /// Provenance label of the offending node.
        label: String,
        /// Kind of node found at the root.
        found: &'static str,
    },
}

impl ConfigError {
    /// Construct a [`ConfigError::NoParser`] for `extension`.
    #[must_use]
    pub fn no_parser(extension: impl Into<String>) -> Self {
        Self::NoParser {
            extension: extension.into(),
        }
    }

    /// Construct a [`ConfigError::File`] for `path`.
    #[must_use]
    pub fn file(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    /// Construct a [`ConfigError::Parse`] from any displayable parser failure.
    #[must_use]
    pub fn parse(description: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            description: description.into(),
            message: message.to_string(),
        }
    }

    /// Returns `true` when the error reports a file that does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::File { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
