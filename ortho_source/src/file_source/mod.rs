//! Access to configuration file content.
//!
//! A [`FileSource`] knows three things about a file: the extension used to
//! pick a parser, how to open its content, and how to describe it in
//! diagnostics. Opening is the only I/O performed by the source layer.

mod inline;
mod path;

use std::io::Read;

use crate::ConfigResult;

pub use inline::InlineFileSource;
pub use path::PathFileSource;

/// Raw file content handed to a [`crate::Parser`].
pub type RawInput = Box<dyn Read + Send>;

/// Location and content access for one configuration file.
pub trait FileSource: Send + Sync {
    /// Extension used to select a parser; empty when the file has none.
    fn ext(&self) -> &str;

    /// Open the file's content.
    ///
    /// Failures are reported as [`crate::ConfigError::File`].
    fn open(&self) -> ConfigResult<RawInput>;

    /// Human-readable description used as the provenance label.
    fn describe(&self) -> String;
}
