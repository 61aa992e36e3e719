//! In-memory file source.

use std::io::Cursor;
use std::sync::Arc;

use camino::Utf8Path;

use crate::ConfigResult;

use super::{FileSource, RawInput};

/// Configuration content held in memory under a file-like name.
///
/// The name supplies the extension and the description, so
/// `InlineFileSource::new("defaults.toml", "...")` is parsed as TOML.
#[derive(Debug, Clone)]
pub struct InlineFileSource {
    name: String,
    contents: Arc<str>,
}

impl InlineFileSource {
    /// Create a source named `name` holding `contents`.
    #[must_use]
    pub fn new(name: impl Into<String>, contents: impl AsRef<str>) -> Self {
        Self {
            name: name.into(),
            contents: Arc::from(contents.as_ref()),
        }
    }
}

impl FileSource for InlineFileSource {
    fn ext(&self) -> &str {
        Utf8Path::new(&self.name).extension().unwrap_or_default()
    }

    fn open(&self) -> ConfigResult<RawInput> {
        ConfigResult::valid(Box::new(Cursor::new(self.contents.as_bytes().to_vec())))
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
