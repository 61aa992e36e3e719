//! Filesystem-backed file source.

use std::io::{self, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};

use crate::{ConfigError, ConfigResult};

use super::{FileSource, RawInput};

/// Configuration file on the local filesystem.
///
/// # Examples
///
/// ```
/// use ortho_source::{FileSource, PathFileSource};
///
/// let file = PathFileSource::new("conf/app.toml");
/// assert_eq!(file.ext(), "toml");
/// assert_eq!(file.describe(), "conf/app.toml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFileSource {
    path: Utf8PathBuf,
}

impl PathFileSource {
    /// Create a source for `path`. Nothing is read until [`FileSource::open`].
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// Return the parent directory of `path`, falling back to `"."` when the path
/// has no parent or the parent is empty.
fn parent_or_dot(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}

/// Open `path` through a `cap-std` handle on its parent directory.
fn open_file(path: &Utf8Path) -> io::Result<std::fs::File> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "cannot determine file name for configuration file path",
        )
    })?;
    let dir = Dir::open_ambient_dir(parent_or_dot(path), ambient_authority())?;
    if dir.metadata(file_name)?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::IsADirectory,
            "configuration path is a directory",
        ));
    }
    Ok(dir.open(file_name)?.into_std())
}

impl FileSource for PathFileSource {
    fn ext(&self) -> &str {
        self.path.extension().unwrap_or_default()
    }

    fn open(&self) -> ConfigResult<RawInput> {
        match open_file(&self.path) {
            Ok(file) => {
                tracing::debug!(path = %self.path, "opened configuration file");
                ConfigResult::valid(Box::new(BufReader::new(file)))
            }
            Err(err) => ConfigResult::invalid(ConfigError::file(self.path.clone(), err)),
        }
    }

    fn describe(&self) -> String {
        self.path.to_string()
    }
}
