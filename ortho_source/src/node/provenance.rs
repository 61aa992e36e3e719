//! Provenance labels carried by defined nodes.

use std::{fmt, sync::Arc};

/// Human-readable origin of a node, such as `sysprops`, `envars` or a file
/// description.
///
/// Labels are shared between every node produced by one read, so cloning is
/// cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Provenance(Arc<str>);

impl Provenance {
    /// Create a label.
    #[must_use]
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Borrow the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Provenance {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Provenance {
    fn from(label: String) -> Self {
        Self(Arc::from(label))
    }
}

impl From<&String> for Provenance {
    fn from(label: &String) -> Self {
        Self::new(label)
    }
}
