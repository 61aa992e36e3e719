//! Non-empty, ordered collection of [`ConfigError`] values.

use std::{error::Error, fmt, sync::Arc};

use super::ConfigError;

/// Errors accumulated by a single invalid [`crate::ConfigResult`].
///
/// The collection is never empty: it can only be built from a first error or
/// from a vector that has been checked for emptiness.
///
/// # Examples
///
/// ```
/// use ortho_source::{ConfigError, ConfigErrors};
///
/// let mut errors = ConfigErrors::new(ConfigError::no_parser("toml"));
/// errors.extend(ConfigErrors::new(ConfigError::no_parser("ini")));
/// assert_eq!(errors.len(), 2);
/// assert_eq!(
///     errors.to_string(),
///     "1: no parser for extension toml\n2: no parser for extension ini"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ConfigErrors(Vec<Arc<ConfigError>>);

impl ConfigErrors {
    /// Create a collection holding a single error.
    #[must_use]
    pub fn new(first: impl Into<Arc<ConfigError>>) -> Self {
        Self(vec![first.into()])
    }

    /// Build a collection from `errors`, returning `None` when it is empty.
    #[must_use]
    pub fn try_from_vec(errors: Vec<Arc<ConfigError>>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// Append every error of `other` after the errors already held.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Concatenate two collections, keeping `self` first.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &ConfigError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Number of errors in the collection; always at least one.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; provided for API symmetry with other collections.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl From<ConfigError> for ConfigErrors {
    fn from(error: ConfigError) -> Self {
        Self::new(error)
    }
}

impl From<Arc<ConfigError>> for ConfigErrors {
    fn from(error: Arc<ConfigError>) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for ConfigErrors {}

impl<'a> IntoIterator for &'a ConfigErrors {
    type Item = &'a ConfigError;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, Arc<ConfigError>>,
        fn(&'a Arc<ConfigError>) -> &'a ConfigError,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(Arc::as_ref)
    }
}

impl IntoIterator for ConfigErrors {
    type Item = Arc<ConfigError>;
    type IntoIter = std::vec::IntoIter<Arc<ConfigError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
