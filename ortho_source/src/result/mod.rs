//! Accumulating validation outcome used by every property source.
//!
//! [`ConfigResult`] behaves like `Result` for dependent steps ([`ConfigResult::and_then`])
//! but independent steps are combined with [`ap`], which keeps the errors of
//! *both* operands instead of stopping at the first failure. A file source
//! uses this to report a missing parser and an unreadable file in one pass.

use crate::{ConfigError, ConfigErrors};

/// Either a valid value or a non-empty, ordered collection of errors.
#[derive(Debug, Clone)]
#[must_use = "a ConfigResult may carry errors that should be reported"]
pub enum ConfigResult<T> {
    /// The step succeeded.
    Valid(T),
    /// The step failed with at least one error.
    Invalid(ConfigErrors),
}

impl<T> ConfigResult<T> {
    /// Wrap a successful value.
    pub const fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Wrap one or more errors.
    pub fn invalid(errors: impl Into<ConfigErrors>) -> Self {
        Self::Invalid(errors.into())
    }

    /// Returns `true` for [`ConfigResult::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` for [`ConfigResult::Invalid`].
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Borrow the errors of an invalid result.
    #[must_use]
    pub const fn errors(&self) -> Option<&ConfigErrors> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Discard the errors, keeping only a valid value.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Transform a valid value; errors pass through unchanged.
    pub fn map<U, F>(self, f: F) -> ConfigResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => ConfigResult::Valid(f(value)),
            Self::Invalid(errors) => ConfigResult::Invalid(errors),
        }
    }

    /// Transform the errors of an invalid result.
    pub fn map_errors<F>(self, f: F) -> Self
    where
        F: FnOnce(ConfigErrors) -> ConfigErrors,
    {
        match self {
            Self::Valid(value) => Self::Valid(value),
            Self::Invalid(errors) => Self::Invalid(f(errors)),
        }
    }

    /// Chain a step that depends on the valid value.
    ///
    /// This short-circuits: `f` is not called for an invalid result. Use
    /// [`ap`] or [`ConfigResult::zip`] for independent steps.
    pub fn and_then<U, F>(self, f: F) -> ConfigResult<U>
    where
        F: FnOnce(T) -> ConfigResult<U>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(errors) => ConfigResult::Invalid(errors),
        }
    }

    /// Pair two independent results, accumulating the errors of both.
    pub fn zip<U>(self, other: ConfigResult<U>) -> ConfigResult<(T, U)> {
        ap(self, other, |a, b| ConfigResult::Valid((a, b)))
    }

    /// Convert into a standard `Result` so callers can use `?`.
    ///
    /// # Errors
    ///
    /// Returns the accumulated [`ConfigErrors`] of an invalid result.
    pub fn into_result(self) -> Result<T, ConfigErrors> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Collect many independent results, keeping every error in input order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ortho_source::{ConfigError, ConfigResult};
    ///
    /// let all = ConfigResult::sequence([
    ///     ConfigResult::valid(1),
    ///     ConfigResult::invalid(ConfigError::no_parser("ini")),
    ///     ConfigResult::invalid(ConfigError::no_parser("hcl")),
    /// ]);
    /// assert_eq!(all.errors().map(|e| e.len()), Some(2));
    /// ```
    pub fn sequence<I>(results: I) -> ConfigResult<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = Vec::new();
        let mut failures: Option<ConfigErrors> = None;
        for result in results {
            match result {
                Self::Valid(value) => values.push(value),
                Self::Invalid(errors) => {
                    failures = Some(match failures.take() {
                        Some(acc) => acc.concat(errors),
                        None => errors,
                    });
                }
            }
        }
        failures.map_or(ConfigResult::Valid(values), ConfigResult::Invalid)
    }
}

/// Combine two independently obtained results.
///
/// * both valid: `f` is applied to the two values;
/// * exactly one invalid: that operand's errors are returned unchanged;
/// * both invalid: `first`'s errors followed by `second`'s.
///
/// # Examples
///
/// ```
/// use ortho_source::{ConfigError, ConfigResult, ap};
///
/// let parser: ConfigResult<&str> = ConfigResult::invalid(ConfigError::no_parser("toml"));
/// let input: ConfigResult<&str> = ConfigResult::invalid(ConfigError::file(
///     "app.toml",
///     std::io::Error::from(std::io::ErrorKind::NotFound),
/// ));
/// let combined = ap(parser, input, |p, i| ConfigResult::valid(format!("{p}{i}")));
/// assert_eq!(combined.errors().map(|e| e.len()), Some(2));
/// ```
pub fn ap<A, B, C, F>(first: ConfigResult<A>, second: ConfigResult<B>, f: F) -> ConfigResult<C>
where
    F: FnOnce(A, B) -> ConfigResult<C>,
{
    match (first, second) {
        (ConfigResult::Valid(a), ConfigResult::Valid(b)) => f(a, b),
        (ConfigResult::Invalid(errors), ConfigResult::Valid(_))
        | (ConfigResult::Valid(_), ConfigResult::Invalid(errors)) => ConfigResult::Invalid(errors),
        (ConfigResult::Invalid(left), ConfigResult::Invalid(right)) => {
            ConfigResult::Invalid(left.concat(right))
        }
    }
}

impl<T> From<Result<T, ConfigError>> for ConfigResult<T> {
    fn from(result: Result<T, ConfigError>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }
}

impl<T> From<Result<T, ConfigErrors>> for ConfigResult<T> {
    fn from(result: Result<T, ConfigErrors>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(errors) => Self::Invalid(errors),
        }
    }
}

impl<T> From<ConfigResult<T>> for Result<T, ConfigErrors> {
    fn from(result: ConfigResult<T>) -> Self {
        result.into_result()
    }
}

impl<T> FromIterator<ConfigResult<T>> for ConfigResult<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = ConfigResult<T>>>(iter: I) -> Self {
        ConfigResult::sequence(iter)
    }
}

#[cfg(test)]
mod tests;
