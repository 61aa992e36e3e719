//! Shared helpers for working with `figment::Jail` in tests.
//!
//! A jail gives a test its own temporary working directory and restores the
//! environment afterwards, which suits file sources addressed by relative
//! paths.

use anyhow::{Result, anyhow};
use camino::Utf8PathBuf;

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or the closure fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// The jail's working directory as a UTF-8 path.
///
/// # Errors
///
/// Returns a [`figment::Error`] when the directory is not valid UTF-8.
pub fn jail_dir(jail: &figment::Jail) -> figment::error::Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(jail.directory().to_path_buf())
        .map_err(|path| figment::Error::from(format!("non UTF-8 jail path: {}", path.display())))
}
