//! Helpers for safely mutating environment variables in tests.
//!
//! Every mutation takes a global re-entrant mutex and returns an RAII guard
//! that restores the previous value (or removes the variable) when dropped.
//! Guards for the same key restore in LIFO order.
//!
//! Use [`lock`] when a test must observe the whole environment without other
//! tests mutating it concurrently, for example when counting variables.
//!
//! # Examples
//!
//! ```
//! use test_helpers::env;
//!
//! let _g = env::set_var("ORTHO_SOURCE_DOC_KEY", "VALUE");
//! assert_eq!(std::env::var("ORTHO_SOURCE_DOC_KEY").as_deref(), Ok("VALUE"));
//! ```

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

/// RAII guard holding the environment lock; see [`lock`].
#[must_use = "dropping releases the environment lock"]
pub struct EnvLock {
    _guard: ReentrantMutexGuard<'static, ()>,
}

fn mutate<F>(key: String, apply: F) -> EnvVarGuard
where
    F: FnOnce(&str),
{
    let _guard = ENV_MUTEX.lock();
    let original = env::var_os(&key);
    apply(&key);
    EnvVarGuard { key, original }
}

/// Sets an environment variable and returns a guard restoring its prior value.
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    // SAFETY: every mutation made through this module holds `ENV_MUTEX`.
    mutate(key.into(), |k| unsafe { env::set_var(k, value.as_ref()) })
}

/// Removes an environment variable and returns a guard restoring its prior value.
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    // SAFETY: every mutation made through this module holds `ENV_MUTEX`.
    mutate(key.into(), |k| unsafe { env::remove_var(k) })
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _guard = ENV_MUTEX.lock();
        match self.original.take() {
            // SAFETY: `ENV_MUTEX` is held during restoration.
            Some(value) => unsafe { env::set_var(&self.key, value) },
            // SAFETY: `ENV_MUTEX` is held during restoration.
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

/// Acquire the global environment lock for the lifetime of the guard.
///
/// The lock is re-entrant, so [`set_var`] and [`remove_var`] may still be
/// called from the same thread while it is held.
///
/// # Examples
///
/// ```
/// use test_helpers::env;
///
/// let _lock = env::lock();
/// let _guard = env::set_var("ORTHO_SOURCE_DOC_LOCKED", "1");
/// assert!(std::env::vars_os().count() >= 1);
/// ```
pub fn lock() -> EnvLock {
    EnvLock {
        _guard: ENV_MUTEX.lock(),
    }
}

/// Run `f` while holding the global environment lock.
pub fn with_lock<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock();
    f()
}
