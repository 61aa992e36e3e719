//! Process-wide string properties.
//!
//! Rust processes have no built-in property table, so this module provides
//! one: a global, lock-protected map of string keys to string values that
//! applications populate at start-up (directly or from `-Dkey=value`
//! arguments) and that [`crate::SystemPropertiesPropertySource`] reads.
//!
//! Property access goes through [`PropertyReader`] so sources can be given a
//! fixed [`StaticProperties`] snapshot instead of the live table.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use parking_lot::RwLock;

static PROPERTIES: LazyLock<RwLock<BTreeMap<String, String>>> = LazyLock::new(RwLock::default);

/// Set a process-wide property, returning the value it replaced.
///
/// # Examples
///
/// ```
/// use ortho_source::sysprops;
///
/// sysprops::set_property("config.override.doc.example", "1");
/// assert_eq!(
///     sysprops::property("config.override.doc.example").as_deref(),
///     Some("1")
/// );
/// sysprops::remove_property("config.override.doc.example");
/// ```
pub fn set_property(key: impl Into<String>, value: impl Into<String>) -> Option<String> {
    PROPERTIES.write().insert(key.into(), value.into())
}

/// Read a process-wide property.
#[must_use]
pub fn property(key: &str) -> Option<String> {
    PROPERTIES.read().get(key).cloned()
}

/// Remove a process-wide property, returning its previous value.
pub fn remove_property(key: &str) -> Option<String> {
    PROPERTIES.write().remove(key)
}

/// Copy of every process-wide property, sorted by key.
#[must_use]
pub fn snapshot() -> BTreeMap<String, String> {
    PROPERTIES.read().clone()
}

/// Record every `-Dkey=value` argument as a property.
///
/// Arguments without the `-D` prefix are ignored. `-Dkey` without a value
/// sets an empty string. Returns the number of properties recorded.
///
/// # Examples
///
/// ```
/// use ortho_source::sysprops;
///
/// let loaded = sysprops::load_from_args(["app", "-Ddoc.args.port=8080", "--verbose"]);
/// assert_eq!(loaded, 1);
/// assert_eq!(sysprops::property("doc.args.port").as_deref(), Some("8080"));
/// sysprops::remove_property("doc.args.port");
/// ```
pub fn load_from_args<I, S>(args: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed: Vec<(String, String)> = args
        .into_iter()
        .filter_map(|arg| parse_define(arg.as_ref()))
        .collect();
    let count = parsed.len();
    let mut table = PROPERTIES.write();
    for (key, value) in parsed {
        tracing::trace!(%key, "recording property from arguments");
        table.insert(key, value);
    }
    count
}

fn parse_define(arg: &str) -> Option<(String, String)> {
    let define = arg.strip_prefix("-D").filter(|rest| !rest.is_empty())?;
    let (key, value) = define.split_once('=').unwrap_or((define, ""));
    Some((key.to_owned(), value.to_owned()))
}

/// Read access to a set of string properties.
pub trait PropertyReader: Send + Sync {
    /// Every property as a key/value pair.
    fn properties(&self) -> Vec<(String, String)>;
}

/// Reads the live process-wide property table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProperties;

impl PropertyReader for SystemProperties {
    fn properties(&self) -> Vec<(String, String)> {
        snapshot().into_iter().collect()
    }
}

/// Fixed property set, independent of the process-wide table.
///
/// # Examples
///
/// ```
/// use ortho_source::sysprops::{PropertyReader, StaticProperties};
///
/// let props: StaticProperties = [("a", "1")].into_iter().collect();
/// assert_eq!(props.properties(), vec![("a".to_owned(), "1".to_owned())]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticProperties(BTreeMap<String, String>);

impl StaticProperties {
    /// Create an empty property set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add a property, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl PropertyReader for StaticProperties {
    fn properties(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
