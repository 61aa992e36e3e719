//! Format-agnostic configuration tree.
//!
//! Every source normalises its origin into a [`Node`]. Downstream mergers and
//! decoders only ever see nodes, so system properties, environment variables
//! and parsed files can be treated identically once acquired.
//!
//! Provenance labels travel with every defined node for diagnostics. They are
//! deliberately excluded from equality: two nodes holding the same data are
//! equal regardless of where they came from.

mod provenance;
mod serialize;

use indexmap::IndexMap;
use serde::Serialize;

pub use provenance::Provenance;

/// Intermediate configuration value produced by every property source.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// The source produced no data. Distinct from an empty [`MapNode`].
    #[default]
    Undefined,
    /// Insertion-ordered mapping of keys to child nodes.
    Map(MapNode),
    /// Ordered sequence of child nodes.
    List(ListNode),
    /// Leaf value.
    Scalar(ScalarNode),
}

impl Node {
    /// Build a flat map of string scalars labelled with `provenance`.
    ///
    /// Later duplicates of a key replace earlier values while keeping the
    /// position of the first occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use ortho_source::Node;
    ///
    /// let node = Node::flat_map("envars", [("HOME", "/root"), ("SHELL", "/bin/sh")]);
    /// assert_eq!(node.len(), 2);
    /// assert_eq!(node.label(), Some("envars"));
    /// ```
    #[must_use]
    pub fn flat_map<P, I, K, V>(provenance: P, entries: I) -> Self
    where
        P: Into<Provenance>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let provenance = provenance.into();
        let mut map = MapNode::new(provenance.clone());
        for (key, value) in entries {
            map.insert(
                key,
                Self::Scalar(ScalarNode::new(Scalar::String(value.into()), provenance.clone())),
            );
        }
        Self::Map(map)
    }

    /// Returns `true` unless the node is [`Node::Undefined`].
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }

    /// Provenance of the node, or `None` for [`Node::Undefined`].
    #[must_use]
    pub const fn provenance(&self) -> Option<&Provenance> {
        match self {
            Self::Undefined => None,
            Self::Map(map) => Some(map.provenance()),
            Self::List(list) => Some(list.provenance()),
            Self::Scalar(scalar) => Some(scalar.provenance()),
        }
    }

    /// Provenance label as a string slice.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.provenance().map(Provenance::as_str)
    }

    /// Short name of the node kind, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Map(_) => "map",
            Self::List(_) => "list",
            Self::Scalar(_) => "scalar",
        }
    }

    /// Borrow the inner map, if this is a map node.
    #[must_use]
    pub const fn as_map(&self) -> Option<&MapNode> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the inner scalar value, if this is a scalar node.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar.value()),
            _ => None,
        }
    }

    /// Borrow the scalar as a string slice when it holds a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self.as_scalar() {
            Some(Scalar::String(value)) => Some(value),
            _ => None,
        }
    }

    /// Look up a direct child of a map node.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Walk nested maps along a dot-separated path.
    ///
    /// An empty path returns the node itself. Keys that themselves contain
    /// dots are only reachable through [`Node::get`].
    #[must_use]
    pub fn at(&self, path: &str) -> Option<&Self> {
        if path.is_empty() {
            return Some(self);
        }
        path.split('.').try_fold(self, |node, segment| node.get(segment))
    }

    /// Number of direct children; zero for scalars and undefined nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Map(map) => map.len(),
            Self::List(list) => list.len(),
            Self::Undefined | Self::Scalar(_) => 0,
        }
    }

    /// Returns `true` when [`Node::len`] is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<MapNode> for Node {
    fn from(map: MapNode) -> Self {
        Self::Map(map)
    }
}

impl From<ListNode> for Node {
    fn from(list: ListNode) -> Self {
        Self::List(list)
    }
}

impl From<ScalarNode> for Node {
    fn from(scalar: ScalarNode) -> Self {
        Self::Scalar(scalar)
    }
}

/// Insertion-ordered mapping node.
#[derive(Debug, Clone)]
pub struct MapNode {
    entries: IndexMap<String, Node>,
    provenance: Provenance,
}

impl MapNode {
    /// Create an empty map labelled with `provenance`.
    #[must_use]
    pub fn new(provenance: impl Into<Provenance>) -> Self {
        Self {
            entries: IndexMap::new(),
            provenance: provenance.into(),
        }
    }

    /// Insert `node` under `key`, returning any value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, node: Node) -> Option<Node> {
        self.entries.insert(key.into(), node)
    }

    /// Look up a child by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Returns `true` when `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Provenance label of the map.
    #[must_use]
    pub const fn provenance(&self) -> &Provenance {
        &self.provenance
    }
}

impl PartialEq for MapNode {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl IntoIterator for MapNode {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Ordered list node.
#[derive(Debug, Clone)]
pub struct ListNode {
    elements: Vec<Node>,
    provenance: Provenance,
}

impl ListNode {
    /// Create a list from `elements` labelled with `provenance`.
    #[must_use]
    pub fn new(elements: Vec<Node>, provenance: impl Into<Provenance>) -> Self {
        Self {
            elements,
            provenance: provenance.into(),
        }
    }

    /// Iterate over elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.elements.iter()
    }

    /// Element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.elements.get(index)
    }

    /// Number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when the list holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Provenance label of the list.
    #[must_use]
    pub const fn provenance(&self) -> &Provenance {
        &self.provenance
    }
}

impl PartialEq for ListNode {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

/// Leaf node wrapping a [`Scalar`].
#[derive(Debug, Clone)]
pub struct ScalarNode {
    value: Scalar,
    provenance: Provenance,
}

impl ScalarNode {
    /// Create a scalar node labelled with `provenance`.
    #[must_use]
    pub fn new(value: Scalar, provenance: impl Into<Provenance>) -> Self {
        Self {
            value,
            provenance: provenance.into(),
        }
    }

    /// Borrow the wrapped value.
    #[must_use]
    pub const fn value(&self) -> &Scalar {
        &self.value
    }

    /// Provenance label of the scalar.
    #[must_use]
    pub const fn provenance(&self) -> &Provenance {
        &self.provenance
    }
}

impl PartialEq for ScalarNode {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Scalar values a parser may produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Text value; every value read from properties or the environment.
    String(String),
    /// Signed integer.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Boolean(bool),
    /// Explicit null, as written by JSON or YAML.
    Null,
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
