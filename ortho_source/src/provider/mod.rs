//! Hand-off of acquired nodes to the figment merge stack.

use figment::{
    Metadata, Profile, Provider,
    value::{Dict, Empty, Map, Num, Tag, Value},
};

use crate::{ConfigError, MapNode, Node, Scalar};

/// [`figment::Provider`] serving a [`Node`] in the default profile.
///
/// A map node becomes the provider's dictionary and [`Node::Undefined`]
/// becomes an empty one, so skipped sources contribute nothing to a merge.
/// Lists and scalars cannot form a root and are rejected.
///
/// # Examples
///
/// ```
/// use figment::Figment;
/// use ortho_source::{Node, NodeProvider};
///
/// let node = Node::flat_map("sysprops", [("host", "localhost")]);
/// let host: String = Figment::from(NodeProvider::new(node))
///     .extract_inner("host")
///     .expect("host is present");
/// assert_eq!(host, "localhost");
/// ```
#[derive(Debug, Clone)]
pub struct NodeProvider {
    node: Node,
}

impl NodeProvider {
    /// Wrap `node` for merging.
    #[must_use]
    pub const fn new(node: Node) -> Self {
        Self { node }
    }

    fn dict(&self) -> Result<Dict, ConfigError> {
        match &self.node {
            Node::Undefined => Ok(Dict::new()),
            Node::Map(map) => Ok(map_to_dict(map)),
            other => Err(ConfigError::InvalidRoot {
                label: other.label().unwrap_or_default().to_owned(),
                found: other.kind(),
            }),
        }
    }
}

impl From<Node> for NodeProvider {
    fn from(node: Node) -> Self {
        Self::new(node)
    }
}

fn map_to_dict(map: &MapNode) -> Dict {
    map.iter()
        .map(|(key, node)| (key.to_owned(), to_value(node)))
        .collect()
}

fn to_value(node: &Node) -> Value {
    match node {
        Node::Undefined => Value::Empty(Tag::Default, Empty::None),
        Node::Map(map) => Value::Dict(Tag::Default, map_to_dict(map)),
        Node::List(list) => Value::Array(Tag::Default, list.iter().map(to_value).collect()),
        Node::Scalar(scalar) => match scalar.value() {
            Scalar::String(s) => Value::String(Tag::Default, s.clone()),
            Scalar::Integer(i) => Value::Num(Tag::Default, Num::I64(*i)),
            Scalar::Float(f) => Value::Num(Tag::Default, Num::F64(*f)),
            Scalar::Boolean(b) => Value::Bool(Tag::Default, *b),
            Scalar::Null => Value::Empty(Tag::Default, Empty::None),
        },
    }
}

impl Provider for NodeProvider {
    fn metadata(&self) -> Metadata {
        Metadata::named(self.node.label().unwrap_or("undefined").to_owned())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        let dict = self
            .dict()
            .map_err(|err| figment::Error::from(err.to_string()))?;
        Ok(Profile::Default.collect(dict))
    }
}

#[cfg(test)]
mod tests;
