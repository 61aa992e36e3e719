//! JSON support backed by `serde_json`.

use serde_json::Value;

use crate::{
    ConfigError, ConfigResult, ListNode, MapNode, Node, Provenance, RawInput, Scalar, ScalarNode,
};

use super::Parser;

/// Parser for `.json` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

/// Convert a JSON value into a node tree. Shared with the YAML parser, which
/// decodes through `serde_json::Value`.
pub(super) fn json_to_node(value: Value, provenance: &Provenance) -> Node {
    let scalar = |value: Scalar| Node::from(ScalarNode::new(value, provenance.clone()));
    match value {
        Value::Null => scalar(Scalar::Null),
        Value::Bool(b) => scalar(Scalar::Boolean(b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => scalar(Scalar::Integer(i)),
            None => n
                .as_f64()
                .map_or_else(|| scalar(Scalar::String(n.to_string())), |f| {
                    scalar(Scalar::Float(f))
                }),
        },
        Value::String(s) => scalar(Scalar::String(s)),
        Value::Array(items) => ListNode::new(
            items
                .into_iter()
                .map(|item| json_to_node(item, provenance))
                .collect(),
            provenance.clone(),
        )
        .into(),
        Value::Object(object) => {
            let mut map = MapNode::new(provenance.clone());
            for (key, item) in object {
                map.insert(key, json_to_node(item, provenance));
            }
            map.into()
        }
    }
}

impl Parser for JsonParser {
    fn load(&self, input: RawInput, description: &str) -> ConfigResult<Node> {
        match serde_json::from_reader::<_, Value>(input) {
            Ok(value) => ConfigResult::valid(json_to_node(value, &Provenance::new(description))),
            Err(err) => ConfigResult::invalid(ConfigError::parse(description, err)),
        }
    }
}
