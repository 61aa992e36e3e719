//! TOML support backed by the `toml` crate.

use crate::{
    ConfigError, ConfigResult, ListNode, MapNode, Node, Provenance, RawInput, Scalar, ScalarNode,
};

use super::{Parser, read_to_string};

/// Parser for `.toml` files.
///
/// Date-time values have no scalar counterpart and are kept as their TOML
/// string form.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlParser;

fn to_node(value: ::toml::Value, provenance: &Provenance) -> Node {
    match value {
        ::toml::Value::String(s) => scalar(Scalar::String(s), provenance),
        ::toml::Value::Integer(i) => scalar(Scalar::Integer(i), provenance),
        ::toml::Value::Float(f) => scalar(Scalar::Float(f), provenance),
        ::toml::Value::Boolean(b) => scalar(Scalar::Boolean(b), provenance),
        ::toml::Value::Datetime(dt) => scalar(Scalar::String(dt.to_string()), provenance),
        ::toml::Value::Array(items) => ListNode::new(
            items.into_iter().map(|v| to_node(v, provenance)).collect(),
            provenance.clone(),
        )
        .into(),
        ::toml::Value::Table(table) => table_to_node(table, provenance),
    }
}

fn table_to_node(table: ::toml::Table, provenance: &Provenance) -> Node {
    let mut map = MapNode::new(provenance.clone());
    for (key, value) in table {
        map.insert(key, to_node(value, provenance));
    }
    map.into()
}

fn scalar(value: Scalar, provenance: &Provenance) -> Node {
    ScalarNode::new(value, provenance.clone()).into()
}

impl Parser for TomlParser {
    fn load(&self, input: RawInput, description: &str) -> ConfigResult<Node> {
        read_to_string(input, description).and_then(|text| {
            match ::toml::from_str::<::toml::Table>(&text) {
                Ok(table) => {
                    ConfigResult::valid(table_to_node(table, &Provenance::new(description)))
                }
                Err(err) => ConfigResult::invalid(ConfigError::parse(description, err)),
            }
        })
    }
}
