//! YAML support backed by `serde-saphyr`.

use serde_saphyr::Options;

use crate::{ConfigError, ConfigResult, Node, Provenance, RawInput};

use super::json::json_to_node;
use super::{Parser, read_to_string};

/// Parser for `.yaml` and `.yml` files.
///
/// Booleans follow YAML 1.2: only `true` and `false` are booleans, so values
/// such as `yes` stay strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl YamlParser {
    fn parse_value(contents: &str) -> Result<serde_json::Value, serde_saphyr::Error> {
        serde_saphyr::from_str_with_options(
            contents,
            Options {
                strict_booleans: true,
                ..Options::default()
            },
        )
    }
}

impl Parser for YamlParser {
    fn load(&self, input: RawInput, description: &str) -> ConfigResult<Node> {
        read_to_string(input, description).and_then(|text| match Self::parse_value(&text) {
            Ok(value) => ConfigResult::valid(json_to_node(value, &Provenance::new(description))),
            Err(err) => ConfigResult::invalid(ConfigError::parse(description, err)),
        })
    }
}
