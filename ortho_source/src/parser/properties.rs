//! Line-oriented `key=value` parser for `.properties` files.

use crate::{ConfigResult, Node, RawInput};

use super::{Parser, read_to_string};

/// Parser for flat properties files.
///
/// * `key=value` and `key: value` are both accepted; the first separator wins.
/// * Lines starting with `#` or `!` are comments; blank lines are ignored.
/// * A line without a separator defines the key with an empty value.
/// * A repeated key overrides the earlier value.
///
/// Keys are kept verbatim: dots are not expanded into nested maps.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertiesParser;

impl PropertiesParser {
    fn entries(text: &str) -> impl Iterator<Item = (&str, &str)> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(['#', '!']))
            .map(|line| {
                line.split_once(['=', ':']).map_or((line, ""), |(key, value)| {
                    (key.trim_end(), value.trim_start())
                })
            })
    }
}

impl Parser for PropertiesParser {
    fn load(&self, input: RawInput, description: &str) -> ConfigResult<Node> {
        read_to_string(input, description)
            .map(|text| Node::flat_map(description, Self::entries(&text)))
    }
}
