//! Unit tests for the built-in parsers and the registry.

use std::io::Cursor;
use std::sync::Arc;

use rstest::rstest;

use super::{DefaultParserRegistry, Parser, ParserRegistry, PropertiesParser};
use crate::{ConfigError, ConfigResult, Node, RawInput, Scalar};

fn input(text: &str) -> RawInput {
    Box::new(Cursor::new(text.as_bytes().to_vec()))
}

fn load_ok(parser: &dyn Parser, text: &str, description: &str) -> Node {
    match parser.load(input(text), description) {
        ConfigResult::Valid(node) => node,
        ConfigResult::Invalid(errors) => panic!("expected {description} to parse: {errors}"),
    }
}

fn expect_parse_error(result: &ConfigResult<Node>, description: &str) {
    let errors = result.errors().expect("expected parse failure");
    assert_eq!(errors.len(), 1);
    assert!(
        errors.iter().all(|error| matches!(
            error,
            ConfigError::Parse { description: d, .. } if d == description
        )),
        "unexpected errors: {errors}"
    );
}

#[test]
fn properties_parses_key_value() {
    let node = load_ok(&PropertiesParser, "key=value", "app.properties");
    assert_eq!(node, Node::flat_map("app.properties", [("key", "value")]));
    assert_eq!(node.label(), Some("app.properties"));
}

#[rstest]
#[case("# comment\n! other\n\nname = demo\n", &[("name", "demo")])]
#[case("host: localhost\nport:8080", &[("host", "localhost"), ("port", "8080")])]
#[case("flag\n", &[("flag", "")])]
#[case("url=jdbc:pg://db\n", &[("url", "jdbc:pg://db")])]
#[case("a=1\na=2\n", &[("a", "2")])]
#[case("db.user = admin", &[("db.user", "admin")])]
fn properties_syntax(#[case] text: &str, #[case] expected: &[(&str, &str)]) {
    let node = load_ok(&PropertiesParser, text, "p.properties");
    assert_eq!(node, Node::flat_map("p.properties", expected.iter().copied()));
}

#[test]
fn properties_rejects_invalid_utf8() {
    let raw: RawInput = Box::new(Cursor::new(vec![0xff, 0xfe, b'=', b'x']));
    let result = PropertiesParser.load(raw, "bad.properties");
    expect_parse_error(&result, "bad.properties");
}

#[rstest]
#[case("properties", true)]
#[case("PROPERTIES", true)]
#[case(".properties", true)]
#[case("ini", false)]
#[case("", false)]
fn default_registry_locates_by_extension(#[case] ext: &str, #[case] found: bool) {
    let registry = DefaultParserRegistry::default();
    assert_eq!(registry.locate(ext).is_valid(), found);
}

#[test]
fn missing_parser_names_extension() {
    let registry = DefaultParserRegistry::empty();
    let located = registry.locate("toml");
    let errors = located.errors().expect("empty registry has no parsers");
    assert_eq!(errors.to_string(), "1: no parser for extension toml");
}

#[test]
fn registered_parsers_replace_defaults() {
    struct Fixed;
    impl Parser for Fixed {
        fn load(&self, _input: RawInput, description: &str) -> ConfigResult<Node> {
            ConfigResult::valid(Node::flat_map(description, [("fixed", "yes")]))
        }
    }

    let registry = DefaultParserRegistry::default().with_parser("Properties", Arc::new(Fixed));
    let parser = registry.locate("properties").ok().expect("parser registered");
    let node = load_ok(parser.as_ref(), "ignored=1", "x.properties");
    assert_eq!(node.get("fixed").and_then(Node::as_str), Some("yes"));
    assert!(registry.extensions().any(|ext| ext == "properties"));
}

#[test]
fn shared_registry_delegates() {
    let registry = Arc::new(DefaultParserRegistry::default());
    assert!(registry.locate("properties").is_valid());
}

#[cfg(feature = "toml")]
mod toml_format {
    use super::*;
    use crate::TomlParser;

    #[test]
    fn builds_nested_tree() {
        let node = load_ok(
            &TomlParser,
            "title = \"demo\"\nratio = 0.5\n[server]\nport = 8080\nsecure = true\ntags = [\"a\", \"b\"]\nstarted = 1979-05-27T07:32:00Z\n",
            "app.toml",
        );
        assert_eq!(node.at("title").and_then(Node::as_str), Some("demo"));
        assert_eq!(node.at("ratio").and_then(Node::as_scalar), Some(&Scalar::Float(0.5)));
        assert_eq!(
            node.at("server.port").and_then(Node::as_scalar),
            Some(&Scalar::Integer(8080))
        );
        assert_eq!(
            node.at("server.secure").and_then(Node::as_scalar),
            Some(&Scalar::Boolean(true))
        );
        assert_eq!(node.at("server.tags").map(Node::len), Some(2));
        assert_eq!(
            node.at("server.started").and_then(Node::as_str),
            Some("1979-05-27T07:32:00Z")
        );
        assert_eq!(node.at("server.port").and_then(Node::label), Some("app.toml"));
    }

    #[test]
    fn reports_syntax_errors() {
        let result = TomlParser.load(input("port = "), "broken.toml");
        expect_parse_error(&result, "broken.toml");
    }

    #[test]
    fn empty_document_is_empty_map() {
        let node = load_ok(&TomlParser, "", "empty.toml");
        assert_eq!(node.kind(), "map");
        assert!(node.is_empty());
    }
}

#[cfg(feature = "serde_json")]
mod json_format {
    use super::*;
    use crate::JsonParser;

    #[test]
    fn builds_nested_tree() {
        let node = load_ok(
            &JsonParser,
            r#"{"name": "demo", "limits": {"max": 10, "ratio": 1.5}, "empty": null, "list": [true]}"#,
            "app.json",
        );
        assert_eq!(node.at("name").and_then(Node::as_str), Some("demo"));
        assert_eq!(node.at("limits.max").and_then(Node::as_scalar), Some(&Scalar::Integer(10)));
        assert_eq!(node.at("limits.ratio").and_then(Node::as_scalar), Some(&Scalar::Float(1.5)));
        assert_eq!(node.at("empty").and_then(Node::as_scalar), Some(&Scalar::Null));
        assert_eq!(node.at("list").map(Node::len), Some(1));
    }

    #[test]
    fn reports_syntax_errors() {
        let result = JsonParser.load(input("{\"a\": }"), "broken.json");
        expect_parse_error(&result, "broken.json");
    }
}

#[cfg(feature = "yaml")]
mod yaml_format {
    use super::*;
    use crate::YamlParser;

    #[test]
    fn yes_remains_a_string() {
        let node = load_ok(&YamlParser, "recipient: yes\ncount: 3\n", "config.yaml");
        assert_eq!(node.at("recipient").and_then(Node::as_str), Some("yes"));
        assert_eq!(node.at("count").and_then(Node::as_scalar), Some(&Scalar::Integer(3)));
    }

    #[rstest]
    #[case("recipient: first\nrecipient: second")]
    #[case("recipient: [")]
    fn surfaces_errors(#[case] contents: &str) {
        let result = YamlParser.load(input(contents), "config.yaml");
        expect_parse_error(&result, "config.yaml");
    }

    #[test]
    fn yml_is_registered() {
        assert!(DefaultParserRegistry::default().locate("yml").is_valid());
    }
}
