//! Unit tests for the figment hand-off.

use figment::{Figment, Provider};
use serde::Deserialize;

use super::NodeProvider;
use crate::{ListNode, MapNode, Node, Scalar, ScalarNode};

#[derive(Debug, Deserialize, PartialEq)]
struct Server {
    host: String,
    port: i64,
    debug: Option<bool>,
    ratio: f64,
}

fn typed_tree() -> Node {
    let mut map = MapNode::new("app.toml");
    map.insert("host", ScalarNode::new("localhost".into(), "app.toml").into());
    map.insert("port", ScalarNode::new(Scalar::Integer(8080), "app.toml").into());
    map.insert("debug", ScalarNode::new(Scalar::Null, "app.toml").into());
    map.insert("ratio", ScalarNode::new(Scalar::Float(0.25), "app.toml").into());
    map.into()
}

#[test]
fn extracts_typed_values() {
    let server: Server = Figment::from(NodeProvider::new(typed_tree()))
        .extract()
        .expect("tree decodes");
    assert_eq!(
        server,
        Server {
            host: "localhost".to_owned(),
            port: 8080,
            debug: None,
            ratio: 0.25,
        }
    );
}

#[test]
fn metadata_uses_node_label() {
    let provider = NodeProvider::from(Node::flat_map("sysprops", [("a", "b")]));
    assert_eq!(provider.metadata().name, "sysprops");
}

#[test]
fn undefined_contributes_nothing() {
    let figment = Figment::from(NodeProvider::new(Node::flat_map("envars", [("k", "file")])))
        .merge(NodeProvider::new(Node::Undefined));
    let value: String = figment.extract_inner("k").expect("earlier value survives");
    assert_eq!(value, "file");
}

#[test]
fn later_nodes_override_earlier_ones() {
    let figment = Figment::from(NodeProvider::new(Node::flat_map("file", [("k", "file")])))
        .merge(NodeProvider::new(Node::flat_map("sysprops", [("k", "override")])));
    let value: String = figment.extract_inner("k").expect("key present");
    assert_eq!(value, "override");
}

#[test]
fn non_map_roots_are_rejected() {
    let list: Node = ListNode::new(Vec::new(), "list.json").into();
    let err = NodeProvider::new(list)
        .data()
        .expect_err("lists cannot be a root");
    assert!(err.to_string().contains("must be a map"), "unexpected: {err}");
}
