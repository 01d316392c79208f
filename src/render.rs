//! Descriptor rendering.
//!
//! Output shapes:
//! - primitive: `{ "type": "<kind>" }`
//! - list with one (or zero) kinds: `{ "type": "list", "items": "<node as JSON string>" }`
//! - list with several kinds: `{ "type": "list", "oneOf": [ <node>, ... ] }`
//! - map: `{ "type": "map", "properties": { "<key>": <node>, ... } }`
//!
//! The `items` payload is the rendered child escaped as a JSON string literal
//! (empty for an empty list), so every rendering parses as JSON.
use std::fmt::{self, Write as _};
use serde_json::{json, Map, Value};

use crate::node::{ListNode, MapNode, SchemaNode};

pub fn render(node: &SchemaNode) -> String { node.to_string() }

impl fmt::Display for SchemaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaNode::Primitive(p) => write!(f, r#"{{ "type": "{}" }}"#, p.kind()),
            SchemaNode::List(l) => fmt_list(l, f),
            SchemaNode::Map(m) => fmt_map(m, f),
        }
    }
}

fn fmt_list(l: &ListNode, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if l.is_union() {
        write!(f, r#"{{ "type": "list", "oneOf": [ {} ] }}"#, joined(l.unique()))
    } else {
        let items = l.unique().first().map(render).unwrap_or_default();
        write!(f, r#"{{ "type": "list", "items": {} }}"#, quoted(&items))
    }
}

fn fmt_map(m: &MapNode, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if m.is_empty() {
        return f.write_str(r#"{ "type": "map", "properties": {} }"#);
    }
    let mut pairs = String::new();
    for (i, (k, node)) in m.properties().iter().enumerate() {
        if i > 0 { pairs.push_str(", "); }
        write!(pairs, "{}: {node}", quoted(k))?;
    }
    write!(f, r#"{{ "type": "map", "properties": {{ {pairs} }} }}"#)
}

fn joined(nodes: &[SchemaNode]) -> String {
    nodes.iter().map(render).collect::<Vec<_>>().join(", ")
}

/// JSON string literal, quotes included.
fn quoted(s: &str) -> String { Value::from(s).to_string() }

// ------------------------------ JSON view --------------------------------- //

/// The same descriptor as a structured value (key order preserved).
pub fn to_json(node: &SchemaNode) -> Value {
    match node {
        SchemaNode::Primitive(p) => json!({ "type": p.kind().name() }),
        SchemaNode::List(l) if l.is_union() => json!({
            "type": "list",
            "oneOf": l.unique().iter().map(to_json).collect::<Vec<_>>(),
        }),
        SchemaNode::List(l) => json!({
            "type": "list",
            "items": l.unique().first().map(render).unwrap_or_default(),
        }),
        SchemaNode::Map(m) => {
            let props: Map<String, Value> = m
                .properties()
                .iter()
                .map(|(k, n)| (k.clone(), to_json(n)))
                .collect();
            json!({ "type": "map", "properties": props })
        }
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::build_node;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn r(v: Value) -> String { render(&build_node(&v)) }

    #[test_case(json!(42), "number")]
    #[test_case(json!(123.123), "number")]
    #[test_case(json!("a"), "string")]
    #[test_case(json!(true), "boolean")]
    #[test_case(json!(null), "null")]
    fn primitive_renders_its_kind(v: Value, kind: &str) {
        assert_eq!(r(v), format!(r#"{{ "type": "{kind}" }}"#));
    }

    #[test]
    fn empty_list_renders_empty_items() {
        assert_eq!(r(json!([])), r#"{ "type": "list", "items": "" }"#);
    }

    #[test]
    fn homogeneous_list_renders_items() {
        assert_eq!(
            r(json!([1, 2, 3])),
            r#"{ "type": "list", "items": "{ \"type\": \"number\" }" }"#,
        );
    }

    #[test]
    fn heterogeneous_list_renders_one_of() {
        assert_eq!(
            r(json!([1, "a"])),
            r#"{ "type": "list", "oneOf": [ { "type": "number" }, { "type": "string" } ] }"#,
        );
    }

    #[test]
    fn one_of_ignores_later_shapes_of_a_seen_kind() {
        assert_eq!(
            r(json!([{"a": 1}, "s", {"b": true}])),
            r#"{ "type": "list", "oneOf": [ { "type": "map", "properties": { "a": { "type": "number" } } }, { "type": "string" } ] }"#,
        );
    }

    #[test]
    fn map_renders_properties() {
        assert_eq!(
            r(json!({"id": 42})),
            r#"{ "type": "map", "properties": { "id": { "type": "number" } } }"#,
        );
    }

    #[test]
    fn map_properties_follow_key_order() {
        assert_eq!(
            r(json!({"id": 42, "email": "jason@ynkr.org", "seen": {"iphone": true}})),
            r#"{ "type": "map", "properties": { "id": { "type": "number" }, "email": { "type": "string" }, "seen": { "type": "map", "properties": { "iphone": { "type": "boolean" } } } } }"#,
        );
    }

    #[test]
    fn empty_map_renders_valid_empty_object() {
        let out = r(json!({}));
        assert_eq!(out, r#"{ "type": "map", "properties": {} }"#);
        let parsed: Value = serde_json::from_str(&out).expect("valid JSON");
        assert_eq!(parsed["properties"], json!({}));
    }

    #[test]
    fn keys_are_escaped() {
        assert_eq!(
            r(json!({"say \"hi\"": null})),
            r#"{ "type": "map", "properties": { "say \"hi\"": { "type": "null" } } }"#,
        );
    }

    #[test]
    fn nested_structures_recurse() {
        assert_eq!(
            r(json!({"a": [{"b": 1}]})),
            r#"{ "type": "map", "properties": { "a": { "type": "list", "items": "{ \"type\": \"map\", \"properties\": { \"b\": { \"type\": \"number\" } } }" } } }"#,
        );
    }

    #[test]
    fn renderings_parse_as_json_and_match_json_view() {
        let samples = [
            json!({"id": 42, "bar": [{"a": "eh?", "b": {"bee": "B"}}, true, 123.123]}),
            json!({"misc": ["string", 42, {}, 123.123]}),
            json!({"tags": ["foo"]}),
            json!([[], {}]),
        ];
        for v in samples {
            let node = build_node(&v);
            let parsed: Value = serde_json::from_str(&render(&node)).expect("valid JSON");
            assert_eq!(parsed, to_json(&node), "for {v}");
        }
    }
}
