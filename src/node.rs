//! Schema nodes: one typed descriptor per decoded value.
//!
//! Building is total and pure. Derived structure (a list's unique element
//! kinds, a map's per-key children) is computed once in the constructor and
//! never touched again, so a finished tree is immutable.
pub mod list;
pub mod map;

use serde_json::Value;

use crate::kind::{classify, Kind, PrimitiveKind};

pub use list::ListNode;
pub use map::MapNode;

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Primitive(PrimitiveNode),
    List(ListNode),
    Map(MapNode),
}

/// A scalar sample together with its primitive kind.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveNode {
    kind: PrimitiveKind,
    value: Value,
}

impl PrimitiveNode {
    pub fn kind(&self) -> PrimitiveKind { self.kind }
    pub fn value(&self) -> &Value { &self.value }
}

impl SchemaNode {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Primitive(p) => Kind::Primitive(p.kind),
            Self::List(_) => Kind::List,
            Self::Map(_) => Kind::Map,
        }
    }

    pub fn kind_name(&self) -> &'static str { self.kind().name() }
}

// ------------------------------- Builder --------------------------------- //

pub fn build_node(v: &Value) -> SchemaNode {
    match (classify(v), v) {
        (_, Value::Array(xs)) => SchemaNode::List(ListNode::new(xs)),
        (_, Value::Object(m)) => SchemaNode::Map(MapNode::new(m)),
        (Kind::Primitive(kind), scalar) => SchemaNode::Primitive(PrimitiveNode {
            kind,
            value: scalar.clone(),
        }),
        (Kind::List | Kind::Map, _) => unreachable!("arrays and objects are matched above"),
    }
}

impl From<&Value> for SchemaNode {
    fn from(v: &Value) -> Self { build_node(v) }
}

// ------------------------------- Tests ------------------------------------ //
