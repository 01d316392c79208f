use indexmap::IndexMap;
use serde_json::{Map, Value};
use super::{build_node, SchemaNode};

/// A keyed map with one child node per key, in the document's key order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapNode {
    properties: IndexMap<String, SchemaNode>,
}

impl MapNode {
    pub fn new(map: &Map<String, Value>) -> Self {
        let properties = map
            .iter()
            .map(|(k, v)| (k.clone(), build_node(v)))
            .collect();
        Self { properties }
    }

    pub fn properties(&self) -> &IndexMap<String, SchemaNode> { &self.properties }
    pub fn get(&self, key: &str) -> Option<&SchemaNode> { self.properties.get(key) }
    pub fn is_empty(&self) -> bool { self.properties.is_empty() }
}
