use serde_json::Value;
use super::{build_node, SchemaNode};

/// An ordered sequence reduced to one representative node per element kind.
///
/// Deduplication is by kind name only: the first element of each kind wins and
/// later elements of the same kind are dropped even when their structure
/// differs (`[{"a": 1}, {"b": 2}]` keeps only the `{"a": 1}` map).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListNode {
    len: usize,
    unique: Vec<SchemaNode>, // first-seen order
}

impl ListNode {
    pub fn new(xs: &[Value]) -> Self {
        let mut unique: Vec<SchemaNode> = Vec::new();
        for el in xs {
            let node = build_node(el);
            if unique.iter().all(|seen| seen.kind_name() != node.kind_name()) {
                unique.push(node);
            }
        }
        Self { len: xs.len(), unique }
    }

    /// Number of elements in the sampled list (not the number of kinds).
    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn unique(&self) -> &[SchemaNode] { &self.unique }

    /// More than one distinct element kind.
    pub fn is_union(&self) -> bool { self.unique.len() > 1 }
}
