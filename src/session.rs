//! Inference session: holds the schema of the most recently received sample.
//!
//! Samples are not merged. Each `receive_sample` replaces whatever schema the
//! session held before, and only the last sample is reflected by `render`.
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::node::{build_node, SchemaNode};
use crate::render::render;

#[derive(Debug, Default)]
pub struct Session {
    schema: Option<SchemaNode>,
    samples_seen: usize,
}

impl Session {
    pub fn new() -> Self { Self::default() }

    pub fn receive_sample(&mut self, v: &Value) {
        let node = build_node(v);
        self.samples_seen += 1;
        debug!(sample = self.samples_seen, kind = node.kind_name(), "received sample");
        if let Some(prev) = self.schema.replace(node) {
            warn!(
                sample = self.samples_seen,
                discarded_kind = prev.kind_name(),
                "sample replaced the previous schema; earlier samples are not merged"
            );
        }
    }

    pub fn render(&self) -> Result<String> {
        self.schema.as_ref().map(render).ok_or(Error::EmptyState)
    }

    pub fn schema(&self) -> Option<&SchemaNode> { self.schema.as_ref() }
    pub fn samples_seen(&self) -> usize { self.samples_seen }
}

/// Feed every value to a fresh session and render what the last one left behind.
pub fn infer_last<'a, I>(values: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Value>
{
    let mut session = Session::new();
    for v in values { session.receive_sample(v); }
    session.render()
}

// ------------------------------- Tests ------------------------------------ //
