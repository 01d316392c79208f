//! Sketch the shape of a JSON sample as a small schema descriptor.
//!
//! `kind` classifies values, `node` builds the descriptor tree, `render`
//! turns it into text, and `session` keeps the schema of the last sample.
pub mod kind;
pub mod node;
pub mod render;
pub mod session;
pub mod error;
pub mod path_de;
pub mod jq_exec;
pub mod cli;

pub use error::{Error, Result};
pub use kind::{classify, Kind, PrimitiveKind};
pub use node::{build_node, ListNode, MapNode, PrimitiveNode, SchemaNode};
pub use render::{render, to_json};
pub use session::{infer_last, Session};
