//! Value classification: every decoded JSON value falls into exactly one kind.
use std::fmt;
use serde_json::Value;

// -------------------------------- Kinds ---------------------------------- //

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind { Null, Boolean, Number, String }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Primitive(PrimitiveKind),
    List,
    Map,
}

impl PrimitiveKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl Kind {
    /// The tag used in rendered descriptors and for list deduplication.
    pub fn name(self) -> &'static str {
        match self {
            Self::Primitive(p) => p.name(),
            Self::List => "list",
            Self::Map => "map",
        }
    }

    pub fn is_primitive(self) -> bool { matches!(self, Self::Primitive(_)) }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

// ------------------------------- Classify -------------------------------- //

pub fn classify(v: &Value) -> Kind {
    match v {
        Value::Null      => Kind::Primitive(PrimitiveKind::Null),
        Value::Bool(_)   => Kind::Primitive(PrimitiveKind::Boolean),
        Value::Number(_) => Kind::Primitive(PrimitiveKind::Number),
        Value::String(_) => Kind::Primitive(PrimitiveKind::String),
        Value::Array(_)  => Kind::List,
        Value::Object(_) => Kind::Map,
    }
}

// ------------------------------- Tests ------------------------------------ //
