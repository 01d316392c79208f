//! Document decoding with JSON-path context in error messages.
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

pub fn from_str_with_path<T: DeserializeOwned>(src: &str, origin: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| Error::Decode {
        origin: origin.to_string(),
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}

/// Split a source into documents: the whole text, or one per non-blank line.
pub fn decode_documents(src: &str, origin: &str, ndjson: bool) -> Result<Vec<Value>> {
    if !ndjson {
        return Ok(vec![from_str_with_path(src, origin)?]);
    }
    src.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| from_str_with_path(line, &format!("{origin}:{}", i + 1)))
        .collect()
}

/// Apply an optional JSON Pointer, failing when it selects nothing.
pub fn select_pointer(v: Value, pointer: Option<&str>, origin: &str) -> Result<Value> {
    match pointer {
        None => Ok(v),
        Some(ptr) => v.pointer(ptr).cloned().ok_or_else(|| Error::Pointer {
            origin: origin.to_string(),
            pointer: ptr.to_string(),
        }),
    }
}
