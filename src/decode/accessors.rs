//! Path accessors over untyped payloads
//!
//! The service's JSON is deeply nested and only loosely stable. Instead of
//! chaining `.get()` calls and unwrapping, callers name the whole path once
//! (`"contents.sectionListRenderer.contents[0]"`) and get back either the value
//! or a single structural error that says which step was missing.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// One step of a payload path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'p> {
    Key(&'p str),
    Index(usize),
}

/// Split `a.b[0].c` into steps. Malformed indices return `None`.
fn segments(path: &str) -> Option<Vec<Segment<'_>>> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    let mut out = Vec::new();

    for part in path.split('.').filter(|p| !p.is_empty()) {
        let (name, mut rest) = match part.find('[') {
            Some(pos) => (&part[..pos], &part[pos..]),
            None => (part, ""),
        };
        if !name.is_empty() {
            out.push(Segment::Key(name));
        }
        while let Some(stripped) = rest.strip_prefix('[') {
            let end = stripped.find(']')?;
            out.push(Segment::Index(stripped[..end].parse().ok()?));
            rest = &stripped[end + 1..];
        }
        if !rest.is_empty() {
            return None;
        }
    }

    Some(out)
}

/// Walk `path`, returning the value or the prefix of the path that was missing
fn walk<'a>(value: &'a Value, path: &str) -> std::result::Result<&'a Value, String> {
    let steps = segments(path).ok_or_else(|| path.to_string())?;
    let mut current = value;
    let mut walked = String::new();

    for step in steps {
        match step {
            Segment::Key(key) => {
                if !walked.is_empty() {
                    walked.push('.');
                }
                walked.push_str(key);
                current = current.get(key).ok_or_else(|| walked.clone())?;
            }
            Segment::Index(index) => {
                walked.push_str(&format!("[{index}]"));
                current = current.get(index).ok_or_else(|| walked.clone())?;
            }
        }
    }

    Ok(current)
}

/// Look up a value by path, `None` if any step is absent
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    walk(value, path).ok()
}

/// Look up a value by path, failing with a structural error naming the missing step
pub fn require<'a>(value: &'a Value, path: &str) -> Result<&'a Value> {
    walk(value, path).map_err(|missing| Error::structural(missing, "missing from payload"))
}

/// Require an array at `path`
pub fn require_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>> {
    require(value, path)?
        .as_array()
        .ok_or_else(|| Error::structural(path, "expected an array"))
}

/// Require an object at `path`
pub fn require_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    require(value, path)?
        .as_object()
        .ok_or_else(|| Error::structural(path, "expected an object"))
}

/// Require a string at `path`
pub fn require_str<'a>(value: &'a Value, path: &str) -> Result<&'a str> {
    require(value, path)?
        .as_str()
        .ok_or_else(|| Error::structural(path, "expected a string"))
}

/// Array at `path`, `None` when absent or not an array
pub fn optional_array<'a>(value: &'a Value, path: &str) -> Option<&'a Vec<Value>> {
    lookup(value, path).and_then(Value::as_array)
}

/// String at `path`, `None` when absent or not a string
pub fn optional_str<'a>(value: &'a Value, path: &str) -> Option<&'a str> {
    lookup(value, path).and_then(Value::as_str)
}

/// Object at `path` that is present and has at least one field
pub fn non_empty_object<'a>(value: &'a Value, path: &str) -> Option<&'a Map<String, Value>> {
    lookup(value, path)
        .and_then(Value::as_object)
        .filter(|map| !map.is_empty())
}

/// Unwrap the `pbj=1` envelope: `[ {page}, {"response": {...}}, ... ]`
pub fn response_from_envelope(payload: &Value) -> Result<&Value> {
    let response = require(payload, "[1].response")?;
    if response.is_object() {
        Ok(response)
    } else {
        Err(Error::structural("[1].response", "expected an object"))
    }
}
