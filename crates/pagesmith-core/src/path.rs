//! Dotted-path access into the dynamic prop/style bags.
//!
//! The properties panel addresses nested values with keys like
//! `style.background.color` or `options[0].label`. The grammar is
//! `segment ("." segment)*`, where a segment is a key followed by zero or
//! more `[index]` suffixes. A leading `style` segment routes into the
//! style bag; any other path resolves against `props`.
//!
//! Reads return `None` on missing intermediate nodes. Writes auto-create
//! intermediate objects (and pad arrays with null), and a write whose value
//! deep-equals the current one is a no-op so property editors cannot cause
//! redundant mutation cycles.

use crate::component::ComponentInstance;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while parsing a property path.
///
/// Paths are programmer input (panel metadata), not user input, so unlike
/// the store these are surfaced as real errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path")]
    Empty,
    #[error("empty segment at position {0}")]
    EmptySegment(usize),
    #[error("invalid index in segment `{0}`")]
    InvalidIndex(String),
    #[error("unclosed `[` in segment `{0}`")]
    UnclosedIndex(String),
}

/// One step of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Parse a dotted path into segments.
pub fn parse_path(path: &str) -> Result<Vec<PathSegment>, PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    let mut segments = Vec::new();
    for (pos, part) in path.split('.').enumerate() {
        if part.is_empty() {
            return Err(PathError::EmptySegment(pos));
        }
        let (key, rest) = match part.find('[') {
            Some(bracket) => part.split_at(bracket),
            None => (part, ""),
        };
        if key.is_empty() {
            return Err(PathError::EmptySegment(pos));
        }
        segments.push(PathSegment::Key(key.to_string()));
        let mut remainder = rest;
        while !remainder.is_empty() {
            let Some(stripped) = remainder.strip_prefix('[') else {
                return Err(PathError::InvalidIndex(part.to_string()));
            };
            let Some(close) = stripped.find(']') else {
                return Err(PathError::UnclosedIndex(part.to_string()));
            };
            let index: usize = stripped[..close]
                .parse()
                .map_err(|_| PathError::InvalidIndex(part.to_string()))?;
            segments.push(PathSegment::Index(index));
            remainder = &stripped[close + 1..];
        }
    }
    Ok(segments)
}

/// Read a nested value. Returns `None` when any node along the path is
/// missing or of the wrong shape.
pub fn get_in<'a>(root: &'a Value, segments: &[PathSegment]) -> Option<&'a Value> {
    let mut current = root;
    for segment in segments {
        current = match segment {
            PathSegment::Key(key) => current.as_object()?.get(key)?,
            PathSegment::Index(index) => current.as_array()?.get(*index)?,
        };
    }
    Some(current)
}

/// Write a nested value, creating intermediate nodes as needed. Returns
/// `true` when the tree changed, `false` when the value was already
/// deep-equal to the one being written.
pub fn set_in(root: &mut Value, segments: &[PathSegment], value: Value) -> bool {
    if get_in(root, segments) == Some(&value) {
        return false;
    }
    let Some((last, parents)) = segments.split_last() else {
        *root = value;
        return true;
    };
    let mut current = root;
    for segment in parents {
        current = match segment {
            PathSegment::Key(key) => {
                if !current.is_object() {
                    *current = Value::Object(Map::new());
                }
                let Value::Object(object) = current else {
                    return false;
                };
                object.entry(key.clone()).or_insert(Value::Null)
            }
            PathSegment::Index(index) => {
                if !current.is_array() {
                    *current = Value::Array(Vec::new());
                }
                let Value::Array(array) = current else {
                    return false;
                };
                if array.len() <= *index {
                    array.resize(*index + 1, Value::Null);
                }
                &mut array[*index]
            }
        };
    }
    match last {
        PathSegment::Key(key) => {
            if !current.is_object() {
                *current = Value::Object(Map::new());
            }
            if let Value::Object(object) = current {
                object.insert(key.clone(), value);
            }
        }
        PathSegment::Index(index) => {
            if !current.is_array() {
                *current = Value::Array(Vec::new());
            }
            if let Value::Array(array) = current {
                if array.len() <= *index {
                    array.resize(*index + 1, Value::Null);
                }
                array[*index] = value;
            }
        }
    }
    true
}

/// Which bag a path addresses, with the routing prefix stripped.
fn route(segments: &[PathSegment]) -> (bool, &[PathSegment]) {
    match segments.first() {
        Some(PathSegment::Key(key)) if key == "style" => (true, &segments[1..]),
        _ => (false, segments),
    }
}

impl ComponentInstance {
    /// Read a nested prop/style value by dotted path.
    /// A bare `style` path returns the whole style bag.
    pub fn value_at(&self, path: &str) -> Result<Option<Value>, PathError> {
        let segments = parse_path(path)?;
        let (is_style, rest) = route(&segments);
        let bag = if is_style { &self.style } else { &self.props };
        let root = Value::Object(bag.clone());
        Ok(get_in(&root, rest).cloned())
    }

    /// Write a nested prop/style value by dotted path. Returns `true` when
    /// the component changed.
    pub fn set_value_at(&mut self, path: &str, value: Value) -> Result<bool, PathError> {
        let segments = parse_path(path)?;
        let (is_style, rest) = route(&segments);
        if rest.is_empty() {
            // A bare `style` path replaces the whole bag.
            let Value::Object(map) = value else {
                return Ok(false);
            };
            if is_style && self.style != map {
                self.style = map;
                return Ok(true);
            }
            return Ok(false);
        }
        let bag = if is_style { &mut self.style } else { &mut self.props };
        let mut root = Value::Object(std::mem::take(bag));
        let changed = set_in(&mut root, rest, value);
        *bag = match root {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Ok(changed)
    }
}

impl crate::store::DocumentStore {
    /// Read a nested prop/style value of a component on the current page.
    pub fn component_value_at(&self, id: &str, path: &str) -> Result<Option<Value>, PathError> {
        match self.component(id) {
            Some(component) => component.value_at(path),
            None => Ok(None),
        }
    }

    /// Write a nested prop/style value of a component on the current page.
    /// Deep-equal writes and unknown ids mutate nothing.
    pub fn set_component_value(
        &mut self,
        id: &str,
        path: &str,
        value: Value,
    ) -> Result<(), PathError> {
        let Some(component) = self.component(id) else {
            // Validate the path anyway so callers learn about bad metadata.
            parse_path(path)?;
            return Ok(());
        };
        let mut updated = component.clone();
        if updated.set_value_at(path, value)? {
            let patch = crate::component::ComponentPatch {
                props: Some(updated.props),
                style: Some(updated.style),
                ..Default::default()
            };
            self.update_component(id, &patch);
        }
        Ok(())
    }
}
