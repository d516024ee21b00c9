//! Best-effort lookups over loosely structured JSON.
//!
//! InnerTube payloads have no fixed schema, so everything here works on a
//! plain [`serde_json::Value`] tree and answers `None` instead of failing when
//! the shape is not what was hoped for.

use serde_json::{Map, Value};

/// Nesting limit for [`find_first_string`]. Deeper branches are not visited.
pub const MAX_SEARCH_DEPTH: usize = 128;

/// Follow `path` through nested objects.
pub fn get<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |cur, key| cur.as_object()?.get(*key))
}

/// The string at `path`, if that is what lives there.
pub fn get_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    get(root, path)?.as_str()
}

pub fn get_array<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    get(root, path)?.as_array()
}

pub fn get_object<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Map<String, Value>> {
    get(root, path)?.as_object()
}

/// Depth-first search for the first property named `key` holding a non-blank string.
///
/// At each object the object's own `key` property is checked before its
/// values are descended into (in declared order); arrays are walked in order.
pub fn find_first_string<'a>(root: &'a Value, key: &str) -> Option<&'a str> {
    find_first_string_at(root, key, 0)
}

fn find_first_string_at<'a>(v: &'a Value, key: &str, depth: usize) -> Option<&'a str> {
    if depth > MAX_SEARCH_DEPTH {
        return None;
    }
    match v {
        Value::Object(map) => {
            if let Some(Value::String(s)) = map.get(key) {
                if !s.trim().is_empty() {
                    return Some(s);
                }
            }
            map.values()
                .find_map(|child| find_first_string_at(child, key, depth + 1))
        }
        Value::Array(arr) => arr
            .iter()
            .find_map(|child| find_first_string_at(child, key, depth + 1)),
        _ => None,
    }
}
