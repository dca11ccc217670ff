//! Dotted-path lookup into JSON documents.
//!
//! Objects are indexed by key and arrays by decimal index. A path that
//! cannot be followed is an error, never a silent default.

use blades_models::ItemRecord;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot resolve '{segment}' in path '{path}' (resolved: '{resolved}')")]
pub struct PropertyResolutionError {
    /// The full path that was requested
    pub path: String,
    /// The segment that could not be followed
    pub segment: String,
    /// Segments successfully consumed before the failure, dot-joined
    pub resolved: String,
}

impl PropertyResolutionError {
    fn new(path: &str, segments: &[&str], failed_at: usize) -> Self {
        Self {
            path: path.to_string(),
            segment: segments[failed_at].to_string(),
            resolved: segments[..failed_at].join("."),
        }
    }
}

fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|idx| items.get(idx)),
        _ => None,
    }
}

fn child_mut<'a>(value: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match value {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(move |idx| items.get_mut(idx)),
        _ => None,
    }
}

pub fn get_nested<'a>(value: &'a Value, path: &str) -> Result<&'a Value, PropertyResolutionError> {
    let segments: Vec<&str> = path.split('.').collect();
    let mut current = value;
    for (i, segment) in segments.iter().enumerate() {
        current = child(current, segment).ok_or_else(|| PropertyResolutionError::new(path, &segments, i))?;
    }
    Ok(current)
}

pub fn get_nested_mut<'a>(value: &'a mut Value, path: &str) -> Result<&'a mut Value, PropertyResolutionError> {
    let segments: Vec<&str> = path.split('.').collect();
    let mut current = value;
    for (i, segment) in segments.iter().enumerate() {
        current = child_mut(current, segment).ok_or_else(|| PropertyResolutionError::new(path, &segments, i))?;
    }
    Ok(current)
}

/// Types that expose a document for dotted-path lookups
pub trait NestedProperty {
    fn property(&self, path: &str) -> Result<&Value, PropertyResolutionError>;
}

impl NestedProperty for Value {
    fn property(&self, path: &str) -> Result<&Value, PropertyResolutionError> {
        get_nested(self, path)
    }
}

/// Paths are resolved against the item's `system` data
impl NestedProperty for ItemRecord {
    fn property(&self, path: &str) -> Result<&Value, PropertyResolutionError> {
        get_nested(&self.system, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolves_leaf() {
        let doc = json!({ "a": { "b": { "c": 42 } } });
        assert_eq!(get_nested(&doc, "a.b.c").unwrap(), &json!(42));
    }

    #[test]
    fn test_resolves_intermediate_object() {
        let doc = json!({ "a": { "b": { "c": 42 } } });
        assert_eq!(get_nested(&doc, "a.b").unwrap(), &json!({ "c": 42 }));
    }

    #[test]
    fn test_missing_segment_reports_position() {
        let doc = json!({ "a": {} });
        let err = get_nested(&doc, "a.b.c").unwrap_err();
        assert_eq!(err.segment, "b");
        assert_eq!(err.resolved, "a");
        assert_eq!(err.path, "a.b.c");
    }

    #[test]
    fn test_missing_first_segment() {
        let doc = json!({ "x": 1 });
        let err = get_nested(&doc, "a").unwrap_err();
        assert_eq!(err.segment, "a");
        assert_eq!(err.resolved, "");
    }

    #[test]
    fn test_scalar_is_not_traversable() {
        let doc = json!({ "stress": { "value": 3 } });
        let err = get_nested(&doc, "stress.value.max").unwrap_err();
        assert_eq!(err.segment, "max");
        assert_eq!(err.resolved, "stress.value");
    }

    #[test]
    fn test_null_is_not_traversable() {
        let doc = json!({ "harm": null });
        assert!(get_nested(&doc, "harm.light").is_err());
    }

    #[test]
    fn test_array_index() {
        let doc = json!({ "traumas": ["cold", "haunted"] });
        assert_eq!(*get_nested(&doc, "traumas.1").unwrap(), "haunted");
        assert_eq!(get_nested(&doc, "traumas.2").unwrap_err().segment, "2");
        assert!(get_nested(&doc, "traumas.first").is_err());
    }

    #[test]
    fn test_get_nested_mut_updates_in_place() {
        let mut doc = json!({ "coins": { "value": 2 } });
        *get_nested_mut(&mut doc, "coins.value").unwrap() = json!(4);
        assert_eq!(doc["coins"]["value"], 4);
        assert_eq!(get_nested_mut(&mut doc, "coins.max").unwrap_err().segment, "max");
    }

    #[test]
    fn test_item_property_uses_system_data() {
        let item = ItemRecord::new("a", "class", "Cutter")
            .with_system(json!({ "base_skills": { "skirmish": 2 } }));
        assert_eq!(item.property("base_skills.skirmish").unwrap(), &json!(2));
        assert!(item.property("name").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = get_nested(&json!({ "a": {} }), "a.b.c").unwrap_err();
        assert_eq!(err.to_string(), "cannot resolve 'b' in path 'a.b.c' (resolved: 'a')");
    }
}
