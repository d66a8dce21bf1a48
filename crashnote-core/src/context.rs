use std::sync::RwLock;

use serde_json::{Map, Value};

/// The process-wide context attached to every notice.
///
/// The context is a flat map of JSON values.  Setting context merges the
/// new keys over the existing ones, resetting replaces the map as a whole.
/// Every notice carries a snapshot taken when the notice is assembled.
#[derive(Debug, Default)]
pub struct Context {
    values: RwLock<Map<String, Value>>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Context {
        Context::default()
    }

    /// Merges `partial` into the context; its keys win.
    pub fn merge(&self, partial: Map<String, Value>) {
        let mut values = self.values.write().unwrap();
        values.extend(partial);
    }

    /// Replaces the whole context.
    pub fn replace(&self, values: Map<String, Value>) {
        *self.values.write().unwrap() = values;
    }

    /// Returns a copy of the current context.
    pub fn snapshot(&self) -> Map<String, Value> {
        self.values.read().unwrap().clone()
    }

    /// Returns a copy of the current context with `extra` merged over it.
    pub fn snapshot_with(&self, extra: &Map<String, Value>) -> Map<String, Value> {
        let mut values = self.snapshot();
        values.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        values
    }

    /// Returns `true` if no context has been set.
    pub fn is_empty(&self) -> bool {
        self.values.read().unwrap().is_empty()
    }
}

/// Turns a caller supplied value into context entries.
///
/// Only objects carry context; anything else yields `None`.
pub(crate) fn context_from_value(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn map(value: Value) -> Map<String, Value> {
        context_from_value(value).unwrap()
    }

    #[test]
    fn test_merge_keeps_existing_keys() {
        let context = Context::new();
        context.merge(map(json!({"user_id": 1, "plan": "free"})));
        context.merge(map(json!({"plan": "pro", "locale": "de"})));
        assert_eq!(
            Value::Object(context.snapshot()),
            json!({"user_id": 1, "plan": "pro", "locale": "de"})
        );
    }

    #[test]
    fn test_replace_drops_existing_keys() {
        let context = Context::new();
        context.merge(map(json!({"user_id": 1})));
        context.replace(map(json!({"session": "abc"})));
        assert_eq!(Value::Object(context.snapshot()), json!({"session": "abc"}));

        context.replace(Map::new());
        assert!(context.is_empty());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let context = Context::new();
        context.merge(map(json!({"a": 1})));
        let snapshot = context.snapshot();
        context.merge(map(json!({"b": 2})));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_snapshot_with_extra_values() {
        let context = Context::new();
        context.merge(map(json!({"a": 1, "b": 1})));
        let values = context.snapshot_with(&map(json!({"b": 2})));
        assert_eq!(Value::Object(values), json!({"a": 1, "b": 2}));
        assert_eq!(context.snapshot()["b"], 1);
    }

    #[test]
    fn test_only_objects_carry_context() {
        assert_eq!(context_from_value(json!("text")), None);
        assert_eq!(context_from_value(json!([1, 2])), None);
        assert_eq!(context_from_value(Value::Null), None);
    }
}
