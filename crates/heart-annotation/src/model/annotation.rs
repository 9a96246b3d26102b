//! Ordered, uniquely named property sets.

use indexmap::IndexMap;
use log::trace;

use crate::codec::{encode_heart, encode_json};
use crate::error::RenderError;
use crate::model::{Handle, StringDictionary, Value};

/// A set of named properties, each holding a [`Value`].
///
/// Names are unique. Properties keep the order in which their names were first
/// set, and that order is used for iteration and for both text renderings.
/// Overwriting an existing name keeps its position.
///
/// Equality compares properties in order: the same entries set in a
/// different order are a different annotation.
#[derive(Debug, Clone, Default)]
pub struct Annotation {
    properties: IndexMap<String, Value>,
}

impl Annotation {
    /// Creates an empty annotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns a reference to the value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Returns the value stored under `name`, or [`Value::Void`] if absent.
    pub fn get_value(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }

    /// Returns the value stored under `name`, or `default` if absent.
    pub fn get_value_or(&self, name: &str, default: &Value) -> Value {
        self.get(name).unwrap_or(default).clone()
    }

    /// Returns true if a property called `name` exists.
    pub fn has_value(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Returns the property as a boolean.
    ///
    /// Falls back to `default` when the property is absent or holds a value
    /// with no boolean conversion.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Returns the property as a 64-bit float, or `default`.
    pub fn get_f64(&self, name: &str, default: f64) -> f64 {
        self.get(name).and_then(Value::as_f64).unwrap_or(default)
    }

    /// Returns the property as a 64-bit integer, or `default`.
    pub fn get_i64(&self, name: &str, default: i64) -> i64 {
        self.get(name).and_then(Value::as_i64).unwrap_or(default)
    }

    /// Sets `name` to a string literal referring to `handle`.
    pub fn set_string_literal(&mut self, name: impl Into<String>, handle: Handle) {
        self.set(name, Value::StringLiteral(handle));
    }

    /// Returns the dictionary handle stored under `name`.
    ///
    /// Returns `None` if the property is absent or was not set as a string
    /// literal.
    pub fn get_string_literal(&self, name: &str) -> Option<Handle> {
        self.get(name).and_then(Value::as_string_literal)
    }

    /// Inserts or overwrites a property.
    ///
    /// A new name is appended; an existing name is updated in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        trace!("annotation set '{}' ({})", name, value.kind().name());
        self.properties.insert(name, value);
    }

    /// Removes a property, returning its value. Absent names are ignored.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let removed = self.properties.shift_remove(name);
        if removed.is_some() {
            trace!("annotation removed '{}'", name);
        }
        removed
    }

    /// Returns the property names in order.
    pub fn names(&self) -> Vec<String> {
        self.properties.keys().cloned().collect()
    }

    /// Iterates over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Renders the properties as a JSON object.
    ///
    /// String literals are resolved through `dictionary`.
    pub fn to_json(&self, dictionary: &StringDictionary) -> Result<String, RenderError> {
        encode_json(self, dictionary)
    }

    /// Renders the properties as a HEART annotation block.
    ///
    /// An empty annotation renders as an empty string.
    pub fn to_heart(&self, dictionary: &StringDictionary) -> Result<String, RenderError> {
        encode_heart(self, dictionary)
    }
}

impl PartialEq for Annotation {
    fn eq(&self, other: &Self) -> bool {
        self.properties.len() == other.properties.len()
            && self.properties.iter().eq(other.properties.iter())
    }
}

impl<'a> IntoIterator for &'a Annotation {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Annotation {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut annotation = Annotation::new();
        annotation.extend(iter);
        annotation
    }
}

impl<K: Into<String>> Extend<(K, Value)> for Annotation {
    fn extend<I: IntoIterator<Item = (K, Value)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty() {
        let annotation = Annotation::new();
        assert!(annotation.is_empty());
        assert_eq!(annotation.len(), 0);
        assert!(annotation.names().is_empty());
    }

    #[test]
    fn test_absent_lookups_use_defaults() {
        let annotation = Annotation::new();
        assert!(!annotation.has_value("missing"));
        assert_eq!(annotation.get_value("missing"), Value::Void);
        assert_eq!(
            annotation.get_value_or("missing", &Value::Int32(9)),
            Value::Int32(9)
        );
        assert!(annotation.get_bool("missing", true));
        assert!(!annotation.get_bool("missing", false));
        assert_eq!(annotation.get_f64("missing", 2.5), 2.5);
        assert_eq!(annotation.get_i64("missing", -4), -4);
        assert_eq!(annotation.get_string_literal("missing"), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut annotation = Annotation::new();
        annotation.set("gain", 0.5f64);
        annotation.set("voices", 8i32);
        annotation.set("enabled", true);

        assert!(annotation.has_value("gain"));
        assert_eq!(annotation.get_value("gain"), Value::Float64(0.5));
        assert_eq!(
            annotation.get_value_or("gain", &Value::Void),
            Value::Float64(0.5)
        );
        assert_eq!(annotation.get_f64("gain", 0.0), 0.5);
        assert_eq!(annotation.get_i64("voices", 0), 8);
        assert_eq!(annotation.get_f64("voices", 0.0), 8.0);
        assert!(annotation.get_bool("enabled", false));
        assert_eq!(annotation.len(), 3);
    }

    #[test]
    fn test_unconvertible_value_uses_default() {
        let mut annotation = Annotation::new();
        annotation.set("list", Value::Array(vec![Value::Int32(1)]));
        assert_eq!(annotation.get_i64("list", 7), 7);
        assert!(annotation.get_bool("list", true));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut annotation = Annotation::new();
        annotation.set("a", 1i32);
        annotation.set("b", 2i32);
        annotation.set("a", 3i32);

        assert_eq!(annotation.names(), vec!["a", "b"]);
        assert_eq!(annotation.get_value("a"), Value::Int32(3));
        assert_eq!(annotation.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut annotation = Annotation::new();
        annotation.set("x", 1i32);
        assert_eq!(annotation.remove("x"), Some(Value::Int32(1)));
        assert!(!annotation.has_value("x"));
        assert_eq!(annotation.len(), 0);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut annotation = Annotation::new();
        annotation.set("a", 1i32);
        annotation.set("b", 2i32);
        assert_eq!(annotation.remove("zzz"), None);
        assert_eq!(annotation.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_keeps_order_of_rest() {
        let mut annotation = Annotation::new();
        for name in ["a", "b", "c", "d"] {
            annotation.set(name, true);
        }
        annotation.remove("b");
        assert_eq!(annotation.names(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_string_literal() {
        let mut dict = StringDictionary::new();
        let handle = dict.get_handle_for_string("hello").unwrap();

        let mut annotation = Annotation::new();
        annotation.set_string_literal("doc", handle);
        annotation.set("count", 3i64);

        assert_eq!(annotation.get_string_literal("doc"), Some(handle));
        assert_eq!(annotation.get_value("doc"), Value::StringLiteral(handle));
        assert_eq!(annotation.get_string_literal("count"), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Annotation::new();
        original.set("a", 1i32);
        original.set("b", 2i32);

        let mut copy = original.clone();
        copy.set("a", 10i32);
        copy.set("c", 3i32);
        copy.remove("b");

        assert_eq!(original.names(), vec!["a", "b"]);
        assert_eq!(original.len(), 2);
        assert_eq!(original.get_value("a"), Value::Int32(1));
        assert_eq!(copy.names(), vec!["a", "c"]);
    }

    #[test]
    fn test_equality_depends_on_order() {
        let mut forward = Annotation::new();
        forward.set("x", 1i32);
        forward.set("y", 2i32);

        let mut reverse = Annotation::new();
        reverse.set("y", 2i32);
        reverse.set("x", 1i32);

        assert_ne!(forward, reverse);

        let mut same = Annotation::new();
        same.set("x", 0i32);
        same.set("y", 2i32);
        same.set("x", 1i32);
        assert_eq!(forward, same);

        same.set("y", 3i32);
        assert_ne!(forward, same);
        assert_eq!(forward, forward.clone());
    }

    #[test]
    fn test_iteration_order() {
        let annotation: Annotation = vec![
            ("z", Value::Int32(1)),
            ("y", Value::Int32(2)),
            ("z", Value::Int32(3)),
        ]
        .into_iter()
        .collect();

        let pairs: Vec<_> = annotation.iter().collect();
        assert_eq!(
            pairs,
            vec![("z", &Value::Int32(3)), ("y", &Value::Int32(2))]
        );

        let names: Vec<&String> = (&annotation).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["z", "y"]);
    }

    #[derive(Debug, Clone)]
    enum Mutation {
        Set(String, i64),
        Remove(String),
    }

    fn mutation_strategy() -> impl Strategy<Value = Mutation> {
        let name = prop_oneof![Just("a"), Just("b"), Just("c"), Just("d"), Just("e")]
            .prop_map(str::to_string);
        prop_oneof![
            (name.clone(), any::<i64>()).prop_map(|(n, v)| Mutation::Set(n, v)),
            name.prop_map(Mutation::Remove),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

        #[test]
        fn matches_ordered_list_model(mutations in prop::collection::vec(mutation_strategy(), 0..40)) {
            let mut annotation = Annotation::new();
            let mut model: Vec<(String, i64)> = Vec::new();

            for mutation in mutations {
                match mutation {
                    Mutation::Set(name, value) => {
                        annotation.set(name.clone(), value);
                        match model.iter_mut().find(|(n, _)| *n == name) {
                            Some(entry) => entry.1 = value,
                            None => model.push((name, value)),
                        }
                    }
                    Mutation::Remove(name) => {
                        annotation.remove(&name);
                        model.retain(|(n, _)| *n != name);
                    }
                }
            }

            let expected_names: Vec<String> = model.iter().map(|(n, _)| n.clone()).collect();
            prop_assert_eq!(annotation.names(), expected_names);
            prop_assert_eq!(annotation.len(), model.len());
            for (name, value) in &model {
                prop_assert_eq!(annotation.get_i64(name, 0), *value);
                prop_assert_eq!(annotation.get_value(name), Value::Int64(*value));
            }
        }

        #[test]
        fn absent_names_return_any_default(
            int_default in any::<i64>(),
            float_default in any::<f64>(),
            bool_default in any::<bool>(),
            present in prop::collection::vec("[a-z]{1,4}", 0..6),
        ) {
            let mut annotation = Annotation::new();
            for name in &present {
                annotation.set(name.clone(), 1i32);
            }
            let missing = "MISSING";

            prop_assert!(!annotation.has_value(missing));
            prop_assert_eq!(annotation.get_value(missing), Value::Void);
            prop_assert_eq!(annotation.get_i64(missing, int_default), int_default);
            prop_assert_eq!(annotation.get_bool(missing, bool_default), bool_default);
            let got = annotation.get_f64(missing, float_default);
            prop_assert!(got.to_bits() == float_default.to_bits());
        }

        #[test]
        fn overwrite_never_moves(first in any::<i64>(), second in any::<i64>(), others in 0usize..5) {
            let mut annotation = Annotation::new();
            annotation.set("target", first);
            for i in 0..others {
                annotation.set(format!("other{i}"), true);
            }
            let before = annotation.names();
            annotation.set("target", second);
            prop_assert_eq!(annotation.names(), before);
            prop_assert_eq!(annotation.get_i64("target", 0), second);
        }
    }
}
