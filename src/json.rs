//! JSON boundary.
//!
//! Untyped input carries no element types, so integer literals `0` and `1`
//! are ambiguous between bits and numbers. [`ClassifierSettings::integer_bits`]
//! decides: when enabled, an array consisting only of booleans and those
//! literals reads as a bit vector. `1.0` is always a number.

use serde_json::Value;

use crate::classifier::Classifier;
use crate::errors::Result;
use crate::glsl_type::GlslTypeSet;
use crate::settings::ClassifierSettings;
use crate::shape::{Component, UniformValue};

impl UniformValue {
    /// Converts a JSON value into its uniform shape.
    #[must_use]
    pub fn from_json(value: &Value, settings: &ClassifierSettings) -> Self {
        match value {
            Value::Null => UniformValue::Void,
            Value::Bool(b) => UniformValue::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(UniformValue::Object, UniformValue::Number),
            Value::String(s) => UniformValue::Text(s.clone()),
            Value::Array(items) => sequence_from_json(items, settings),
            Value::Object(_) => UniformValue::Object,
        }
    }
}

fn integer_bit(value: &Value) -> Option<u8> {
    match value.as_u64()? {
        0 => Some(0),
        1 => Some(1),
        _ => None,
    }
}

fn sequence_from_json(items: &[Value], settings: &ClassifierSettings) -> UniformValue {
    let as_bits = settings.integer_bits
        && items.iter().any(|v| integer_bit(v).is_some())
        && items.iter().all(|v| v.is_boolean() || integer_bit(v).is_some());

    let mut components = Vec::with_capacity(items.len());
    for item in items {
        let component = match item {
            Value::Bool(b) => Component::Bool(*b),
            Value::Number(_) if as_bits => match integer_bit(item) {
                Some(bit) => Component::Bit(bit),
                None => return UniformValue::Object,
            },
            Value::Number(n) => match n.as_f64() {
                Some(v) => Component::Number(v),
                None => return UniformValue::Object,
            },
            // Nested containers and strings are not uniform components.
            _ => return UniformValue::Object,
        };
        components.push(component);
    }
    UniformValue::Sequence(components)
}

/// Parses `text` as JSON and classifies it.
pub fn classify_json(text: &str, settings: &ClassifierSettings) -> Result<GlslTypeSet> {
    let value: Value = serde_json::from_str(text)?;
    Classifier::new(*settings).classify(&UniformValue::from_json(&value, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_literals_become_bits() {
        let settings = ClassifierSettings::default();
        assert_eq!(
            UniformValue::from_json(&json!([1, 0]), &settings),
            UniformValue::bits(&[1, 0])
        );
        assert_eq!(
            UniformValue::from_json(&json!([true, 0, 1]), &settings),
            UniformValue::Sequence(vec![Component::Bool(true), Component::Bit(0), Component::Bit(1)])
        );
    }

    #[test]
    fn test_float_literals_stay_numeric() {
        let settings = ClassifierSettings::default();
        assert_eq!(
            UniformValue::from_json(&json!([1.0, 0.0]), &settings),
            UniformValue::numbers(&[1.0, 0.0])
        );
        assert_eq!(
            UniformValue::from_json(&json!([1, 2]), &settings),
            UniformValue::numbers(&[1.0, 2.0])
        );
    }

    #[test]
    fn test_nested_array_is_object() {
        let settings = ClassifierSettings::default();
        assert_eq!(
            UniformValue::from_json(&json!([[1.0], [2.0]]), &settings),
            UniformValue::Object
        );
    }
}
