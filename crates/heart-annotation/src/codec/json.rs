//! JSON rendering for annotations.

use log::debug;
use serde_json::{Map, Number, Value as JsonValue};

use crate::error::RenderError;
use crate::model::{Annotation, StringDictionary, Value};

/// Renders an annotation as a compact JSON object.
///
/// Keys appear in the annotation's order. String literals are replaced by the
/// text the dictionary holds for them.
pub fn encode_json(
    annotation: &Annotation,
    dictionary: &StringDictionary,
) -> Result<String, RenderError> {
    let mut object = Map::with_capacity(annotation.len());
    for (name, value) in annotation.iter() {
        object.insert(name.to_string(), to_json_value(name, value, dictionary)?);
    }
    Ok(JsonValue::Object(object).to_string())
}

fn to_json_value(
    name: &str,
    value: &Value,
    dictionary: &StringDictionary,
) -> Result<JsonValue, RenderError> {
    let json = match value {
        Value::Void => JsonValue::Null,
        Value::Bool(v) => JsonValue::Bool(*v),
        Value::Int32(v) => JsonValue::from(*v),
        Value::Int64(v) => JsonValue::from(*v),
        Value::Float32(v) => float_to_json(f64::from(*v)),
        Value::Float64(v) => float_to_json(*v),
        Value::StringLiteral(handle) => match dictionary.get_string_for_handle(*handle) {
            Some(text) => JsonValue::String(text.to_string()),
            None => {
                debug!("json: '{}' has unknown string handle {}", name, handle.raw());
                return Err(RenderError::DanglingHandle {
                    name: name.to_string(),
                    handle: handle.raw(),
                });
            }
        },
        Value::Array(items) => JsonValue::Array(
            items
                .iter()
                .map(|item| to_json_value(name, item, dictionary))
                .collect::<Result<Vec<_>, _>>()?,
        ),
    };
    Ok(json)
}

/// JSON has no NaN or infinity; those become `null`.
fn float_to_json(v: f64) -> JsonValue {
    Number::from_f64(v).map_or(JsonValue::Null, JsonValue::Number)
}
