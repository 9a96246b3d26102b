//! HEART rendering for annotations.
//!
//! An annotation contributes a single block to the surrounding IR line:
//!
//! ```text
//! [[ name: "text", gain: 0.5, voices: 8, seed: 12L, "odd name": true ]]
//! ```
//!
//! Empty annotations contribute nothing.

use log::debug;

use crate::error::RenderError;
use crate::model::{Annotation, StringDictionary, Value};
use crate::syntax::{
    ANNOTATION_CLOSE, ANNOTATION_OPEN, FLOAT32_SUFFIX, INF_LITERAL, INT64_SUFFIX, ITEM_SEPARATOR,
    NAME_VALUE_SEPARATOR, NAN_LITERAL, NEG_INF_LITERAL, VOID_LITERAL,
};

/// Renders an annotation as a HEART `[[ ... ]]` block.
pub fn encode_heart(
    annotation: &Annotation,
    dictionary: &StringDictionary,
) -> Result<String, RenderError> {
    if annotation.is_empty() {
        return Ok(String::new());
    }

    let mut properties = Vec::with_capacity(annotation.len());
    for (name, value) in annotation.iter() {
        let mut entry = encode_name(name);
        entry.push_str(NAME_VALUE_SEPARATOR);
        write_value(&mut entry, name, value, dictionary)?;
        properties.push(entry);
    }

    Ok(format!(
        "{} {} {}",
        ANNOTATION_OPEN,
        properties.join(ITEM_SEPARATOR),
        ANNOTATION_CLOSE
    ))
}

/// Names that are plain identifiers are written bare, anything else quoted.
fn encode_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        quote_string(name)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn write_value(
    out: &mut String,
    name: &str,
    value: &Value,
    dictionary: &StringDictionary,
) -> Result<(), RenderError> {
    match value {
        Value::Void => out.push_str(VOID_LITERAL),
        Value::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
        Value::Int32(v) => out.push_str(&v.to_string()),
        Value::Int64(v) => {
            out.push_str(&v.to_string());
            out.push_str(INT64_SUFFIX);
        }
        Value::Float32(v) => {
            if v.is_finite() {
                out.push_str(&format!("{v:?}"));
            } else {
                out.push_str(non_finite_literal(f64::from(*v)));
            }
            out.push_str(FLOAT32_SUFFIX);
        }
        Value::Float64(v) => {
            if v.is_finite() {
                // Debug keeps a `.` or exponent, so the literal never reads as an integer
                out.push_str(&format!("{v:?}"));
            } else {
                out.push_str(non_finite_literal(*v));
            }
        }
        Value::StringLiteral(handle) => match dictionary.get_string_for_handle(*handle) {
            Some(text) => out.push_str(&quote_string(text)),
            None => {
                debug!("heart: '{}' has unknown string handle {}", name, handle.raw());
                return Err(RenderError::DanglingHandle {
                    name: name.to_string(),
                    handle: handle.raw(),
                });
            }
        },
        Value::Array(items) => {
            out.push_str("{ ");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(ITEM_SEPARATOR);
                }
                write_value(out, name, item, dictionary)?;
            }
            out.push_str(" }");
        }
    }
    Ok(())
}

fn non_finite_literal(v: f64) -> &'static str {
    if v.is_nan() {
        NAN_LITERAL
    } else if v > 0.0 {
        INF_LITERAL
    } else {
        NEG_INF_LITERAL
    }
}

/// Quotes text as a HEART string literal.
pub fn quote_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
