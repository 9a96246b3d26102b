//! Data model types for annotations.
//!
//! - Values (typed property payloads)
//! - String dictionary (interned string-literal text)
//! - Annotations (ordered named properties)

pub mod annotation;
pub mod dictionary;
pub mod value;

pub use annotation::Annotation;
pub use dictionary::{Handle, MAX_STRINGS, StringDictionary};
pub use value::{Value, ValueKind};
