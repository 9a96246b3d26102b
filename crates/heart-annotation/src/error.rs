//! Error types for annotation rendering and string interning.

use thiserror::Error;

/// Errors that can occur while rendering an annotation to text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("property '{name}' refers to string handle {handle} which is not in the dictionary")]
    DanglingHandle { name: String, handle: u32 },
}

/// Errors raised while interning text in a string dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("string dictionary is full ({limit} strings)")]
    Full { limit: usize },
}
