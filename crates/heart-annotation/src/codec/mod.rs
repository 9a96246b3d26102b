//! Text renderings of annotations.
//!
//! - [`json`]: a JSON object keyed by property name
//! - [`heart`]: the `[[ name: value ]]` block embedded in HEART IR text
//!
//! The two renderers share value ordering and string-literal resolution but
//! nothing else.

pub mod heart;
pub mod json;

pub use heart::{encode_heart, quote_string};
pub use json::encode_json;
