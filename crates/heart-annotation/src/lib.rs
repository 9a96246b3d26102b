//! Ordered, typed property annotations for HEART IR.
//!
//! An [`Annotation`] is a small set of named properties attached to a
//! declaration, processor or endpoint. Each property holds a [`Value`].
//! Annotations render to two text forms:
//!
//! - JSON, for tooling and manifests
//! - HEART, the `[[ name: value ]]` block inside IR listings
//!
//! # Quick Start
//!
//! ```rust
//! use heart_annotation::{Annotation, StringDictionary};
//!
//! let mut dictionary = StringDictionary::new();
//! let mut annotation = Annotation::new();
//!
//! annotation.set("voices", 8i32);
//! annotation.set("gain", 0.5f64);
//! annotation.set_string_literal("name", dictionary.get_handle_for_string("Lead").unwrap());
//! annotation.set("voices", 16i32);
//!
//! assert_eq!(annotation.names(), vec!["voices", "gain", "name"]);
//! assert_eq!(annotation.get_i64("voices", 0), 16);
//! assert_eq!(annotation.get_i64("missing", -1), -1);
//!
//! assert_eq!(
//!     annotation.to_json(&dictionary).unwrap(),
//!     r#"{"voices":16,"gain":0.5,"name":"Lead"}"#
//! );
//! assert_eq!(
//!     annotation.to_heart(&dictionary).unwrap(),
//!     r#"[[ voices: 16, gain: 0.5, name: "Lead" ]]"#
//! );
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Annotation, Value, StringDictionary)
//! - [`codec`]: JSON and HEART rendering
//! - [`syntax`]: Fixed tokens of the HEART annotation syntax
//! - [`error`]: Error types
//!
//! # Logging
//!
//! Mutations and render failures are reported through the [`log`] facade at
//! `trace` and `debug` level. No logger is installed by this crate.

pub mod codec;
pub mod error;
pub mod model;
pub mod syntax;

// Re-export commonly used types at crate root
pub use codec::{encode_heart, encode_json, quote_string};
pub use error::{DictionaryError, RenderError};
pub use model::{Annotation, Handle, StringDictionary, Value, ValueKind};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
