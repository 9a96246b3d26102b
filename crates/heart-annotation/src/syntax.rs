//! Fixed tokens of the HEART annotation syntax.

/// Opens an annotation block.
pub const ANNOTATION_OPEN: &str = "[[";

/// Closes an annotation block.
pub const ANNOTATION_CLOSE: &str = "]]";

/// Separates a property name from its value.
pub const NAME_VALUE_SEPARATOR: &str = ": ";

/// Separates properties and array elements.
pub const ITEM_SEPARATOR: &str = ", ";

/// Literal for the void value.
pub const VOID_LITERAL: &str = "void";

/// Suffix marking a 64-bit integer literal.
pub const INT64_SUFFIX: &str = "L";

/// Suffix marking a 32-bit float literal.
pub const FLOAT32_SUFFIX: &str = "f";

/// Not-a-number literal.
pub const NAN_LITERAL: &str = "_nan";

/// Positive infinity literal.
pub const INF_LITERAL: &str = "_inf";

/// Negative infinity literal.
pub const NEG_INF_LITERAL: &str = "_ninf";
