//! String interning for string-literal values.
//!
//! Annotations never store literal text inline. Text is interned once in a
//! [`StringDictionary`] and values carry the resulting [`Handle`].

use std::collections::HashMap;

use crate::error::DictionaryError;

/// Most strings a dictionary can hold; every non-null `u32` is a handle.
pub const MAX_STRINGS: usize = u32::MAX as usize;

/// A stable reference to text interned in a [`StringDictionary`].
///
/// Handle 0 is the null handle and always refers to the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Handle(u32);

impl Handle {
    /// The null handle (empty string).
    pub const NULL: Handle = Handle(0);

    /// Creates a handle from its raw representation.
    pub const fn new(raw: u32) -> Self {
        Handle(raw)
    }

    /// Returns the raw representation.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns true for the null handle.
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// Maps text to handles and back.
#[derive(Debug, Clone)]
pub struct StringDictionary {
    /// Interned strings; `strings[i]` has handle `i + 1`.
    strings: Vec<String>,
    /// Reverse lookup.
    handles: HashMap<String, Handle>,
    /// Interning fails once this many strings are held.
    limit: usize,
}

impl Default for StringDictionary {
    fn default() -> Self {
        Self::with_limit(MAX_STRINGS)
    }
}

impl StringDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty dictionary holding at most `limit` strings.
    ///
    /// The limit is clamped to [`MAX_STRINGS`].
    pub fn with_limit(limit: usize) -> Self {
        StringDictionary {
            strings: Vec::new(),
            handles: HashMap::new(),
            limit: limit.min(MAX_STRINGS),
        }
    }

    /// Returns the handle for `text`, interning it if needed.
    ///
    /// The empty string always maps to [`Handle::NULL`]. Text already held
    /// keeps its handle even when the dictionary is full.
    pub fn get_handle_for_string(&mut self, text: &str) -> Result<Handle, DictionaryError> {
        if text.is_empty() {
            return Ok(Handle::NULL);
        }
        if let Some(handle) = self.handles.get(text) {
            return Ok(*handle);
        }

        if self.strings.len() >= self.limit {
            return Err(DictionaryError::Full { limit: self.limit });
        }
        let raw = u32::try_from(self.strings.len() + 1)
            .map_err(|_| DictionaryError::Full { limit: self.limit })?;
        let handle = Handle(raw);
        self.strings.push(text.to_string());
        self.handles.insert(text.to_string(), handle);
        Ok(handle)
    }

    /// Resolves a handle to its text, or `None` if this dictionary never
    /// issued it.
    pub fn get_string_for_handle(&self, handle: Handle) -> Option<&str> {
        if handle.is_null() {
            return Some("");
        }
        self.strings
            .get(handle.0 as usize - 1)
            .map(String::as_str)
    }

    /// Returns the number of interned (non-empty) strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns true if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
