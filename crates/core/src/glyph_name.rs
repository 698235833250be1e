//! Glyph name types and utilities
//!
//! This module provides the `GlyphName` type which wraps glyph name strings
//! so that source names and production names can share map keys with `&str`.

use std::{
    borrow::Borrow,
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

/// A glyph name, either as written in the source or as a production name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphName(String);

impl GlyphName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Append `.suffix` to this name
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self(format!("{}.{suffix}", self.0))
    }
}

impl Deref for GlyphName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GlyphName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for GlyphName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for GlyphName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for GlyphName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for GlyphName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GlyphName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for GlyphName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<GlyphName> for String {
    fn from(GlyphName(name): GlyphName) -> Self {
        name
    }
}
