//! Domain-specific newtypes

use std::fmt::{Display, Formatter, Result};

/// Largest codepoint that gets a `uniXXXX` production name
pub const BMP_MAX: u32 = 0xFFFF;

/// A Unicode codepoint
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codepoint(pub u32);

impl Codepoint {
    pub const fn new(cp: u32) -> Self {
        Self(cp)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Convert to a Rust char if valid
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    pub const fn is_bmp(self) -> bool {
        self.0 <= BMP_MAX
    }

    /// The production name for a glyph mapped to this codepoint.
    ///
    /// BMP codepoints become `uniXXXX`, everything above becomes `uXXXXX`
    /// with as many hex digits as the value needs.
    pub fn production_name(self) -> String {
        if self.is_bmp() { format!("uni{:04X}", self.0) } else { format!("u{:04X}", self.0) }
    }
}

impl From<u32> for Codepoint {
    fn from(cp: u32) -> Self {
        Self(cp)
    }
}

impl From<char> for Codepoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl From<Codepoint> for u32 {
    fn from(cp: Codepoint) -> Self {
        cp.0
    }
}

impl Display for Codepoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "U+{:04X}", self.0)
    }
}
