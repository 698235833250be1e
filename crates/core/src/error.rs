//! Error types for production name operations.

use std::result;

use thiserror::Error;

use crate::glyph_name::GlyphName;

/// Errors that can occur while renaming a compiled font.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no production name for glyph '{name}' in {structure}")]
    MissingMappingEntry { name: GlyphName, structure: &'static str },

    #[error("outline compression failed: {0}")]
    Compression(String),
}

pub type Result<T> = result::Result<T, Error>;
