//! Error types for binary font renaming.

use std::result;

use read_fonts::{ReadError, types::Tag};
use write_fonts::BuilderError;

/// Errors that can occur while reading or rewriting a binary font.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("failed to build font: {0}")]
    Build(#[from] BuilderError),

    #[error("fonts with '{0}' outlines cannot be renamed, glyph names live in the CFF charset")]
    UnsupportedOutlines(Tag),

    #[error(transparent)]
    Rename(#[from] prodname_core::Error),
}

pub type Result<T> = result::Result<T, Error>;
