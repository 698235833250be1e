//! prodname CLI library.

pub mod cli;
pub mod config;
pub mod io;
pub mod parallel;
pub mod rename;
pub mod source;

pub use rename::rename_fonts;
pub use source::{glyph_set_from_ufo, load_glyph_set};
