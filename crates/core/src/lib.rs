mod apply;
mod error;
mod glyph;
mod glyph_name;
mod mapping;
mod options;
mod postprocess;
mod resolver;
mod types;

pub use apply::{Charstring, CharstringTable, GlyphOrder, apply};
pub use error::{Error, Result};
pub use glyph::{Glyph, GlyphSet};
pub use glyph_name::GlyphName;
pub use mapping::NameMapping;
pub use options::Options;
pub use postprocess::{CompiledFont, MemoryFont, OutlineCompressor, PostProcessor};
pub use resolver::NameResolver;
pub use types::Codepoint;

/// Compute production names for every glyph of a set.
///
/// This is a convenience wrapper around [`NameMapping::build`].
///
/// # Example
///
/// ```
/// use prodname_core::{Glyph, GlyphSet, production_names};
///
/// let glyphs: GlyphSet = [Glyph::new("a").with_unicode(0x61), Glyph::new("a.sc")]
///     .into_iter()
///     .collect();
/// let mapping = production_names(&glyphs);
/// assert_eq!(mapping.get("a.sc").unwrap(), "uni0061.sc");
/// ```
pub fn production_names(glyphs: &GlyphSet) -> NameMapping {
    NameMapping::build(glyphs)
}
