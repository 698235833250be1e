//! Post-processing of a compiled font using its source glyph set
//!
//! The compiled font and the outline compressor are collaborators: the
//! [`PostProcessor`] only sees them through [`CompiledFont`] and
//! [`OutlineCompressor`].

use std::sync::OnceLock;

use log::{info, warn};

use crate::{
    apply::{CharstringTable, GlyphOrder, apply},
    error::Result,
    glyph::GlyphSet,
    mapping::NameMapping,
    options::Options,
};

/// A compiled font whose glyph names can be rewritten
pub trait CompiledFont {
    /// Whether the font carries CFF charstrings
    fn has_charstrings(&self) -> bool;

    /// Borrow the glyph order and, if present, the charstring table together
    fn name_tables_mut(&mut self) -> (&mut GlyphOrder, Option<&mut CharstringTable>);
}

/// Compresses charstrings after renaming
pub trait OutlineCompressor: Send + Sync {
    fn compress(&self, charstrings: &mut CharstringTable) -> Result<()>;
}

/// A compiled font held entirely in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFont {
    pub glyph_order: GlyphOrder,
    pub charstrings: Option<CharstringTable>,
}

impl MemoryFont {
    pub fn new(glyph_order: GlyphOrder) -> Self {
        Self { glyph_order, charstrings: None }
    }

    pub fn with_charstrings(mut self, charstrings: CharstringTable) -> Self {
        self.charstrings = Some(charstrings);
        self
    }
}

impl CompiledFont for MemoryFont {
    fn has_charstrings(&self) -> bool {
        self.charstrings.is_some()
    }

    fn name_tables_mut(&mut self) -> (&mut GlyphOrder, Option<&mut CharstringTable>) {
        (&mut self.glyph_order, self.charstrings.as_mut())
    }
}

/// Renames and optimizes compiled fonts built from one glyph set
pub struct PostProcessor<'a> {
    glyphs: &'a GlyphSet,
    options: Options,
    compressor: Option<Box<dyn OutlineCompressor + 'a>>,
    mapping: OnceLock<NameMapping>,
}

impl<'a> PostProcessor<'a> {
    pub fn new(glyphs: &'a GlyphSet, options: Options) -> Self {
        Self { glyphs, options, compressor: None, mapping: OnceLock::new() }
    }

    pub fn with_compressor(mut self, compressor: impl OutlineCompressor + 'a) -> Self {
        self.compressor = Some(Box::new(compressor));
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Production names for every glyph of the source set
    ///
    /// Built on first use and shared by every font this processor handles.
    pub fn mapping(&self) -> &NameMapping {
        self.mapping.get_or_init(|| {
            let mapping = NameMapping::build_parallel(self.glyphs);
            for (production, sources) in mapping.collisions() {
                let sources: Vec<&str> = sources.iter().map(|s| s.as_str()).collect();
                warn!("production name '{production}' is shared by {}", sources.join(", "));
            }
            mapping
        })
    }

    /// Process a font and hand it back
    pub fn process<F: CompiledFont>(&self, mut font: F) -> Result<F> {
        self.process_in_place(&mut font)?;
        Ok(font)
    }

    pub fn process_in_place<F: CompiledFont + ?Sized>(&self, font: &mut F) -> Result<()> {
        if self.options.use_production_names {
            let (glyph_order, charstrings) = font.name_tables_mut();
            apply(self.mapping(), glyph_order, charstrings)?;
            info!("Renamed {} glyphs to production names", glyph_order.len());
        }

        if self.options.optimize_cff && font.has_charstrings() {
            match (&self.compressor, font.name_tables_mut().1) {
                (Some(compressor), Some(charstrings)) => {
                    compressor.compress(charstrings)?;
                    info!("Compressed {} charstrings", charstrings.len());
                }
                (None, _) => warn!("No outline compressor configured, charstrings left as they are"),
                (Some(_), None) => {}
            }
        }

        Ok(())
    }
}
