//! TrueType fonts whose glyph names live in the `post` table

use font_types::{FWord, Fixed};
use log::{debug, warn};
use prodname_core::{CharstringTable, CompiledFont, GlyphName, GlyphOrder};
use read_fonts::{
    FontRef, TableProvider,
    tables::post::Post as ReadPost,
    types::{GlyphId16, Tag},
};
use write_fonts::tables::post::Post;

use crate::{Result, error::Error, rewrite_font};

const CFF: Tag = Tag::new(b"CFF ");
const CFF2: Tag = Tag::new(b"CFF2");

/// A compiled TrueType font and its (possibly renamed) glyph order
#[derive(Debug, Clone)]
pub struct SfntFont {
    data: Vec<u8>,
    original: GlyphOrder,
    glyph_order: GlyphOrder,
}

impl SfntFont {
    /// Parse a font and read its glyph order from the `post` table.
    ///
    /// Glyphs without a `post` name get `glyphNNNNN` placeholders.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Result<Self> {
        let data = data.into();
        let glyph_order = read_glyph_order(&FontRef::new(&data)?)?;
        debug!("Read {} glyph names", glyph_order.len());

        Ok(Self { data, original: glyph_order.clone(), glyph_order })
    }

    pub fn glyph_order(&self) -> &GlyphOrder {
        &self.glyph_order
    }

    /// Whether the glyph order differs from the one the font was read with
    pub fn is_renamed(&self) -> bool {
        self.glyph_order != self.original
    }

    /// Serialize the font, writing the current glyph order to a version 2.0 `post` table
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        if !self.is_renamed() {
            return Ok(self.data.clone());
        }

        rewrite_font(&self.data, |font, builder| {
            let post = renamed_post(font, &self.glyph_order);
            builder.add_table(&post)?;
            Ok(())
        })
    }
}

impl CompiledFont for SfntFont {
    fn has_charstrings(&self) -> bool {
        false
    }

    fn name_tables_mut(&mut self) -> (&mut GlyphOrder, Option<&mut CharstringTable>) {
        (&mut self.glyph_order, None)
    }
}

fn read_glyph_order(font: &FontRef) -> Result<GlyphOrder> {
    for tag in [CFF, CFF2] {
        if font.table_data(tag).is_some() {
            return Err(Error::UnsupportedOutlines(tag));
        }
    }

    let num_glyphs = font.maxp()?.num_glyphs();
    let post = font.post().ok();
    if post.is_none() {
        warn!("Font has no post table, using placeholder glyph names");
    }

    Ok(GlyphOrder::new((0..num_glyphs).map(|gid| {
        post.as_ref()
            .and_then(|p| p.glyph_name(GlyphId16::new(gid)))
            .map(GlyphName::from)
            .unwrap_or_else(|| GlyphName::new(format!("glyph{gid:05}")))
    })))
}

/// Build a version 2.0 post table carrying `glyph_order`, keeping the
/// metrics of the existing table
fn renamed_post(font: &FontRef, glyph_order: &GlyphOrder) -> Post {
    let mut post = Post::new_v2(glyph_order.iter().map(|name| name.as_str()));

    if let Ok(old) = font.post() {
        copy_post_metrics(&old, &mut post);
    }
    post
}

fn copy_post_metrics(old: &ReadPost, post: &mut Post) {
    post.italic_angle = Fixed::from_bits(old.italic_angle().to_bits());
    post.underline_position = FWord::new(old.underline_position().to_i16());
    post.underline_thickness = FWord::new(old.underline_thickness().to_i16());
    post.is_fixed_pitch = old.is_fixed_pitch();
    post.min_mem_type42 = old.min_mem_type42();
    post.max_mem_type42 = old.max_mem_type42();
    post.min_mem_type1 = old.min_mem_type1();
    post.max_mem_type1 = old.max_mem_type1();
}
