//! Building a glyph set from a UFO source.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use norad::Font;
use prodname_core::{Glyph, GlyphSet};

use crate::config::{GLYPH_ORDER_KEY, POSTSCRIPT_NAME_KEY, POSTSCRIPT_NAMES_KEY};

/// Load a UFO and build the glyph set of its default layer.
pub fn load_glyph_set(path: impl AsRef<Path>) -> Result<GlyphSet> {
    let path = path.as_ref();
    let font =
        Font::load(path).with_context(|| format!("Failed to load UFO: {}", path.display()))?;
    let glyphs = glyph_set_from_ufo(&font);
    info!("Loaded {} glyphs from {}", glyphs.len(), path.display());
    Ok(glyphs)
}

/// Build a glyph set from the default layer of a UFO.
///
/// Explicit production names come from the glyph lib's `public.postscriptName`,
/// falling back to the font lib's `public.postscriptNames`. Only the first
/// codepoint of each glyph is used. Glyphs listed in `public.glyphOrder` come
/// first, in that order; the rest follow in layer order.
pub fn glyph_set_from_ufo(font: &Font) -> GlyphSet {
    let postscript_names = font.lib.get(POSTSCRIPT_NAMES_KEY).and_then(|v| v.as_dictionary());

    let layer: GlyphSet = font
        .default_layer()
        .iter()
        .map(|glyph| {
            let name = glyph.name().to_string();
            let mut record = Glyph::new(name.as_str());

            if let Some(codepoint) = glyph.codepoints.iter().next() {
                record = record.with_unicode(codepoint as u32);
            }

            let production_name = glyph
                .lib
                .get(POSTSCRIPT_NAME_KEY)
                .and_then(|v| v.as_string())
                .or_else(|| postscript_names?.get(&name)?.as_string());
            if let Some(production_name) = production_name {
                record = record.with_production_name(production_name);
            }
            record
        })
        .collect();

    let Some(order) = font.lib.get(GLYPH_ORDER_KEY).and_then(|v| v.as_array()) else {
        return layer;
    };
    debug!("Ordering glyphs by {GLYPH_ORDER_KEY} ({} entries)", order.len());

    let mut ordered = GlyphSet::new();
    for name in order.iter().filter_map(|v| v.as_string()) {
        if let Some(glyph) = layer.get(name)
            && !ordered.contains(name)
        {
            ordered.insert(glyph.clone());
        }
    }
    let rest: Vec<Glyph> =
        layer.iter().filter(|g| !ordered.contains(g.name())).cloned().collect();
    ordered.extend(rest);
    ordered
}

#[cfg(test)]
mod tests {
    use plist::{Dictionary, Value};

    use super::*;

    fn glyph(name: &str, codepoints: &[char]) -> norad::Glyph {
        let mut glyph = norad::Glyph::new(name);
        for &c in codepoints {
            glyph.codepoints.insert(c);
        }
        glyph
    }

    fn test_font() -> Font {
        let mut font = Font::new();
        let layer = font.default_layer_mut();
        layer.insert_glyph(glyph("a", &['a']));
        layer.insert_glyph(glyph("A", &['A', 'Α']));
        layer.insert_glyph(glyph("a.sc", &[]));

        let mut euro = glyph("euro", &[]);
        euro.lib.insert(POSTSCRIPT_NAME_KEY.into(), Value::String("Euro".into()));
        layer.insert_glyph(euro);

        layer.insert_glyph(glyph("f_i", &[]));
        font
    }

    #[test]
    fn test_reads_codepoints_and_glyph_lib() {
        let glyphs = glyph_set_from_ufo(&test_font());

        assert_eq!(glyphs.len(), 5);
        assert_eq!(glyphs.get("a").unwrap().unicode().unwrap().to_u32(), 0x61);
        assert_eq!(glyphs.get("A").unwrap().unicode().unwrap().to_u32(), 0x41);
        assert_eq!(glyphs.get("a.sc").unwrap().unicode(), None);
        assert_eq!(glyphs.get("euro").unwrap().production_name().unwrap(), "Euro");
        assert_eq!(glyphs.get("f_i").unwrap().production_name(), None);
    }

    #[test]
    fn test_font_lib_postscript_names() {
        let mut font = test_font();
        let mut names = Dictionary::new();
        names.insert("f_i".into(), Value::String("fi".into()));
        names.insert("euro".into(), Value::String("uni20AC".into()));
        font.lib.insert(POSTSCRIPT_NAMES_KEY.into(), Value::Dictionary(names));

        let glyphs = glyph_set_from_ufo(&font);
        assert_eq!(glyphs.get("f_i").unwrap().production_name().unwrap(), "fi");
        // the glyph lib takes precedence over the font lib
        assert_eq!(glyphs.get("euro").unwrap().production_name().unwrap(), "Euro");
    }

    #[test]
    fn test_glyph_order_from_font_lib() {
        let mut font = test_font();
        let order = ["f_i", "missing", "a", "f_i"].map(|n| Value::String(n.into())).to_vec();
        font.lib.insert(GLYPH_ORDER_KEY.into(), Value::Array(order));

        let glyphs = glyph_set_from_ufo(&font);
        let names: Vec<&str> = glyphs.iter().map(|g| g.name().as_str()).collect();
        assert_eq!(names.len(), 5);
        assert_eq!(&names[..2], ["f_i", "a"]);
    }
}
