//! Propagating a name mapping into a compiled font's name-bearing structures

use indexmap::IndexMap;
use log::warn;

use crate::{error::Result, glyph_name::GlyphName, mapping::NameMapping};

/// The glyph order recorded in a compiled font
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphOrder(Vec<GlyphName>);

impl GlyphOrder {
    pub fn new(names: impl IntoIterator<Item = impl Into<GlyphName>>) -> Self {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn names(&self) -> &[GlyphName] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlyphName> {
        self.0.iter()
    }
}

/// A compiled outline program, kept opaque
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charstring(pub Vec<u8>);

/// Name-keyed charstrings plus the charset listing them in glyph order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharstringTable {
    charstrings: IndexMap<GlyphName, Charstring>,
    charset: Vec<GlyphName>,
}

impl CharstringTable {
    pub fn new(
        charstrings: impl IntoIterator<Item = (GlyphName, Charstring)>,
        charset: impl IntoIterator<Item = GlyphName>,
    ) -> Self {
        Self {
            charstrings: charstrings.into_iter().collect(),
            charset: charset.into_iter().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Charstring> {
        self.charstrings.get(name)
    }

    pub fn charstrings(&self) -> impl Iterator<Item = (&GlyphName, &Charstring)> {
        self.charstrings.iter()
    }

    pub fn charstrings_mut(&mut self) -> impl Iterator<Item = (&GlyphName, &mut Charstring)> {
        self.charstrings.iter_mut()
    }

    pub fn charset(&self) -> &[GlyphName] {
        &self.charset
    }

    pub fn len(&self) -> usize {
        self.charstrings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charstrings.is_empty()
    }
}

/// Rename every glyph reference in `glyph_order` and, if present, `charstrings`.
///
/// Glyph order and charset entries must all be mapped; charstring keys
/// without an entry (synthetic glyphs such as `.notdef`) keep their names.
/// Nothing is modified unless every lookup succeeds.
pub fn apply(
    mapping: &NameMapping,
    glyph_order: &mut GlyphOrder,
    charstrings: Option<&mut CharstringTable>,
) -> Result<()> {
    let new_order = rename_all(mapping, &glyph_order.0, "glyph order")?;

    let Some(table) = charstrings else {
        glyph_order.0 = new_order;
        return Ok(());
    };

    let new_charset = rename_all(mapping, &table.charset, "charset")?;
    let mut new_charstrings = IndexMap::with_capacity(table.charstrings.len());
    for (name, charstring) in table.charstrings.drain(..) {
        let renamed = mapping.rename_or_keep(&name);
        if new_charstrings.insert(renamed, charstring).is_some() {
            warn!("charstring for '{name}' replaces an earlier glyph with the same production name");
        }
    }

    glyph_order.0 = new_order;
    table.charstrings = new_charstrings;
    table.charset = new_charset;
    Ok(())
}

fn rename_all(
    mapping: &NameMapping,
    names: &[GlyphName],
    structure: &'static str,
) -> Result<Vec<GlyphName>> {
    names.iter().map(|name| mapping.rename(name, structure)).collect()
}
