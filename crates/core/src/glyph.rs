//! Source glyph records and the glyph set they belong to

use indexmap::IndexMap;

use crate::{glyph_name::GlyphName, types::Codepoint};

/// A glyph as described by the source font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    name: GlyphName,
    unicode: Option<Codepoint>,
    production_name: Option<GlyphName>,
}

impl Glyph {
    pub fn new(name: impl Into<GlyphName>) -> Self {
        Self { name: name.into(), unicode: None, production_name: None }
    }

    pub fn with_unicode(mut self, unicode: u32) -> Self {
        self.unicode = Some(Codepoint::new(unicode));
        self
    }

    /// Set an explicit production name override.
    ///
    /// Empty names are ignored, so the glyph keeps deriving its name.
    pub fn with_production_name(mut self, name: impl Into<GlyphName>) -> Self {
        let name = name.into();
        self.production_name = (!name.is_empty()).then_some(name);
        self
    }

    pub fn name(&self) -> &GlyphName {
        &self.name
    }

    pub fn unicode(&self) -> Option<Codepoint> {
        self.unicode
    }

    pub fn production_name(&self) -> Option<&GlyphName> {
        self.production_name.as_ref()
    }
}

/// Ordered, name-addressable collection of source glyphs
#[derive(Debug, Clone, Default)]
pub struct GlyphSet {
    glyphs: IndexMap<GlyphName, Glyph>,
}

impl GlyphSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a glyph, replacing any earlier glyph with the same name in place
    pub fn insert(&mut self, glyph: Glyph) {
        self.glyphs.insert(glyph.name.clone(), glyph);
    }

    pub fn get(&self, name: &str) -> Option<&Glyph> {
        self.glyphs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.glyphs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterate over glyphs in source order
    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }
}

impl FromIterator<Glyph> for GlyphSet {
    fn from_iter<I: IntoIterator<Item = Glyph>>(iter: I) -> Self {
        let mut set = Self::new();
        for glyph in iter {
            set.insert(glyph);
        }
        set
    }
}

impl Extend<Glyph> for GlyphSet {
    fn extend<I: IntoIterator<Item = Glyph>>(&mut self, iter: I) {
        for glyph in iter {
            self.insert(glyph);
        }
    }
}

impl<'a> IntoIterator for &'a GlyphSet {
    type Item = &'a Glyph;
    type IntoIter = indexmap::map::Values<'a, GlyphName, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_production_name_is_ignored() {
        let glyph = Glyph::new("a").with_production_name("");
        assert_eq!(glyph.production_name(), None);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut set: GlyphSet =
            [Glyph::new("a"), Glyph::new("b"), Glyph::new("c")].into_iter().collect();
        set.insert(Glyph::new("b").with_unicode(0x62));

        let names: Vec<&str> = set.iter().map(|g| g.name().as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(set.get("b").and_then(Glyph::unicode), Some(Codepoint::new(0x62)));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_membership() {
        let set: GlyphSet = [Glyph::new("f"), Glyph::new("i")].into_iter().collect();
        assert!(set.contains("f"));
        assert!(!set.contains("f_i"));
        assert!(set.get("i").is_some());
    }
}
