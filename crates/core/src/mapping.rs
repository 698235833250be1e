//! Source name to production name mapping

use indexmap::IndexMap;
use log::debug;
use rayon::prelude::*;

use crate::{
    error::{Error, Result},
    glyph::{Glyph, GlyphSet},
    glyph_name::GlyphName,
    resolver::NameResolver,
};

/// Production names for every glyph of a glyph set, in glyph set order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameMapping(IndexMap<GlyphName, GlyphName>);

impl NameMapping {
    /// Resolve every glyph of the set
    pub fn build(glyphs: &GlyphSet) -> Self {
        let resolver = NameResolver::new(glyphs);
        glyphs.iter().map(|glyph| Self::entry(&resolver, glyph)).collect()
    }

    /// Resolve every glyph of the set on the rayon thread pool.
    ///
    /// Produces the same mapping as [`NameMapping::build`].
    pub fn build_parallel(glyphs: &GlyphSet) -> Self {
        let resolver = NameResolver::new(glyphs);
        let entries: Vec<&Glyph> = glyphs.iter().collect();
        let resolved: Vec<(GlyphName, GlyphName)> =
            entries.into_par_iter().map(|glyph| Self::entry(&resolver, glyph)).collect();
        resolved.into_iter().collect()
    }

    fn entry(resolver: &NameResolver, glyph: &Glyph) -> (GlyphName, GlyphName) {
        let production = resolver.resolve(glyph);
        debug!("{} -> {production}", glyph.name());
        (glyph.name().clone(), production)
    }

    pub fn get(&self, name: &str) -> Option<&GlyphName> {
        self.0.get(name)
    }

    /// Strict lookup: every name must have an entry
    pub fn rename(&self, name: &str, structure: &'static str) -> Result<GlyphName> {
        self.get(name)
            .cloned()
            .ok_or_else(|| Error::MissingMappingEntry { name: name.into(), structure })
    }

    /// Permissive lookup: names without an entry keep their own name
    pub fn rename_or_keep(&self, name: &GlyphName) -> GlyphName {
        match self.get(name) {
            Some(production) => production.clone(),
            None => name.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GlyphName, &GlyphName)> {
        self.0.iter()
    }

    /// Production names shared by more than one source glyph, with the
    /// source names that produce them
    pub fn collisions(&self) -> IndexMap<&GlyphName, Vec<&GlyphName>> {
        let mut by_production: IndexMap<&GlyphName, Vec<&GlyphName>> = IndexMap::new();
        for (source, production) in &self.0 {
            by_production.entry(production).or_default().push(source);
        }
        by_production.retain(|_, sources| sources.len() > 1);
        by_production
    }
}

impl FromIterator<(GlyphName, GlyphName)> for NameMapping {
    fn from_iter<I: IntoIterator<Item = (GlyphName, GlyphName)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
