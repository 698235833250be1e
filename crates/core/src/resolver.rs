//! Production name derivation
//!
//! A glyph's production name is chosen by the first rule that applies:
//!
//! 1. an explicit production name recorded in the source
//! 2. a name derived from the glyph's Unicode value (`uni0041`, `u1F600`)
//! 3. the production name of its base glyph plus the original suffix
//!    (`a.sc` -> `uni0061.sc`), for names with a single `.`
//! 4. a ligature name built from its `_`-separated components
//!    (`f_i` -> `uni00660069`)
//! 5. the source name itself
//!
//! Rules 3 and 4 recurse into other glyphs of the same set. Every recursive
//! call is made on a strictly shorter name, so resolution always terminates.

use std::fmt::Write;

use crate::{
    glyph::{Glyph, GlyphSet},
    glyph_name::GlyphName,
    types::Codepoint,
};

/// Resolves production names against a borrowed glyph set
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    glyphs: &'a GlyphSet,
}

impl<'a> NameResolver<'a> {
    pub fn new(glyphs: &'a GlyphSet) -> Self {
        Self { glyphs }
    }

    /// Compute the production name for a glyph of the bound set
    pub fn resolve(&self, glyph: &Glyph) -> GlyphName {
        if let Some(name) = glyph.production_name() {
            return name.clone();
        }

        if let Some(unicode) = glyph.unicode() {
            return unicode.production_name().into();
        }

        let name = glyph.name().as_str();
        self.suffixed(name)
            .or_else(|| self.ligature(name))
            .unwrap_or_else(|| glyph.name().clone())
    }

    /// Compute the production name for the glyph called `name`, if the set has one
    pub fn resolve_name(&self, name: &str) -> Option<GlyphName> {
        self.glyphs.get(name).map(|glyph| self.resolve(glyph))
    }

    /// `base.suffix` where `base` is in the set
    fn suffixed(&self, name: &str) -> Option<GlyphName> {
        let (base, suffix) = name.rsplit_once('.')?;
        if base.contains('.') {
            return None;
        }
        let base = self.glyphs.get(base)?;
        Some(self.resolve(base).with_suffix(suffix))
    }

    /// `a_b_c` or `a_b_c.suffix` where every component (carrying the shared
    /// suffix, if any) is in the set
    fn ligature(&self, name: &str) -> Option<GlyphName> {
        let candidates: Vec<String> = match name.split_once('.') {
            Some((components, suffix)) => {
                components.split('_').map(|c| format!("{c}.{suffix}")).collect()
            }
            None => name.split('_').map(str::to_owned).collect(),
        };
        if candidates.len() < 2 {
            return None;
        }

        let components = candidates
            .iter()
            .map(|candidate| self.glyphs.get(candidate))
            .collect::<Option<Vec<_>>>()?;

        let bmp_values = components
            .iter()
            .map(|glyph| glyph.unicode().filter(|&cp| cp.to_u32() != 0 && cp.is_bmp()))
            .collect::<Option<Vec<Codepoint>>>();

        let name = match bmp_values {
            Some(values) => {
                let mut name = String::from("uni");
                for cp in values {
                    let _ = write!(name, "{:04X}", cp.to_u32());
                }
                name
            }
            None => components
                .iter()
                .map(|glyph| self.resolve(glyph).into_string())
                .collect::<Vec<_>>()
                .join("_"),
        };
        Some(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(glyphs: impl IntoIterator<Item = Glyph>) -> GlyphSet {
        glyphs.into_iter().collect()
    }

    fn resolve(glyphs: &GlyphSet, name: &str) -> String {
        NameResolver::new(glyphs).resolve_name(name).unwrap().into_string()
    }

    #[test]
    fn test_explicit_override_wins() {
        let glyphs = set([
            Glyph::new("a").with_unicode(0x61).with_production_name("a"),
            Glyph::new("f_i").with_production_name("fi"),
            Glyph::new("f").with_unicode(0x66),
            Glyph::new("i").with_unicode(0x69),
            Glyph::new("a.sc").with_production_name("smcp_a"),
        ]);
        assert_eq!(resolve(&glyphs, "a"), "a");
        assert_eq!(resolve(&glyphs, "f_i"), "fi");
        assert_eq!(resolve(&glyphs, "a.sc"), "smcp_a");
    }

    #[test]
    fn test_unicode_names() {
        let glyphs = set([
            Glyph::new("A").with_unicode(0x41),
            Glyph::new("nul").with_unicode(0x0),
            Glyph::new("grinning").with_unicode(0x1F600),
            Glyph::new("max").with_unicode(0x10FFFF),
        ]);
        assert_eq!(resolve(&glyphs, "A"), "uni0041");
        assert_eq!(resolve(&glyphs, "nul"), "uni0000");
        assert_eq!(resolve(&glyphs, "grinning"), "u1F600");
        assert_eq!(resolve(&glyphs, "max"), "u10FFFF");
    }

    #[test]
    fn test_unicode_beats_decomposition() {
        let glyphs = set([
            Glyph::new("f").with_unicode(0x66),
            Glyph::new("i").with_unicode(0x69),
            Glyph::new("f_i").with_unicode(0xFB01),
        ]);
        assert_eq!(resolve(&glyphs, "f_i"), "uniFB01");
    }

    #[test]
    fn test_suffix_inherits_base_name() {
        let glyphs = set([
            Glyph::new("a").with_unicode(0x61),
            Glyph::new("a.sc"),
            Glyph::new("ampersand.alt"),
            Glyph::new("ampersand").with_production_name("AMP"),
        ]);
        assert_eq!(resolve(&glyphs, "a.sc"), "uni0061.sc");
        assert_eq!(resolve(&glyphs, "ampersand.alt"), "AMP.alt");
    }

    #[test]
    fn test_suffix_recurses_through_ligature_base() {
        let glyphs = set([
            Glyph::new("f").with_unicode(0x66),
            Glyph::new("l").with_unicode(0x6C),
            Glyph::new("f_l"),
            Glyph::new("f_l.alt"),
        ]);
        assert_eq!(resolve(&glyphs, "f_l.alt"), "uni0066006C.alt");
    }

    #[test]
    fn test_suffix_requires_single_dot() {
        // "a.sc" exists, but "a.sc.ss01" has two dots and falls through to
        // the ligature rule, which needs at least two components.
        let glyphs = set([
            Glyph::new("a").with_unicode(0x61),
            Glyph::new("a.sc"),
            Glyph::new("a.sc.ss01"),
        ]);
        assert_eq!(resolve(&glyphs, "a.sc.ss01"), "a.sc.ss01");
    }

    #[test]
    fn test_suffix_missing_base_falls_back() {
        let glyphs = set([Glyph::new("foo.alt")]);
        assert_eq!(resolve(&glyphs, "foo.alt"), "foo.alt");
    }

    #[test]
    fn test_ligature_all_bmp() {
        let glyphs = set([
            Glyph::new("f").with_unicode(0x66),
            Glyph::new("i").with_unicode(0x69),
            Glyph::new("f_i"),
            Glyph::new("f_f_i"),
        ]);
        assert_eq!(resolve(&glyphs, "f_i"), "uni00660069");
        assert_eq!(resolve(&glyphs, "f_f_i"), "uni006600660069");
    }

    #[test]
    fn test_ligature_mixed_components() {
        let glyphs = set([
            Glyph::new("f").with_unicode(0x66),
            Glyph::new("i").with_production_name("i.prod"),
            Glyph::new("f_i"),
        ]);
        assert_eq!(resolve(&glyphs, "f_i"), "uni0066_i.prod");
    }

    #[test]
    fn test_ligature_with_supplementary_component() {
        let glyphs = set([
            Glyph::new("a").with_unicode(0x61),
            Glyph::new("grinning").with_unicode(0x1F600),
            Glyph::new("a_grinning"),
        ]);
        assert_eq!(resolve(&glyphs, "a_grinning"), "uni0061_u1F600");
    }

    #[test]
    fn test_ligature_zero_codepoint_is_not_combined() {
        let glyphs = set([
            Glyph::new("nul").with_unicode(0x0),
            Glyph::new("a").with_unicode(0x61),
            Glyph::new("nul_a"),
        ]);
        assert_eq!(resolve(&glyphs, "nul_a"), "uni0000_uni0061");
    }

    #[test]
    fn test_ligature_shared_suffix() {
        let glyphs = set([
            Glyph::new("f").with_unicode(0x66),
            Glyph::new("i").with_unicode(0x69),
            Glyph::new("f.sc"),
            Glyph::new("i.sc"),
            Glyph::new("f_i.sc"),
        ]);
        // components are looked up as "f.sc" and "i.sc", which have no
        // unicode values of their own
        assert_eq!(resolve(&glyphs, "f_i.sc"), "uni0066.sc_uni0069.sc");
    }

    #[test]
    fn test_ligature_requires_every_component() {
        let glyphs = set([Glyph::new("f").with_unicode(0x66), Glyph::new("f_x")]);
        assert_eq!(resolve(&glyphs, "f_x"), "f_x");
    }

    #[test]
    fn test_fallback() {
        let glyphs = set([Glyph::new("custom1"), Glyph::new(".notdef"), Glyph::new("_part")]);
        assert_eq!(resolve(&glyphs, "custom1"), "custom1");
        assert_eq!(resolve(&glyphs, ".notdef"), ".notdef");
        assert_eq!(resolve(&glyphs, "_part"), "_part");
    }

    #[test]
    fn test_resolve_name_outside_set() {
        let glyphs = set([Glyph::new("a")]);
        assert_eq!(NameResolver::new(&glyphs).resolve_name("b"), None);
    }
}
