//! Configuration constants for reading UFO sources.

/// Glyph lib key holding a glyph's explicit production name.
pub const POSTSCRIPT_NAME_KEY: &str = "public.postscriptName";

/// Font lib key mapping glyph names to production names (UFO 3).
pub const POSTSCRIPT_NAMES_KEY: &str = "public.postscriptNames";

/// Font lib key holding the intended glyph order.
pub const GLYPH_ORDER_KEY: &str = "public.glyphOrder";

/// Glob pattern used when renaming every font in a directory.
pub const DEFAULT_FONT_PATTERN: &str = "*.ttf";
