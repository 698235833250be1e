//! Options for post-processing a compiled font

/// Options for post-processing a compiled font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Rename glyphs to their production names
    pub use_production_names: bool,

    /// Run the outline compressor over CFF charstrings
    pub optimize_cff: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { use_production_names: true, optimize_cff: true }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_production_names(mut self, enabled: bool) -> Self {
        self.use_production_names = enabled;
        self
    }

    pub fn optimize_cff(mut self, enabled: bool) -> Self {
        self.optimize_cff = enabled;
        self
    }
}
