//! Batch renaming of compiled fonts.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;
use prodname_core::{GlyphSet, Options, PostProcessor};
use prodname_font_ops::SfntFont;

use crate::{
    io::FontFile,
    parallel::{BatchResult, run_parallel},
};

/// Rename every font in `fonts`, writing in place or into `output_dir`.
pub fn rename_fonts(
    glyphs: &GlyphSet,
    fonts: &[PathBuf],
    output_dir: Option<&Path>,
    options: &Options,
) -> BatchResult {
    let processor = PostProcessor::new(glyphs, options.clone());
    run_parallel("Rename", fonts, |path| rename_font(&processor, path, output_dir))
}

/// Rename a single font file.
pub fn rename_font(processor: &PostProcessor, path: &Path, output_dir: Option<&Path>) -> Result<()> {
    let input = FontFile::new(path);
    let font = processor.process(SfntFont::from_bytes(input.read()?)?)?;

    let output = input.output(output_dir)?;
    output.write(font.to_bytes()?)?;
    info!("Wrote {}", output.path().display());
    Ok(())
}
