//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use prodname_core::{Options, PostProcessor};

use crate::{config::DEFAULT_FONT_PATTERN, io::glob_fonts, rename::rename_fonts, source::load_glyph_set};

#[derive(Parser)]
#[command(name = "prodname")]
#[command(about = "Rename compiled font glyphs to production names derived from a UFO source")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RenameArgs {
    /// UFO source the fonts were compiled from
    #[arg(long)]
    pub ufo: PathBuf,
    /// Compiled fonts to rename
    pub fonts: Vec<PathBuf>,
    /// Also rename every font in this directory matching --pattern
    #[arg(long)]
    pub dir: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_FONT_PATTERN)]
    pub pattern: String,
    /// Write renamed fonts here instead of overwriting them
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    #[arg(long)]
    pub no_production_names: bool,
    #[arg(long)]
    pub no_optimize_cff: bool,
}

impl RenameArgs {
    pub fn options(&self) -> Options {
        Options::new()
            .use_production_names(!self.no_production_names)
            .optimize_cff(!self.no_optimize_cff)
    }

    /// Fonts given on the command line followed by those found in `--dir`
    pub fn font_paths(&self) -> Result<Vec<PathBuf>> {
        let mut fonts = self.fonts.clone();
        if let Some(dir) = &self.dir {
            fonts.extend(glob_fonts(dir, &self.pattern)?);
        }
        if fonts.is_empty() {
            bail!("No fonts to rename");
        }
        Ok(fonts)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the production name of every glyph in a UFO
    Names { ufo: PathBuf },
    /// Rename the glyphs of compiled fonts
    Rename {
        #[command(flatten)]
        args: RenameArgs,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Names { ufo } => {
                let glyphs = load_glyph_set(&ufo)?;
                let processor = PostProcessor::new(&glyphs, Options::default());
                for (source, production) in processor.mapping().iter() {
                    println!("{source}\t{production}");
                }
            }
            Commands::Rename { args } => {
                let fonts = args.font_paths()?;
                let glyphs = load_glyph_set(&args.ufo)?;
                info!("Renaming {} fonts", fonts.len());
                rename_fonts(&glyphs, &fonts, args.output_dir.as_deref(), &args.options())
                    .ok_or_bail("Rename")?;
            }
        }
        Ok(())
    }
}
