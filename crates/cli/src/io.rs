//! Shared font I/O utilities.

use std::{
    fs::{create_dir_all, read, write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::glob;

/// A font file handle for I/O operations.
#[derive(Debug, Clone)]
pub struct FontFile {
    path: PathBuf,
}

impl FontFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read font data from the file.
    pub fn read(&self) -> Result<Vec<u8>> {
        read(&self.path).with_context(|| format!("Failed to read font: {}", self.path.display()))
    }

    /// Write font data to the file, creating its directory if needed.
    pub fn write(&self, data: impl AsRef<[u8]>) -> Result<()> {
        self.ensure_parent_dir()?;
        write(&self.path, data)
            .with_context(|| format!("Failed to write font: {}", self.path.display()))
    }

    /// The file this font is written to: itself, or a file of the same name in `output_dir`.
    pub fn output(&self, output_dir: Option<&Path>) -> Result<Self> {
        let Some(dir) = output_dir else {
            return Ok(self.clone());
        };
        let file_name = self
            .path
            .file_name()
            .with_context(|| format!("Not a font file: {}", self.path.display()))?;
        Ok(Self::new(dir.join(file_name)))
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        Ok(())
    }
}

impl AsRef<Path> for FontFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Find fonts matching a glob pattern in a directory.
pub fn glob_fonts(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern = dir.join(pattern);
    let pattern_str = pattern.to_str().context("Invalid pattern path")?;
    let mut fonts: Vec<PathBuf> = glob(pattern_str)
        .with_context(|| format!("Failed to glob pattern: {pattern_str}"))?
        .filter_map(Result::ok)
        .collect();
    fonts.sort();
    Ok(fonts)
}
