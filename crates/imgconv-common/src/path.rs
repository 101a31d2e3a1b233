use crate::{Error, OutputFormat, Result};
use std::path::{Path, PathBuf};

/// Proposes non-colliding output names next to the input file
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    /// Suggest an output path in the input's directory.
    /// Format: `base.ext`, then `base (1).ext`, `base (2).ext`, ...
    pub fn resolve(&self, input: &Path, target: OutputFormat) -> Result<PathBuf> {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::InvalidPath(input.to_path_buf()))?;

        let dir = input.parent().unwrap_or_else(|| Path::new(""));
        let ext = target.extension();

        let mut candidate = dir.join(format!("{stem}.{ext}"));
        let mut counter: u32 = 1;
        while candidate.exists() {
            candidate = dir.join(format!("{stem} ({counter}).{ext}"));
            counter += 1;
        }

        tracing::debug!("Resolved output candidate {:?}", candidate);
        Ok(candidate)
    }

    /// File-name part of [`resolve`](Self::resolve), for the save dialog
    pub fn suggested_file_name(&self, input: &Path, target: OutputFormat) -> Result<String> {
        let resolved = self.resolve(input, target)?;
        resolved
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned)
            .ok_or(Error::InvalidPath(resolved))
    }

    /// Validate input path exists and is readable
    pub fn validate_input(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_path_buf()));
        }

        Ok(())
    }

    /// Append the target extension when the chosen path has none
    pub fn ensure_extension(&self, mut path: PathBuf, target: OutputFormat) -> PathBuf {
        if path.extension().is_none() {
            path.set_extension(target.extension());
        }
        path
    }
}
