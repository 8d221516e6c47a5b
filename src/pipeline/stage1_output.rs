use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RenderError, Result};

pub const DEFAULT_OUTPUT_DIR: &str = "docs/figures";

/// Creates the output directory and its parents; an existing directory is fine.
pub fn prepare_output_dir(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| RenderError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    if !dir.is_dir() {
        return Err(RenderError::OutputDir {
            path: dir.to_path_buf(),
            source: std::io::Error::other("not a directory"),
        });
    }
    tracing::debug!(dir = %dir.display(), "output directory ready");
    Ok(dir.to_path_buf())
}

/// Absolute form used in the summary; falls back to the given path.
pub fn display_dir(dir: &Path) -> PathBuf {
    std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_output.rs"]
mod tests;
