//! Writing the rendered route file.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Written,
    /// Existing file already had this content and was left untouched.
    Unchanged,
}

impl SaveStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Written => "written",
            Self::Unchanged => "unchanged",
        }
    }
}

/// Write `content` to `path`, creating parent directories.
pub fn save(content: &str, path: &Path) -> Result<SaveStatus> {
    if file_content_matches(path, content) {
        return Ok(SaveStatus::Unchanged);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(SaveStatus::Written)
}

fn file_content_matches(path: &Path, content: &str) -> bool {
    path.is_file() && fs::read_to_string(path).is_ok_and(|existing| existing == content)
}
