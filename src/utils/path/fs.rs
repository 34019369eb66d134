//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `resolve_path` - relative paths against a base directory
//! - `expand_path` - `~` expansion for user supplied paths

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand and resolve `path` against `base_dir`, returning an absolute path.
///
/// ```ignore
/// // config in /work/site/vtgen.toml
/// resolve_path(Path::new("newsportal.mfd"), Path::new("/work/site"));
/// // -> /work/site/newsportal.mfd
/// ```
pub fn resolve_path(path: &Path, base_dir: &Path) -> PathBuf {
    let path = expand_path(path);
    if path.is_absolute() {
        normalize_path(&path)
    } else {
        normalize_path(&base_dir.join(path))
    }
}

/// Expand a leading `~` to the home directory. `$VAR` stays literal.
pub fn expand_path(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_resolve_path_absolute() {
        let resolved = resolve_path(Path::new("/absolute/path"), Path::new("/base"));
        assert_eq!(resolved, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_resolve_path_base_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("shop.mfd"), "").unwrap();

        let resolved = resolve_path(Path::new("shop.mfd"), dir.path());
        assert_eq!(resolved, dir.path().canonicalize().unwrap().join("shop.mfd"));
    }

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path(Path::new("~/project.mfd"));
        assert!(expanded.ends_with("project.mfd"));
        if std::env::var_os("HOME").is_some() {
            assert!(!expanded.to_string_lossy().starts_with('~'));
        }
    }

    #[test]
    fn test_expand_path_keeps_variables() {
        assert_eq!(
            expand_path(Path::new("$HOME/shop.mfd")),
            PathBuf::from("$HOME/shop.mfd")
        );
        assert_eq!(
            expand_path(Path::new("${NO_SUCH_VTGEN_VAR}/a.mfd")),
            PathBuf::from("${NO_SUCH_VTGEN_VAR}/a.mfd")
        );
    }

    #[test]
    fn test_expand_path_plain() {
        assert_eq!(expand_path(Path::new("a/b.mfd")), PathBuf::from("a/b.mfd"));
    }
}
