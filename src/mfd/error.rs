//! Project loading errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MfdError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("XML parsing error in `{0}`")]
    Xml(PathBuf, #[source] quick_xml::DeError),

    #[error("namespace `{name}` listed in project but `{}` not found", path.display())]
    MissingNamespace { name: String, path: PathBuf },

    #[error("unknown mode `{mode}` for vt entity `{entity}`")]
    UnknownMode { entity: String, mode: String },

    #[error("unsupported go-pg version: {0}")]
    GoPgVersion(u32),

    #[error("{0}")]
    Inconsistent(String),

    #[error("invalid names detected ({}):\n{}", .0.len(), .0.join("\n"))]
    ReservedNames(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mfd_error_display() {
        let err = MfdError::MissingNamespace {
            name: "geo".into(),
            path: PathBuf::from("/tmp/geo.xml"),
        };
        let display = err.to_string();
        assert!(display.contains("`geo`"));
        assert!(display.contains("/tmp/geo.xml"));

        let err = MfdError::ReservedNames(vec![
            r#"entity name: "Switch" is reserved"#.into(),
            r#"entity name: "Status" is reserved"#.into(),
        ]);
        let display = err.to_string();
        assert!(display.starts_with("invalid names detected (2):"));
        assert!(display.contains("\"Switch\""));
    }
}
