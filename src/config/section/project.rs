//! `[project]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [project]
//! mfd = "newsportal.mfd"      # MFD project file
//! output = "../frontend"      # Frontend root, routes are written below it
//! namespaces = ["portal"]     # Only these namespaces (empty = all)
//! entities = []               # `query` only: these entities (empty = all)
//! ```
//!
//! Relative paths are resolved against the directory of `vtgen.toml`.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Path to the `.mfd` project file.
    pub mfd: Option<PathBuf>,

    /// Frontend root directory.
    pub output: Option<PathBuf>,

    /// Namespace filter.
    pub namespaces: Vec<String>,

    /// Entity filter, applied by `query`.
    pub entities: Vec<String>,
}

impl ProjectConfig {
    pub const MFD: FieldPath = FieldPath::new("project.mfd");
    pub const OUTPUT: FieldPath = FieldPath::new("project.output");
    pub const NAMESPACES: FieldPath = FieldPath::new("project.namespaces");
    pub const ENTITIES: FieldPath = FieldPath::new("project.entities");

    /// Validate resolved paths. `need_output` is set for `routes`, which
    /// writes the route file and ignores the entity filter.
    pub fn validate(&self, need_output: bool, diag: &mut ConfigDiagnostics) {
        match &self.mfd {
            None => diag.error_with_hint(
                Self::MFD,
                "MFD project file is not set",
                "set `project.mfd` in vtgen.toml or pass `--mfd`",
            ),
            Some(path) if !path.is_file() => {
                diag.error(Self::MFD, format!("`{}` not found", path.display()));
            }
            Some(_) => {}
        }

        if need_output {
            match &self.output {
                None => diag.error_with_hint(
                    Self::OUTPUT,
                    "frontend output directory is not set",
                    "set `project.output` in vtgen.toml or pass `--output`",
                ),
                Some(path) if path.is_file() => {
                    diag.error(Self::OUTPUT, format!("`{}` is a file", path.display()));
                }
                Some(_) => {}
            }
        }

        if self.namespaces.iter().any(|ns| ns.trim().is_empty()) {
            diag.error(Self::NAMESPACES, "namespace names must not be empty");
        }

        if need_output && !self.entities.is_empty() {
            diag.warn(
                Self::ENTITIES,
                format!(
                    "({}) ignored by `routes`, the route file covers whole namespaces",
                    self.entities.join(", ")
                ),
            );
        }
    }
}
