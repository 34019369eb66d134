//! `[routes]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [routes]
//! path = "src/pages/Entity/routes.ts"   # Relative to project.output
//! import_prefix = "@/pages/Entity"      # Page component import prefix
//! breadcrumb_root = "dashboard"         # First breadcrumb of every route
//! chunk_names = false                   # Add webpackChunkName comments
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::routes::{
    DEFAULT_BREADCRUMB_ROOT, DEFAULT_IMPORT_PREFIX, DEFAULT_ROUTES_PATH, RouteOptions,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extensions accepted for the route file.
const ROUTE_FILE_EXTENSIONS: &[&str] = &["ts", "js"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Route file, relative to the frontend root.
    pub path: PathBuf,

    pub import_prefix: String,

    pub breadcrumb_root: String,

    /// Emit `/* webpackChunkName */` comments in imports.
    pub chunk_names: bool,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ROUTES_PATH),
            import_prefix: DEFAULT_IMPORT_PREFIX.to_string(),
            breadcrumb_root: DEFAULT_BREADCRUMB_ROOT.to_string(),
            chunk_names: false,
        }
    }
}

impl RoutesConfig {
    pub const PATH: FieldPath = FieldPath::new("routes.path");
    pub const IMPORT_PREFIX: FieldPath = FieldPath::new("routes.import_prefix");
    pub const BREADCRUMB_ROOT: FieldPath = FieldPath::new("routes.breadcrumb_root");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path.is_absolute() {
            diag.error_with_hint(
                Self::PATH,
                format!("`{}` must be relative", self.path.display()),
                "the route file is resolved against `project.output`",
            );
        }

        let ext = self.path.extension().and_then(|e| e.to_str());
        if !ext.is_some_and(|e| ROUTE_FILE_EXTENSIONS.contains(&e)) {
            diag.error(
                Self::PATH,
                format!("`{}` must end in .ts or .js", self.path.display()),
            );
        }

        if self.import_prefix.trim().is_empty() {
            diag.error(Self::IMPORT_PREFIX, "must not be empty");
        }

        if self.breadcrumb_root.trim().is_empty() {
            diag.error(Self::BREADCRUMB_ROOT, "must not be empty");
        }
    }

    /// Options for building and rendering the route table.
    pub fn options(&self) -> RouteOptions {
        RouteOptions {
            import_prefix: self.import_prefix.clone(),
            breadcrumb_root: self.breadcrumb_root.clone(),
            chunk_names: self.chunk_names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let mut diag = ConfigDiagnostics::new();
        RoutesConfig::default().validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_validate_collects_all() {
        let config = RoutesConfig {
            path: PathBuf::from("/abs/routes.vue"),
            import_prefix: String::new(),
            breadcrumb_root: " ".into(),
            chunk_names: false,
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            [
                RoutesConfig::PATH,
                RoutesConfig::PATH,
                RoutesConfig::IMPORT_PREFIX,
                RoutesConfig::BREADCRUMB_ROOT
            ]
        );
    }

    #[test]
    fn test_js_extension_accepted() {
        let config = RoutesConfig {
            path: PathBuf::from("src/router/entities.js"),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_options() {
        let config = RoutesConfig {
            chunk_names: true,
            ..Default::default()
        };
        let options = config.options();
        assert!(options.chunk_names);
        assert_eq!(options.import_prefix, "@/pages/Entity");
        assert_eq!(options.breadcrumb_root, "dashboard");
    }
}
