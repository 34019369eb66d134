//! Generator configuration from `vtgen.toml` and CLI flags.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [project], [routes]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # find_config_file
//! └── mod.rs         # GenConfig (this file)
//! ```
//!
//! The config file is optional: without one, everything comes from CLI
//! flags and defaults. Paths in the file are relative to its directory,
//! paths on the command line are relative to the current directory.

pub mod section;
pub mod types;
mod util;

pub use section::{ProjectConfig, RoutesConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};
use util::find_config_file;

use crate::cli::{Cli, Commands, ProjectArgs};
use crate::{debug, log};
use crate::utils::path::resolve_path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "vtgen.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing vtgen.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenConfig {
    /// Absolute path to the config file, if one was found
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative config paths are resolved against
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub routes: RoutesConfig,
}

impl GenConfig {
    /// Load configuration for a command.
    ///
    /// Searches upward from cwd for the config file, then applies CLI
    /// overrides and validates the result.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config = Self::load_from(cli, &cwd)?;
        match &config.config_path {
            Some(path) => debug!("config"; "loaded {}", path.display()),
            None => debug!("config"; "no {CONFIG_FILE} found, using defaults"),
        }
        config.validate(&cli.command)?;
        Ok(config)
    }

    /// Load without validation, resolving relative paths against `cwd`.
    fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let mut config = match Self::resolve_config_path(cli, cwd)? {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None => Self {
                root: cwd.to_path_buf(),
                ..Self::default()
            },
        };

        config.normalize_paths();
        config.apply_command_options(&cli.command, cwd);
        Ok(config)
    }

    /// Find the config file. An explicit `--config` must exist.
    fn resolve_config_path(cli: &Cli, cwd: &Path) -> Result<Option<PathBuf>> {
        match &cli.config {
            Some(path) => find_config_file(path, cwd)
                .map(Some)
                .ok_or_else(|| ConfigError::NotFound(path.clone()).into()),
            None => Ok(find_config_file(Path::new(CONFIG_FILE), cwd)),
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warn"; "unknown fields in {} are ignored: {}", display_path, fields.join(", "));
    }

    /// Route file location inside the frontend root.
    pub fn routes_file(&self) -> Option<PathBuf> {
        self.project
            .output
            .as_ref()
            .map(|output| output.join(&self.routes.path))
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific CLI flags on top of the file values.
    fn apply_command_options(&mut self, command: &Commands, cwd: &Path) {
        match command {
            Commands::Init { .. } => {}
            Commands::Routes { args } => {
                self.apply_project_args(&args.project, cwd);
                Self::update_path(&mut self.project.output, args.output.as_deref(), cwd);
                Self::update_option(&mut self.routes.chunk_names, args.chunk_names.as_ref());
            }
            Commands::Query { args } => self.apply_project_args(&args.project, cwd),
            Commands::Check { mfd, .. } => {
                Self::update_path(&mut self.project.mfd, mfd.as_deref(), cwd);
            }
        }
    }

    fn apply_project_args(&mut self, args: &ProjectArgs, cwd: &Path) {
        Self::update_path(&mut self.project.mfd, args.mfd.as_deref(), cwd);
        if !args.namespaces.is_empty() {
            self.project.namespaces = args.namespaces.clone();
        }
        if !args.entities.is_empty() {
            self.project.entities = args.entities.clone();
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    fn update_path(config_path: &mut Option<PathBuf>, cli_path: Option<&Path>, cwd: &Path) {
        if let Some(path) = cli_path {
            *config_path = Some(resolve_path(path, cwd));
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve file paths against the config root.
    fn normalize_paths(&mut self) {
        let root = self.root.clone();
        for path in [&mut self.project.mfd, &mut self.project.output]
            .into_iter()
            .flatten()
        {
            *path = resolve_path(path, &root);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration for the current command.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self, command: &Commands) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        let need_output = matches!(command, Commands::Routes { .. });
        self.project.validate(need_output, &mut diag);
        self.routes.validate(&mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config content.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> GenConfig {
    let (parsed, ignored) = GenConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
