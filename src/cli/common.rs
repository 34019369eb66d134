//! Helpers shared by the project commands.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::GenConfig;
use crate::mfd::Project;
use crate::routes::RouteTable;

/// The `.mfd` path of a validated config.
pub fn mfd_path(config: &GenConfig) -> Result<&Path> {
    config
        .project
        .mfd
        .as_deref()
        .context("MFD project file is not set")
}

/// Load the configured project with consistency checks.
pub fn load_project(config: &GenConfig) -> Result<Project> {
    let path = mfd_path(config)?;
    Project::load(path).with_context(|| format!("Failed to load project '{}'", path.display()))
}

/// Build routes for the configured namespaces, narrowed to `entities`
/// when it is not empty.
pub fn build_routes(
    project: &Project,
    config: &GenConfig,
    entities: &[String],
) -> Result<RouteTable> {
    let selection = project.select(&config.project.namespaces, entities);
    RouteTable::build(&selection, &config.routes.options()).context("Failed to build routes")
}
