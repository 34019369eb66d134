//! `vtgen init`: write a commented `vtgen.toml`.

use crate::config::{CONFIG_FILE, RoutesConfig};
use crate::log;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Placeholder used when no `.mfd` file is found next to the config.
const MFD_PLACEHOLDER: &str = "project.mfd";

/// Write the config into `dir`, or print it when `dry_run` is set.
pub fn init_config(dir: &Path, dry_run: bool) -> Result<()> {
    let mfd = find_mfd(dir)?;
    let content = generate_config_template(mfd.as_deref().unwrap_or(MFD_PLACEHOLDER));

    if dry_run {
        print!("{content}");
        return Ok(());
    }

    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it first or use `vtgen init --dry` to print a fresh config.",
            path.display()
        );
    }

    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    match mfd {
        Some(mfd) => log!("init"; "{} written for {}", CONFIG_FILE, mfd),
        None => log!("init"; "{} written, set `project.mfd` before generating", CONFIG_FILE),
    }
    Ok(())
}

/// Generate vtgen.toml content with comments
pub fn generate_config_template(mfd: &str) -> String {
    let routes = RoutesConfig::default();

    format!(
        r#"# vtgen configuration file (v{version})

[project]
# MFD project file, relative to this file
mfd = "{mfd}"
# Frontend root, the route file is written below it
# output = "../frontend"
# Only these namespaces (empty = all)
namespaces = []
# Only these entities (empty = all)
entities = []

[routes]
# Route file, relative to `project.output`
path = "{path}"
# Import prefix of page components
import_prefix = "{import_prefix}"
# First breadcrumb of every route
breadcrumb_root = "{breadcrumb_root}"
# Add webpackChunkName comments to imports
chunk_names = {chunk_names}
"#,
        version = env!("CARGO_PKG_VERSION"),
        path = routes.path.display(),
        import_prefix = routes.import_prefix,
        breadcrumb_root = routes.breadcrumb_root,
        chunk_names = routes.chunk_names,
    )
}

/// First `.mfd` file in `dir`, by name.
fn find_mfd(dir: &Path) -> Result<Option<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory '{}'", dir.display()))?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "mfd"))
        .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();

    names.sort();
    Ok(names.into_iter().next())
}
