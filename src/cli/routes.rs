//! `vtgen routes`: generate the admin route file.

use anyhow::{Context, Result};

use super::common::{build_routes, load_project};
use crate::config::GenConfig;
use crate::routes::{SaveStatus, save};
use crate::utils::plural::plural_count;
use crate::{debug, log};

/// Load, select, render and save. Returns whether the file changed.
///
/// The route file is the whole router of the admin app, so it always
/// covers every entity of the selected namespaces. `project.entities`
/// is not applied; config validation warns when it is set.
pub fn generate_routes(config: &GenConfig) -> Result<SaveStatus> {
    let project = load_project(config)?;
    let table = build_routes(&project, config, &[])?;

    if table.is_empty() {
        log!("warn"; "no entities with templates selected, writing an empty route file");
    }

    let path = config
        .routes_file()
        .context("frontend output directory is not set")?;
    let content = table.render(&config.routes.options());
    debug!("routes"; "rendered {} records", table.records().count());

    let status = save(&content, &path)?;
    log!(
        "routes";
        "{} {} ({})",
        status.as_str(),
        path.display(),
        plural_count(table.len(), "entity")
    );
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn testdata(path: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata").join(path)
    }

    fn config(output: &Path, namespaces: &[&str]) -> GenConfig {
        GenConfig {
            project: ProjectConfig {
                mfd: Some(testdata("newsportal/newsportal.mfd")),
                output: Some(output.to_path_buf()),
                namespaces: namespaces.iter().map(|s| s.to_string()).collect(),
                entities: Vec::new(),
            },
            ..GenConfig::default()
        }
    }

    #[test]
    fn test_generate_routes_all() {
        let dir = TempDir::new().unwrap();
        let config = config(dir.path(), &[]);

        assert_eq!(generate_routes(&config).unwrap(), SaveStatus::Written);

        let written = fs::read_to_string(config.routes_file().unwrap()).unwrap();
        let expected = fs::read_to_string(testdata("expected/all/routes.ts")).unwrap();
        assert_eq!(written, expected);
    }

    #[test]
    fn test_generate_routes_twice_is_unchanged() {
        let dir = TempDir::new().unwrap();
        let config = config(dir.path(), &["portal"]);

        assert_eq!(generate_routes(&config).unwrap(), SaveStatus::Written);
        assert_eq!(generate_routes(&config).unwrap(), SaveStatus::Unchanged);

        let written = fs::read_to_string(config.routes_file().unwrap()).unwrap();
        let expected = fs::read_to_string(testdata("expected/portal/routes.ts")).unwrap();
        assert_eq!(written, expected);
    }

    #[test]
    fn test_generate_routes_ignores_entity_filter() {
        let dir = TempDir::new().unwrap();
        let mut config = config(dir.path(), &["portal"]);
        config.project.entities = vec!["Category".into(), "Tag".into()];

        generate_routes(&config).unwrap();

        let written = fs::read_to_string(config.routes_file().unwrap()).unwrap();
        let expected = fs::read_to_string(testdata("expected/portal/routes.ts")).unwrap();
        assert_eq!(written, expected);
        assert!(written.contains("newsList"));
    }

    #[test]
    fn test_generate_routes_repeated_namespace() {
        let dir = TempDir::new().unwrap();
        let config = config(dir.path(), &["portal", "PORTAL"]);

        generate_routes(&config).unwrap();

        let written = fs::read_to_string(config.routes_file().unwrap()).unwrap();
        let expected = fs::read_to_string(testdata("expected/portal/routes.ts")).unwrap();
        assert_eq!(written, expected);
    }

    #[test]
    fn test_generate_routes_missing_project() {
        let dir = TempDir::new().unwrap();
        let mut config = config(dir.path(), &[]);
        config.project.mfd = Some(dir.path().join("missing.mfd"));

        let err = generate_routes(&config).unwrap_err();
        assert!(err.to_string().contains("missing.mfd"));
        assert!(config.routes_file().is_some_and(|path| !path.exists()));
    }
}
