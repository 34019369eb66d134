//! `vtgen check`: report broken references and reserved names.

use std::fmt;

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;

use super::common::mfd_path;
use crate::config::GenConfig;
use crate::log;
use crate::mfd::{MfdError, Project};
use crate::utils::plural::plural_count;

/// Entity counts of one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceSummary {
    pub name: String,
    pub entities: usize,
    /// VT entities that get admin routes.
    pub routed: usize,
}

/// Everything `check` found in a project.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub namespaces: Vec<NamespaceSummary>,
    pub problems: Vec<String>,
}

impl CheckReport {
    pub fn new(project: &Project) -> Self {
        let namespaces = project
            .namespaces
            .iter()
            .map(|ns| NamespaceSummary {
                name: ns.name.clone(),
                entities: ns.entities.len(),
                routed: project.vt_namespace(&ns.name).map_or(0, |vt| {
                    vt.entities.iter().filter(|e| e.mode.has_templates()).count()
                }),
            })
            .collect();

        let mut problems = Vec::new();
        if let Err(err) = project.check_consistency() {
            problems.push(err.to_string());
        }
        match project.validate_names() {
            Ok(()) => {}
            Err(MfdError::ReservedNames(names)) => problems.extend(names),
            Err(err) => problems.push(err.to_string()),
        }

        Self {
            namespaces,
            problems,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }

    /// Print the namespace summary and every problem.
    pub fn print(&self) {
        for ns in &self.namespaces {
            log!(
                "check";
                "{}: {}, {} routed",
                ns.name,
                plural_count(ns.entities, "entity"),
                ns.routed
            );
        }

        if self.problems.is_empty() {
            return;
        }
        eprintln!();
        eprintln!(
            "{} {}",
            "problems".red().bold(),
            format!("({})", self.problems.len()).dimmed()
        );
        for problem in &self.problems {
            eprintln!("{} {}", "→".red(), problem);
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            let entities: usize = self.namespaces.iter().map(|ns| ns.entities).sum();
            write!(
                f,
                "{} ({}, {})",
                "all checks passed".green(),
                plural_count(self.namespaces.len(), "namespace"),
                plural_count(entities, "entity")
            )
        } else {
            write!(
                f,
                "{}",
                format!("found {}", plural_count(self.problems.len(), "problem")).red()
            )
        }
    }
}

/// Load the project without stopping at the first problem and report.
pub fn check_project(config: &GenConfig) -> Result<()> {
    let path = mfd_path(config)?;
    let project = Project::read(path)
        .with_context(|| format!("Failed to read project '{}'", path.display()))?;

    let report = CheckReport::new(&project);
    report.print();

    if !report.is_ok() {
        bail!("{report}");
    }
    log!("check"; "{}", report);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn config(mfd: PathBuf) -> GenConfig {
        GenConfig {
            project: ProjectConfig {
                mfd: Some(mfd),
                ..ProjectConfig::default()
            },
            ..GenConfig::default()
        }
    }

    fn fixture() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/newsportal/newsportal.mfd")
    }

    #[test]
    fn test_check_fixture() {
        let project = Project::read(&fixture()).unwrap();
        let report = CheckReport::new(&project);

        assert!(report.is_ok());
        assert_eq!(
            report.namespaces[2],
            NamespaceSummary {
                name: "common".into(),
                entities: 2,
                routed: 1,
            }
        );
        assert!(report.to_string().contains("4 namespaces, 10 entities"));
        assert!(check_project(&config(fixture())).is_ok());
    }

    #[test]
    fn test_check_collects_all_problems() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("shop.mfd"),
            "<Project><Name>shop</Name><PackageNames><string>shop</string></PackageNames><GoPGVer>7</GoPGVer></Project>",
        )
        .unwrap();
        fs::write(
            dir.path().join("shop.xml"),
            r#"<Package><Name>shop</Name><Entities>
                <Entity Name="Switch" Namespace="shop" Table="switches"><Attributes>
                    <Attribute Name="ID" PK="true"></Attribute>
                </Attributes></Entity>
                <Entity Name="Status" Namespace="shop" Table="statuses"><Attributes>
                    <Attribute Name="ID" PK="true"></Attribute>
                </Attributes></Entity>
            </Entities></Package>"#,
        )
        .unwrap();

        let project = Project::read(&dir.path().join("shop.mfd")).unwrap();
        let report = CheckReport::new(&project);

        assert_eq!(report.problems.len(), 3);
        assert!(report.problems[0].contains("go-pg"));
        assert!(report.problems.iter().any(|p| p.contains(r#""Switch""#)));
        assert_eq!(report.namespaces[0].routed, 0);

        let err = check_project(&config(dir.path().join("shop.mfd"))).unwrap_err();
        assert!(err.to_string().contains("found 3 problems"));
    }

    #[test]
    fn test_check_unreadable_project() {
        let dir = TempDir::new().unwrap();
        let err = check_project(&config(dir.path().join("none.mfd"))).unwrap_err();
        assert!(err.to_string().contains("none.mfd"));
    }
}
