//! MFD project: the `.mfd` file plus every namespace it lists.

use super::namespace::{Entity, Namespace};
use super::vt::{VtEntity, VtNamespace};
use super::xml::{XmlPackage, XmlProject, XmlVtNamespace, read_xml};
use super::MfdError;
use crate::naming::{is_reserved, is_reserved_by_model};
use crate::{debug, log};
use rayon::prelude::*;
use std::path::Path;

/// Language used when the project file lists none.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Supported go-pg major versions.
const GO_PG_VERSIONS: std::ops::RangeInclusive<u32> = 8..=10;

const NAMESPACE_EXT: &str = "xml";
const VT_NAMESPACE_EXT: &str = "vt.xml";

#[derive(Debug, Clone, Default)]
pub struct Project {
    pub name: String,
    /// Namespace names as listed in the project file.
    pub namespace_names: Vec<String>,
    pub languages: Vec<String>,
    /// go-pg version, `0` when unset.
    pub go_pg_ver: u32,
    pub namespaces: Vec<Namespace>,
    pub vt_namespaces: Vec<VtNamespace>,
}

/// A VT namespace narrowed down to the entities picked by
/// [`Project::select`].
#[derive(Debug, Clone)]
pub struct Selected<'a> {
    pub namespace: &'a VtNamespace,
    pub entities: Vec<&'a VtEntity>,
}

impl Project {
    /// Load the project and check it for consistency.
    pub fn load(path: &Path) -> Result<Self, MfdError> {
        let project = Self::read(path)?;
        project.check_consistency()?;
        Ok(project)
    }

    /// Load the project without consistency checks.
    ///
    /// Namespace files are parsed in parallel. Namespaces and VT namespaces
    /// without entities are dropped.
    pub fn read(path: &Path) -> Result<Self, MfdError> {
        let xml: XmlProject = read_xml(path)?;
        let dir = path.parent().unwrap_or_else(|| Path::new("."));

        let loaded = xml
            .package_names
            .items
            .par_iter()
            .map(|name| load_namespace(dir, name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut namespaces = Vec::with_capacity(loaded.len());
        let mut vt_namespaces = Vec::with_capacity(loaded.len());
        for (ns, vt) in loaded {
            if !ns.entities.is_empty() {
                namespaces.push(ns);
            }
            if !vt.entities.is_empty() {
                vt_namespaces.push(vt);
            }
        }

        let mut languages = xml.languages.items;
        if languages.is_empty() {
            languages.push(DEFAULT_LANGUAGE.to_string());
        }

        let project = Self {
            name: xml.name,
            namespace_names: xml.package_names.items,
            languages,
            go_pg_ver: xml.go_pg_ver,
            namespaces,
            vt_namespaces,
        };
        debug!(
            "mfd";
            "loaded {}: {} namespaces, {} vt namespaces, languages {}",
            project.name,
            project.namespaces.len(),
            project.vt_namespaces.len(),
            project.languages.join(", ")
        );
        Ok(project)
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces
            .iter()
            .find(|ns| ns.name.eq_ignore_ascii_case(name))
    }

    pub fn vt_namespace(&self, name: &str) -> Option<&VtNamespace> {
        self.vt_namespaces
            .iter()
            .find(|ns| ns.name.eq_ignore_ascii_case(name))
    }

    /// Find an entity in any namespace.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.namespaces.iter().find_map(|ns| ns.entity(name))
    }

    /// Find a VT entity in any VT namespace.
    pub fn vt_entity(&self, name: &str) -> Option<&VtEntity> {
        self.vt_namespaces.iter().find_map(|ns| ns.entity(name))
    }

    // ========================================================================
    // Checks
    // ========================================================================

    /// Check that every reference in the project resolves.
    ///
    /// Returns the first broken reference found.
    pub fn check_consistency(&self) -> Result<(), MfdError> {
        if self.go_pg_ver != 0 && !GO_PG_VERSIONS.contains(&self.go_pg_ver) {
            return Err(MfdError::GoPgVersion(self.go_pg_ver));
        }

        for name in &self.namespace_names {
            let ns = self.namespace(name).ok_or_else(|| {
                MfdError::Inconsistent(format!("namespace {name} listed in names but not found"))
            })?;

            for entity in &ns.entities {
                self.check_entity(entity, name)?;
            }
        }

        for vt_ns in &self.vt_namespaces {
            if self.namespace(&vt_ns.name).is_none() {
                return Err(MfdError::Inconsistent(format!(
                    "namespace {} not found for vt",
                    vt_ns.name
                )));
            }

            for vt_entity in &vt_ns.entities {
                self.check_vt_entity(vt_entity, &vt_ns.name)?;
            }
        }

        Ok(())
    }

    fn check_entity(&self, entity: &Entity, namespace: &str) -> Result<(), MfdError> {
        for attr in &entity.attributes {
            if let Some(fk) = &attr.foreign_key
                && self.entity(fk).is_none()
            {
                return Err(MfdError::Inconsistent(format!(
                    "fk entity {fk} not found for {} column in {} entity {namespace} namespace",
                    attr.name, entity.name
                )));
            }
        }

        for search in &entity.searches {
            let found = match search.foreign_attribute() {
                Some((foreign, attr)) => self
                    .entity(foreign)
                    .is_some_and(|e| e.attribute(attr).is_some()),
                None => entity.attribute(&search.attr_name).is_some(),
            };

            if !found {
                return Err(MfdError::Inconsistent(format!(
                    "attribute {} not found for {} search in {} entity {namespace} namespace",
                    search.attr_name, search.name, entity.name
                )));
            }
        }

        Ok(())
    }

    fn check_vt_entity(&self, vt_entity: &VtEntity, namespace: &str) -> Result<(), MfdError> {
        let entity = self.entity(&vt_entity.name).ok_or_else(|| {
            MfdError::Inconsistent(format!(
                "entity not found vtEntity {} in {namespace} namespace",
                vt_entity.name
            ))
        })?;

        for vt_attr in &vt_entity.attributes {
            if let Some(attr_name) = &vt_attr.attr_name {
                if entity.attribute(attr_name).is_none() {
                    return Err(MfdError::Inconsistent(format!(
                        "attribute {attr_name} not found for attribute {} in vtEntity {} in {namespace} namespace",
                        vt_attr.name, vt_entity.name
                    )));
                }
            } else if let Some(search_name) = &vt_attr.search_name {
                // search fields may also filter by a plain attribute
                if entity.search(search_name).is_none() && entity.attribute(search_name).is_none() {
                    return Err(MfdError::Inconsistent(format!(
                        "search {search_name} not found for attribute {} in vtEntity {} in {namespace} namespace",
                        vt_attr.name, vt_entity.name
                    )));
                }
            }
        }

        for tmpl_attr in &vt_entity.template {
            if let Some(vt_attr_name) = &tmpl_attr.vt_attr_name
                && vt_entity.attribute(vt_attr_name).is_none()
            {
                return Err(MfdError::Inconsistent(format!(
                    "vt attribute {vt_attr_name} not found for template attribute {} in vtEntity {} in {namespace} namespace",
                    tmpl_attr.name, vt_entity.name
                )));
            }
        }

        Ok(())
    }

    /// Collect every namespace and entity name that collides with a
    /// reserved word.
    ///
    /// VT entities that only get read-only server code are skipped.
    pub fn validate_names(&self) -> Result<(), MfdError> {
        let reserved = |name: &str| is_reserved(name) || is_reserved_by_model(name);
        let mut errors = Vec::new();

        for ns in &self.namespaces {
            if reserved(&ns.name) {
                errors.push(format!(r#"namespace name: "{}" is reserved"#, ns.name));
            }
            for entity in ns.entities.iter().filter(|e| reserved(&e.name)) {
                errors.push(format!(r#"entity name: "{}" is reserved"#, entity.name));
            }
        }

        for ns in &self.vt_namespaces {
            if reserved(&ns.name) {
                errors.push(format!(r#"namespace name: "{}" is reserved"#, ns.name));
            }
            for entity in ns
                .entities
                .iter()
                .filter(|e| !e.mode.is_read_only() && reserved(&e.name))
            {
                errors.push(format!(r#"vt entity name: "{}" is reserved"#, entity.name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(MfdError::ReservedNames(errors))
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Pick VT namespaces and entities by name (case-insensitive).
    ///
    /// Empty filters keep everything. Namespaces follow the order of
    /// `namespaces`, repeated names count once, unknown names are logged
    /// and skipped. Namespaces left without entities are dropped.
    pub fn select(&self, namespaces: &[String], entities: &[String]) -> Vec<Selected<'_>> {
        let picked: Vec<&VtNamespace> = if namespaces.is_empty() {
            self.vt_namespaces.iter().collect()
        } else {
            let mut picked: Vec<&VtNamespace> = Vec::with_capacity(namespaces.len());
            for name in namespaces {
                match self.vt_namespace(name) {
                    Some(ns) if picked.iter().any(|p| std::ptr::eq(*p, ns)) => {
                        debug!("mfd"; "vt namespace {name} selected twice");
                    }
                    Some(ns) => picked.push(ns),
                    None => log!("warn"; "vt namespace {name} not found in project, skipped"),
                }
            }
            picked
        };

        for name in entities {
            if !picked.iter().any(|ns| ns.entity(name).is_some()) {
                log!("warn"; "vt entity {name} not found in selected namespaces, skipped");
            }
        }

        picked
            .into_iter()
            .filter_map(|namespace| {
                let entities: Vec<_> = namespace
                    .entities
                    .iter()
                    .filter(|e| {
                        entities.is_empty() || entities.iter().any(|n| e.name.eq_ignore_ascii_case(n))
                    })
                    .collect();

                (!entities.is_empty()).then_some(Selected {
                    namespace,
                    entities,
                })
            })
            .collect()
    }
}

/// Load `<name>.xml` and the optional `<name>.vt.xml` next to it.
fn load_namespace(dir: &Path, name: &str) -> Result<(Namespace, VtNamespace), MfdError> {
    let ns_path = dir.join(format!("{name}.{NAMESPACE_EXT}"));
    if !ns_path.is_file() {
        return Err(MfdError::MissingNamespace {
            name: name.to_string(),
            path: ns_path,
        });
    }
    let namespace = Namespace::from(read_xml::<XmlPackage>(&ns_path)?);

    let vt_path = dir.join(format!("{name}.{VT_NAMESPACE_EXT}"));
    let vt_namespace = if vt_path.is_file() {
        VtNamespace::from_xml(read_xml::<XmlVtNamespace>(&vt_path)?, name)?
    } else {
        debug!("mfd"; "no {} found, skipped", vt_path.display());
        VtNamespace {
            name: name.to_string(),
            entities: Vec::new(),
        }
    };

    Ok((namespace, vt_namespace))
}
