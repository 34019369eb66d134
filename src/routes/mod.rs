//! Admin route table.
//!
//! Every routed VT entity gets three route records, in this order:
//!
//! | Kind | Name               | Path                   | View       |
//! |------|--------------------|------------------------|------------|
//! | List | `<var>List`        | `/<terminal>`          | `List.vue` |
//! | Edit | `<var>Edit`        | `/<terminal>/:id/edit` | `Form.vue` |
//! | Add  | `<var>Add`         | `/<terminal>/add`      | `Form.vue` |
//!
//! Breadcrumbs start at the dashboard, go through the list page and end
//! at the page itself.

mod render;
mod write;

pub use write::{SaveStatus, save};

use crate::debug;
use crate::mfd::{Selected, VtEntity};
use crate::naming::{make_plural, url_name, var_name};
use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Default location of the route file inside the frontend.
pub const DEFAULT_ROUTES_PATH: &str = "src/pages/Entity/routes.ts";
pub const DEFAULT_IMPORT_PREFIX: &str = "@/pages/Entity";
pub const DEFAULT_BREADCRUMB_ROOT: &str = "dashboard";

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route name `{name}` of entity `{entity}` already used by entity `{existing}`")]
    DuplicateName {
        name: String,
        entity: String,
        existing: String,
    },

    #[error("invalid terminal path `{path}` for entity `{entity}`")]
    InvalidTerminalPath { entity: String, path: String },
}

/// How records are built and rendered.
#[derive(Debug, Clone)]
pub struct RouteOptions {
    /// Module path the page components are imported from.
    pub import_prefix: String,
    /// First breadcrumb of every route.
    pub breadcrumb_root: String,
    /// Emit `webpackChunkName` comments in imports.
    pub chunk_names: bool,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            import_prefix: DEFAULT_IMPORT_PREFIX.to_string(),
            breadcrumb_root: DEFAULT_BREADCRUMB_ROOT.to_string(),
            chunk_names: false,
        }
    }
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RouteKind {
    List,
    Edit,
    Add,
}

impl RouteKind {
    /// Output order of one entity's records.
    pub const ALL: [Self; 3] = [Self::List, Self::Edit, Self::Add];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Edit => "Edit",
            Self::Add => "Add",
        }
    }

    /// Page component rendering this kind.
    pub const fn view(self) -> View {
        match self {
            Self::List => View::List,
            Self::Edit | Self::Add => View::Form,
        }
    }

    fn path(self, terminal: &str) -> String {
        match self {
            Self::List => format!("/{terminal}"),
            Self::Edit => format!("/{terminal}/:id/edit"),
            Self::Add => format!("/{terminal}/add"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Form,
}

impl View {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Form => "Form",
        }
    }
}

/// Lazily imported page component, `<prefix>/<Entity>/<View>.vue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRef {
    pub entity: String,
    pub view: View,
    pub import_path: String,
}

impl ComponentRef {
    fn new(entity: &str, view: View, prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');
        Self {
            entity: entity.to_string(),
            view,
            import_path: format!("{prefix}/{entity}/{}.vue", view.as_str()),
        }
    }

    /// Bundle chunk of the component, e.g. `CategoryList`.
    pub fn chunk_name(&self) -> String {
        format!("{}{}", self.entity, self.view.as_str())
    }
}

impl Serialize for ComponentRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.import_path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    pub breadcrumbs: Vec<String>,
}

/// One route configuration record.
///
/// Serializes to the same shape as the generated file:
/// `{ name, path, component, meta: { breadcrumbs } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRecord {
    #[serde(skip)]
    pub kind: RouteKind,
    pub name: String,
    pub path: String,
    pub component: ComponentRef,
    pub meta: RouteMeta,
}

/// The three records of one entity.
#[derive(Debug, Clone)]
pub struct EntityRoutes {
    pub entity: String,
    pub namespace: String,
    pub records: Vec<RouteRecord>,
}

impl EntityRoutes {
    fn build(
        entity: &VtEntity,
        namespace: &str,
        options: &RouteOptions,
    ) -> Result<Self, RouteError> {
        let terminal = terminal_path(entity)?;
        let var = var_name(&entity.name);
        let list_name = format!("{var}{}", RouteKind::List.as_str());

        let records = RouteKind::ALL
            .into_iter()
            .map(|kind| {
                let name = format!("{var}{}", kind.as_str());

                let mut breadcrumbs = vec![options.breadcrumb_root.clone(), list_name.clone()];
                if kind != RouteKind::List {
                    breadcrumbs.push(name.clone());
                }

                RouteRecord {
                    kind,
                    path: kind.path(&terminal),
                    component: ComponentRef::new(&entity.name, kind.view(), &options.import_prefix),
                    meta: RouteMeta { breadcrumbs },
                    name,
                }
            })
            .collect();

        Ok(Self {
            entity: entity.name.clone(),
            namespace: namespace.to_string(),
            records,
        })
    }
}

/// Resolve the URL segment of an entity.
///
/// An empty terminal path is derived from the plural entity name.
fn terminal_path(entity: &VtEntity) -> Result<String, RouteError> {
    let raw = entity.terminal_path.as_str();
    if raw.is_empty() {
        return Ok(url_name(&make_plural(&entity.name)));
    }

    let trimmed = raw.trim_matches('/');
    if trimmed.len() != raw.len() {
        debug!("routes"; "terminal path `{}` of {} trimmed to `{}`", raw, entity.name, trimmed);
    }

    let invalid = trimmed.is_empty()
        || trimmed.contains("//")
        || trimmed
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\' | '`' | '?' | '#'));
    if invalid {
        return Err(RouteError::InvalidTerminalPath {
            entity: entity.name.clone(),
            path: raw.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

// ============================================================================
// Table
// ============================================================================

/// Ordered route records of every selected entity.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    pub entities: Vec<EntityRoutes>,
}

impl RouteTable {
    /// Build records for selected entities that have templates.
    ///
    /// Order follows the selection: namespaces first, then entities in file
    /// order.
    pub fn build(selection: &[Selected<'_>], options: &RouteOptions) -> Result<Self, RouteError> {
        let mut entities = Vec::new();
        let mut owners: FxHashMap<String, String> = FxHashMap::default();

        for selected in selection {
            for vt_entity in &selected.entities {
                if !vt_entity.mode.has_templates() {
                    debug!("routes"; "skipped {} ({} mode)", vt_entity.name, vt_entity.mode.as_str());
                    continue;
                }

                let routes = EntityRoutes::build(vt_entity, &selected.namespace.name, options)?;
                for record in &routes.records {
                    if let Some(existing) = owners.insert(record.name.clone(), routes.entity.clone()) {
                        return Err(RouteError::DuplicateName {
                            name: record.name.clone(),
                            entity: routes.entity.clone(),
                            existing,
                        });
                    }
                }

                entities.push(routes);
            }
        }

        Ok(Self { entities })
    }

    /// All records in output order.
    pub fn records(&self) -> impl Iterator<Item = &RouteRecord> {
        self.entities.iter().flat_map(|e| e.records.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mfd::Project;
    use crate::mfd::vt::{VtMode, VtNamespace};
    use std::path::Path;

    fn vt_entity(name: &str, terminal_path: &str, mode: VtMode) -> VtEntity {
        VtEntity {
            name: name.into(),
            mode,
            terminal_path: terminal_path.into(),
            attributes: Vec::new(),
            template: Vec::new(),
        }
    }

    fn table_of(entities: Vec<VtEntity>) -> Result<RouteTable, RouteError> {
        let namespace = VtNamespace {
            name: "test".into(),
            entities,
        };
        let selection = [Selected {
            namespace: &namespace,
            entities: namespace.entities.iter().collect(),
        }];
        RouteTable::build(&selection, &RouteOptions::default())
    }

    #[test]
    fn test_entity_records() {
        let table = table_of(vec![vt_entity("EncryptionKey", "encryption-keys", VtMode::Full)]).unwrap();
        let records: Vec<_> = table.records().collect();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "encryptionKeyList");
        assert_eq!(records[0].path, "/encryption-keys");
        assert_eq!(records[0].component.import_path, "@/pages/Entity/EncryptionKey/List.vue");
        assert_eq!(records[0].meta.breadcrumbs, ["dashboard", "encryptionKeyList"]);

        assert_eq!(records[1].name, "encryptionKeyEdit");
        assert_eq!(records[1].path, "/encryption-keys/:id/edit");
        assert_eq!(records[1].component.view, View::Form);
        assert_eq!(
            records[1].meta.breadcrumbs,
            ["dashboard", "encryptionKeyList", "encryptionKeyEdit"]
        );

        assert_eq!(records[2].name, "encryptionKeyAdd");
        assert_eq!(records[2].path, "/encryption-keys/add");
        assert_eq!(records[2].component.chunk_name(), "EncryptionKeyForm");
    }

    #[test]
    fn test_modes_without_templates_are_skipped() {
        let table = table_of(vec![
            vt_entity("Tag", "tags", VtMode::Full),
            vt_entity("AuditLog", "audit-logs", VtMode::ReadOnly),
            vt_entity("Session", "sessions", VtMode::None),
            vt_entity("Folder", "folders", VtMode::ReadOnlyWithTemplates),
        ])
        .unwrap();

        let names: Vec<_> = table.entities.iter().map(|e| e.entity.as_str()).collect();
        assert_eq!(names, ["Tag", "Folder"]);
    }

    #[test]
    fn test_terminal_path_derived() {
        let table = table_of(vec![vt_entity("Country", "", VtMode::Full)]).unwrap();
        assert_eq!(table.entities[0].records[0].path, "/countries");
    }

    #[test]
    fn test_terminal_path_slashes_trimmed() {
        let table = table_of(vec![vt_entity("Tag", "/tags/", VtMode::Full)]).unwrap();
        assert_eq!(table.entities[0].records[1].path, "/tags/:id/edit");
    }

    #[test]
    fn test_terminal_path_invalid() {
        for path in ["/", "my tags", "a//b", "tags?x"] {
            let err = table_of(vec![vt_entity("Tag", path, VtMode::Full)]).unwrap_err();
            assert!(matches!(err, RouteError::InvalidTerminalPath { .. }), "{path}");
        }
    }

    #[test]
    fn test_duplicate_route_name() {
        let err = table_of(vec![
            vt_entity("Tag", "tags", VtMode::Full),
            vt_entity("tag", "tags-2", VtMode::Full),
        ])
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "route name `tagList` of entity `tag` already used by entity `Tag`"
        );
    }

    #[test]
    fn test_custom_options() {
        let namespace = VtNamespace {
            name: "test".into(),
            entities: vec![vt_entity("Tag", "tags", VtMode::Full)],
        };
        let selection = [Selected {
            namespace: &namespace,
            entities: namespace.entities.iter().collect(),
        }];
        let options = RouteOptions {
            import_prefix: "@/views/".into(),
            breadcrumb_root: "home".into(),
            chunk_names: false,
        };

        let table = RouteTable::build(&selection, &options).unwrap();
        let list = &table.entities[0].records[0];
        assert_eq!(list.component.import_path, "@/views/Tag/List.vue");
        assert_eq!(list.meta.breadcrumbs, ["home", "tagList"]);
    }

    #[test]
    fn test_record_json_shape() {
        let table = table_of(vec![vt_entity("Tag", "tags", VtMode::Full)]).unwrap();
        let json = serde_json::to_value(table.records().next().unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "tagList",
                "path": "/tags",
                "component": "@/pages/Entity/Tag/List.vue",
                "meta": { "breadcrumbs": ["dashboard", "tagList"] }
            })
        );
    }

    #[test]
    fn test_fixture_order() {
        let mfd = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/newsportal/newsportal.mfd");
        let project = Project::load(&mfd).unwrap();
        let table = RouteTable::build(&project.select(&[], &[]), &RouteOptions::default()).unwrap();

        let names: Vec<_> = table.entities.iter().map(|e| e.entity.as_str()).collect();
        assert_eq!(
            names,
            [
                "Category",
                "News",
                "Tag",
                "City",
                "Country",
                "Region",
                "EncryptionKey",
                "VfsFile",
                "VfsFolder"
            ]
        );
        assert_eq!(table.records().count(), 27);
    }
}
