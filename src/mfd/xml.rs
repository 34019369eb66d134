//! XML wire format of MFD files.
//!
//! These structs mirror the files, wrapper elements included, but only
//! carry what references and routes need. Other elements and attributes
//! are ignored, so newer project files still load. Conversion into the domain model lives next to the domain
//! types.

use super::MfdError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::{fs, path::Path};

/// Read and deserialize one XML file.
pub fn read_xml<T: DeserializeOwned>(path: &Path) -> Result<T, MfdError> {
    let content = fs::read_to_string(path).map_err(|e| MfdError::Io(path.to_path_buf(), e))?;
    quick_xml::de::from_str(&content).map_err(|e| MfdError::Xml(path.to_path_buf(), e))
}

/// `<string>` list used by `PackageNames` and `Languages`.
#[derive(Debug, Default, Deserialize)]
pub struct StringList {
    #[serde(rename = "string", default)]
    pub items: Vec<String>,
}

// ============================================================================
// <name>.mfd
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct XmlProject {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "PackageNames", default)]
    pub package_names: StringList,
    #[serde(rename = "Languages", default)]
    pub languages: StringList,
    #[serde(rename = "GoPGVer", default)]
    pub go_pg_ver: u32,
}

// ============================================================================
// <ns>.xml
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct XmlPackage {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Entities", default)]
    pub entities: XmlEntities,
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlEntities {
    #[serde(rename = "Entity", default)]
    pub items: Vec<XmlEntity>,
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlEntity {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "Attributes", default)]
    pub attributes: XmlAttributes,
    #[serde(rename = "Searches", default)]
    pub searches: XmlSearches,
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlAttributes {
    #[serde(rename = "Attribute", default)]
    pub items: Vec<XmlAttribute>,
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlAttribute {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@FK", default)]
    pub foreign_key: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlSearches {
    #[serde(rename = "Search", default)]
    pub items: Vec<XmlSearch>,
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlSearch {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@AttrName", default)]
    pub attr_name: String,
}

// ============================================================================
// <ns>.vt.xml
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct XmlVtNamespace {
    #[serde(rename = "@Name", default)]
    pub name: String,
    /// Older files wrap entities in `<VTEntities>`.
    #[serde(rename = "Entities", alias = "VTEntities", default)]
    pub entities: XmlVtEntities,
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlVtEntities {
    #[serde(rename = "Entity", default)]
    pub items: Vec<XmlVtEntity>,
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlVtEntity {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@Mode", default)]
    pub mode: String,
    #[serde(rename = "@NoTemplates", default)]
    pub no_templates: bool,
    #[serde(rename = "TerminalPath", default)]
    pub terminal_path: String,
    #[serde(rename = "Attributes", default)]
    pub attributes: XmlVtAttributes,
    #[serde(rename = "Template", default)]
    pub template: XmlTmplAttributes,
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlVtAttributes {
    #[serde(rename = "Attribute", default)]
    pub items: Vec<XmlVtAttribute>,
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlVtAttribute {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@AttrName", default)]
    pub attr_name: String,
    #[serde(rename = "@SearchName", default)]
    pub search_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlTmplAttributes {
    #[serde(rename = "Attribute", default)]
    pub items: Vec<XmlTmplAttribute>,
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlTmplAttribute {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@VTAttrName", default)]
    pub vt_attr_name: String,
}
