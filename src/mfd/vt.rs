//! Admin UI description of entities (`<ns>.vt.xml`).

use super::MfdError;
use super::xml::{XmlTmplAttribute, XmlVtAttribute, XmlVtEntity, XmlVtNamespace};

/// How much admin UI an entity gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VtMode {
    /// Server methods and list/form templates.
    Full,
    /// Read-only server methods, templates still generated.
    ReadOnlyWithTemplates,
    /// Read-only server methods, no templates.
    ReadOnly,
    /// Nothing is generated.
    None,
}

impl VtMode {
    /// Resolve the mode attribute.
    ///
    /// Files written before modes existed only carry `NoTemplates`, which
    /// maps to `ReadOnly`. An absent mode means `Full`.
    pub fn resolve(entity: &str, mode: &str, no_templates: bool) -> Result<Self, MfdError> {
        match mode {
            "" if no_templates => Ok(Self::ReadOnly),
            "" | "Full" => Ok(Self::Full),
            "ReadOnlyWithTemplates" => Ok(Self::ReadOnlyWithTemplates),
            "ReadOnly" => Ok(Self::ReadOnly),
            "None" => Ok(Self::None),
            other => Err(MfdError::UnknownMode {
                entity: entity.to_string(),
                mode: other.to_string(),
            }),
        }
    }

    /// List and form pages exist, so the entity gets routes.
    pub const fn has_templates(self) -> bool {
        matches!(self, Self::Full | Self::ReadOnlyWithTemplates)
    }

    /// Modes skipped by name validation.
    pub const fn is_read_only(self) -> bool {
        matches!(self, Self::ReadOnly | Self::None)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::ReadOnlyWithTemplates => "ReadOnlyWithTemplates",
            Self::ReadOnly => "ReadOnly",
            Self::None => "None",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VtNamespace {
    pub name: String,
    pub entities: Vec<VtEntity>,
}

impl VtNamespace {
    /// Convert from the wire format. `fallback_name` is used when the file
    /// does not carry a `Name` attribute.
    pub fn from_xml(xml: XmlVtNamespace, fallback_name: &str) -> Result<Self, MfdError> {
        let name = if xml.name.is_empty() {
            fallback_name.to_string()
        } else {
            xml.name
        };

        let entities = xml
            .entities
            .items
            .into_iter()
            .map(VtEntity::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { name, entities })
    }

    pub fn entity(&self, name: &str) -> Option<&VtEntity> {
        self.entities
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone)]
pub struct VtEntity {
    pub name: String,
    pub mode: VtMode,
    /// URL segment of the entity pages. Empty means "derive from name".
    pub terminal_path: String,
    pub attributes: Vec<VtAttribute>,
    /// List and form fields, each bound to one of `attributes`.
    pub template: Vec<TmplAttribute>,
}

impl VtEntity {
    pub fn attribute(&self, name: &str) -> Option<&VtAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

impl TryFrom<XmlVtEntity> for VtEntity {
    type Error = MfdError;

    fn try_from(xml: XmlVtEntity) -> Result<Self, Self::Error> {
        let mode = VtMode::resolve(&xml.name, &xml.mode, xml.no_templates)?;

        Ok(Self {
            mode,
            terminal_path: xml.terminal_path.trim().to_string(),
            attributes: xml
                .attributes
                .items
                .into_iter()
                .map(VtAttribute::from)
                .collect(),
            template: xml
                .template
                .items
                .into_iter()
                .map(TmplAttribute::from)
                .collect(),
            name: xml.name,
        })
    }
}

#[derive(Debug, Clone)]
pub struct VtAttribute {
    pub name: String,
    /// Entity attribute this field edits.
    pub attr_name: Option<String>,
    /// Entity search this field filters by.
    pub search_name: Option<String>,
}

impl From<XmlVtAttribute> for VtAttribute {
    fn from(xml: XmlVtAttribute) -> Self {
        Self {
            name: xml.name,
            attr_name: non_empty(xml.attr_name),
            search_name: non_empty(xml.search_name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TmplAttribute {
    pub name: String,
    /// VT attribute shown by this field, `None` for layout-only fields.
    pub vt_attr_name: Option<String>,
}

impl From<XmlTmplAttribute> for TmplAttribute {
    fn from(xml: XmlTmplAttribute) -> Self {
        Self {
            name: xml.name,
            vt_attr_name: non_empty(xml.vt_attr_name),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_resolve() {
        assert_eq!(VtMode::resolve("A", "Full", false).unwrap(), VtMode::Full);
        assert_eq!(VtMode::resolve("A", "", false).unwrap(), VtMode::Full);
        assert_eq!(
            VtMode::resolve("A", "ReadOnlyWithTemplates", false).unwrap(),
            VtMode::ReadOnlyWithTemplates
        );
        assert_eq!(VtMode::resolve("A", "None", false).unwrap(), VtMode::None);
    }

    #[test]
    fn test_mode_resolve_legacy_no_templates() {
        assert_eq!(VtMode::resolve("A", "", true).unwrap(), VtMode::ReadOnly);
        // explicit mode wins over the legacy flag
        assert_eq!(VtMode::resolve("A", "Full", true).unwrap(), VtMode::Full);
    }

    #[test]
    fn test_mode_resolve_unknown() {
        let err = VtMode::resolve("Tag", "Partial", false).unwrap_err();
        assert!(matches!(
            err,
            MfdError::UnknownMode { ref entity, ref mode } if entity == "Tag" && mode == "Partial"
        ));
    }

    #[test]
    fn test_mode_has_templates() {
        assert!(VtMode::Full.has_templates());
        assert!(VtMode::ReadOnlyWithTemplates.has_templates());
        assert!(!VtMode::ReadOnly.has_templates());
        assert!(!VtMode::None.has_templates());
    }

    #[test]
    fn test_namespace_fallback_name() {
        let xml: XmlVtNamespace = quick_xml::de::from_str(
            r#"<VTNamespace><Entities><Entity Name="Tag"><TerminalPath> tags </TerminalPath></Entity></Entities></VTNamespace>"#,
        )
        .unwrap();
        let ns = VtNamespace::from_xml(xml, "portal").unwrap();

        assert_eq!(ns.name, "portal");
        assert_eq!(ns.entity("tag").unwrap().terminal_path, "tags");
        assert_eq!(ns.entities[0].mode, VtMode::Full);
    }

    #[test]
    fn test_entity_template_links() {
        let xml: XmlVtNamespace = quick_xml::de::from_str(
            r#"<VTNamespace Name="shop"><Entities><Entity Name="Brand">
                <Attributes>
                    <Attribute Name="Title" AttrName="Title"></Attribute>
                    <Attribute Name="IDs" SearchName="IDs"></Attribute>
                </Attributes>
                <Template>
                    <Attribute Name="Title" VTAttrName="Title" List="true" Form="HTML_INPUT"></Attribute>
                    <Attribute Name="Divider" VTAttrName=""></Attribute>
                </Template>
            </Entity></Entities></VTNamespace>"#,
        )
        .unwrap();
        let ns = VtNamespace::from_xml(xml, "ignored").unwrap();
        let entity = ns.entity("Brand").unwrap();

        assert_eq!(ns.name, "shop");
        assert_eq!(entity.attribute("IDs").unwrap().search_name.as_deref(), Some("IDs"));
        assert!(entity.attribute("IDs").unwrap().attr_name.is_none());
        assert_eq!(entity.template[0].vt_attr_name.as_deref(), Some("Title"));
        assert!(entity.template[1].vt_attr_name.is_none());
        assert!(entity.attribute("title").is_none());
    }
}
