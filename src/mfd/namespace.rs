//! Namespace entities (`<ns>.xml`).

use super::xml::{XmlAttribute, XmlEntity, XmlPackage, XmlSearch};

/// Separator of JSON field paths in attribute names (`Params->title`).
pub const JSON_FIELD_SEP: &str = "->";

#[derive(Debug, Clone, Default)]
pub struct Namespace {
    pub name: String,
    pub entities: Vec<Entity>,
}

impl Namespace {
    /// Find an entity by name (case-insensitive).
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }
}

impl From<XmlPackage> for Namespace {
    fn from(xml: XmlPackage) -> Self {
        Self {
            name: xml.name,
            entities: xml.entities.items.into_iter().map(Entity::from).collect(),
        }
    }
}

/// An entity with the parts that references point at.
#[derive(Debug, Clone, Default)]
pub struct Entity {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub searches: Vec<Search>,
}

impl Entity {
    /// Find an attribute by name. JSON paths resolve to their root attribute.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        let name = name.split(JSON_FIELD_SEP).next().unwrap_or(name);
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn search(&self, name: &str) -> Option<&Search> {
        self.searches.iter().find(|s| s.name == name)
    }
}

impl From<XmlEntity> for Entity {
    fn from(xml: XmlEntity) -> Self {
        Self {
            name: xml.name,
            attributes: xml.attributes.items.into_iter().map(Attribute::from).collect(),
            searches: xml.searches.items.into_iter().map(Search::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Attribute {
    pub name: String,
    /// Referenced entity name.
    pub foreign_key: Option<String>,
}

impl From<XmlAttribute> for Attribute {
    fn from(xml: XmlAttribute) -> Self {
        Self {
            name: xml.name,
            foreign_key: Some(xml.foreign_key).filter(|fk| !fk.is_empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Search {
    pub name: String,
    pub attr_name: String,
}

impl Search {
    /// Searches over another entity use `Entity.Attribute`.
    pub fn foreign_attribute(&self) -> Option<(&str, &str)> {
        self.attr_name.split_once('.')
    }
}

impl From<XmlSearch> for Search {
    fn from(xml: XmlSearch) -> Self {
        Self {
            name: xml.name,
            attr_name: xml.attr_name,
        }
    }
}
