use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::asset::AssetReference;

/// Content item as exported from the source project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub system: ContentItemSystem,
    #[serde(default)]
    pub elements: BTreeMap<String, ElementField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItemSystem {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub codename: String,
    #[serde(default)]
    pub language: String,
    #[serde(rename = "type")]
    pub type_codename: String,
}

/// Typed element value, keyed by the element's `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementField {
    Text { value: String },
    RichText { value: String },
    Number { value: Option<f64> },
    DateTime { value: Option<String> },
    UrlSlug { value: String },
    Custom { value: String },
    Taxonomy { value: Vec<TaxonomyTerm> },
    MultipleChoice { value: Vec<MultipleChoiceOption> },
    /// Linked items, referenced by codename
    ModularContent { value: Vec<String> },
    Asset { value: Vec<AssetReference> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleChoiceOption {
    pub name: String,
    pub codename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyTerm {
    pub name: String,
    pub codename: String,
}

impl ContentItem {
    pub fn codename(&self) -> &str {
        &self.system.codename
    }

    pub fn language(&self) -> &str {
        &self.system.language
    }

    /// Asset fields of this item, in element codename order
    pub fn asset_fields(&self) -> impl Iterator<Item = (&str, &[AssetReference])> {
        self.elements
            .iter()
            .filter_map(|(codename, field)| match field {
                ElementField::Asset { value } => Some((codename.as_str(), value.as_slice())),
                _ => None,
            })
    }

    pub fn has_asset_fields(&self) -> bool {
        self.asset_fields().next().is_some()
    }
}
