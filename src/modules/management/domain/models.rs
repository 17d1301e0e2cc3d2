//! Request and response contracts of the Content Management API
//!
//! Only the fields the import pipeline reads or writes are modelled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::content::TaxonomyTerm;

/// Reference to another object, either by server id or by codename
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Id { id: Uuid },
    Codename { codename: String },
}

impl Reference {
    pub fn by_id(id: Uuid) -> Self {
        Reference::Id { id }
    }

    pub fn by_codename(codename: impl Into<String>) -> Self {
        Reference::Codename {
            codename: codename.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdReference {
    pub id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddContentItemData {
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: Reference,
}

/// Identity fields of a content item created in the target project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedContentItem {
    pub id: Uuid,
    pub name: String,
    pub codename: String,
    #[serde(rename = "type")]
    pub content_type: IdReference,
    #[serde(default)]
    pub sitemap_locations: Vec<Reference>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadBinaryFileData {
    pub binary_data: Vec<u8>,
    pub content_length: u64,
    pub content_type: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub reference_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescription {
    pub language: Reference,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddAssetData {
    pub file_reference: FileReference,
    pub title: Option<String>,
    pub descriptions: Vec<AssetDescription>,
    pub external_id: Option<String>,
}

/// Asset record created in the target project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedAsset {
    pub id: Uuid,
    pub file_name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub size: u64,
    /// MIME type
    #[serde(rename = "type")]
    pub mime_type: String,
    pub file_reference: FileReference,
    #[serde(default)]
    pub descriptions: Vec<AssetDescription>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
}

/// Element value written to a language variant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ElementValue {
    Text(String),
    Number(Option<f64>),
    DateTime(Option<String>),
    Terms(Vec<TaxonomyTerm>),
    References(Vec<Reference>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageVariantElement {
    pub codename: String,
    pub value: ElementValue,
}

/// Language variant as returned by an upsert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageVariant {
    pub item: IdReference,
    pub language: IdReference,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub elements: Vec<serde_json::Value>,
}
