use serde::{Deserialize, Serialize};

/// Asset as referenced from an asset element of an exported item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetReference {
    pub name: String,
    /// MIME type of the binary
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub description: Option<String>,
    /// Source URL; doubles as the external id of the re-created asset
    pub url: String,
}

/// Descriptor of an asset binary shipped inside an export package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedAsset {
    pub content_item_codename: String,
    pub asset: AssetReference,
    /// File name relative to the package's assets folder
    pub filename: String,
}

/// Embedded asset together with its binary payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFromFile {
    pub embedded_asset: EmbeddedAsset,
    pub data: Vec<u8>,
}

impl AssetFromFile {
    pub fn new(embedded_asset: EmbeddedAsset, data: Vec<u8>) -> Self {
        Self {
            embedded_asset,
            data,
        }
    }

    /// Whether this binary belongs to `asset` of the item `item_codename`
    pub fn matches(&self, item_codename: &str, asset: &AssetReference) -> bool {
        self.embedded_asset.content_item_codename == item_codename
            && self.embedded_asset.asset.url == asset.url
    }
}
