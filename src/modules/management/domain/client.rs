use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::models::{
    AddAssetData, AddContentItemData, CreatedAsset, CreatedContentItem, FileReference,
    LanguageVariant, LanguageVariantElement, UploadBinaryFileData,
};

/// Write access to a target project of the Content Management API
///
/// Every call resolves to a single response carrying server-assigned
/// identity fields. Implementations surface transport failures as errors and
/// never retry.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContentManagementClient: Send + Sync {
    /// Create an empty content item of the given type
    async fn create_content_item(&self, data: AddContentItemData)
        -> AppResult<CreatedContentItem>;

    /// Upload a binary and obtain a reference to the stored file
    async fn upload_binary_file(&self, data: UploadBinaryFileData) -> AppResult<FileReference>;

    /// Create an asset record pointing at an uploaded file
    async fn create_asset(&self, data: AddAssetData) -> AppResult<CreatedAsset>;

    /// Insert or update the variant of `item_codename` in `language_codename`
    async fn upsert_language_variant(
        &self,
        item_codename: &str,
        language_codename: &str,
        elements: Vec<LanguageVariantElement>,
    ) -> AppResult<LanguageVariant>;

    /// Publish the variant of `item_codename` in `language_codename`
    async fn publish_language_variant(
        &self,
        item_codename: &str,
        language_codename: &str,
    ) -> AppResult<()>;
}

/// Resolves an asset's binary from its source URL
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BinarySource: Send + Sync {
    async fn fetch(&self, url: &str) -> AppResult<Vec<u8>>;
}
