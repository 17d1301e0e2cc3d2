use crate::log_debug;
use crate::modules::content::{AssetFromFile, AssetReference, ContentItem};
use crate::modules::management::domain::{
    AddAssetData, AssetDescription, BinarySource, ContentManagementClient, CreatedAsset,
    Reference, UploadBinaryFileData,
};
use crate::shared::errors::AppResult;
use futures::future::try_join_all;
use std::sync::Arc;

use super::progress_tracker::ProgressTracker;
use super::types::ImportAction;

/// Asset binary ready for upload
struct AssetBinary<'a> {
    asset: &'a AssetReference,
    data: Vec<u8>,
}

/// Re-creates the assets referenced by a content item in the target project
#[derive(Clone)]
pub struct AssetImporter {
    binary_source: Arc<dyn BinarySource>,
}

impl AssetImporter {
    pub fn new(binary_source: Arc<dyn BinarySource>) -> Self {
        Self { binary_source }
    }

    /// Upload and register every asset referenced from `item`'s asset fields
    ///
    /// All assets of the item are processed concurrently; the call resolves once
    /// every one of them exists, or with the first failure.
    pub async fn import_item_assets(
        &self,
        item: &ContentItem,
        assets_from_file: &[AssetFromFile],
        client: &dyn ContentManagementClient,
        tracker: &ProgressTracker,
    ) -> AppResult<Vec<CreatedAsset>> {
        let pipelines = item
            .asset_fields()
            .flat_map(|(_, references)| references.iter())
            .map(|asset| self.import_asset(item, asset, assets_from_file, client, tracker));

        try_join_all(pipelines).await
    }

    async fn import_asset(
        &self,
        item: &ContentItem,
        asset: &AssetReference,
        assets_from_file: &[AssetFromFile],
        client: &dyn ContentManagementClient,
        tracker: &ProgressTracker,
    ) -> AppResult<CreatedAsset> {
        let binary = self.resolve_binary(item, asset, assets_from_file).await?;

        let content_length = binary.data.len() as u64;
        let file_reference = client
            .upload_binary_file(UploadBinaryFileData {
                binary_data: binary.data,
                content_length,
                content_type: binary.asset.mime_type.clone(),
                filename: binary.asset.name.clone(),
            })
            .await?;
        tracker.report(
            item,
            ImportAction::UploadBinaryFile,
            format!("[{}] - {}", file_reference.reference_type, file_reference.id),
        );

        let created = client
            .create_asset(AddAssetData {
                file_reference,
                title: Some(binary.asset.name.clone()),
                descriptions: vec![AssetDescription {
                    language: Reference::by_codename(item.language()),
                    description: binary.asset.description.clone(),
                }],
                external_id: Some(binary.asset.url.clone()),
            })
            .await?;
        tracker.report(
            item,
            ImportAction::AddAsset,
            format!("[{}] - {}", created.mime_type, created.id),
        );

        Ok(created)
    }

    /// Packaged binaries take precedence; anything else is downloaded from its URL
    async fn resolve_binary<'a>(
        &self,
        item: &ContentItem,
        asset: &'a AssetReference,
        assets_from_file: &[AssetFromFile],
    ) -> AppResult<AssetBinary<'a>> {
        if let Some(from_file) = assets_from_file
            .iter()
            .find(|candidate| candidate.matches(item.codename(), asset))
        {
            log_debug!(
                "Using packaged binary '{}' for asset '{}'",
                from_file.embedded_asset.filename,
                asset.url
            );
            return Ok(AssetBinary {
                asset,
                data: from_file.data.clone(),
            });
        }

        let data = self.binary_source.fetch(&asset.url).await?;
        Ok(AssetBinary { asset, data })
    }
}
