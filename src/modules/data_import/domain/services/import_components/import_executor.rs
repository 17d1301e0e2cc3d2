use crate::modules::content::{AssetFromFile, ContentItem};
use crate::modules::management::domain::{AddContentItemData, ContentManagementClient, Reference};
use crate::shared::errors::AppResult;
use crate::shared::utils::{TimedOperation, Validator};
use crate::log_debug;
use std::time::Duration;

use super::asset_importer::AssetImporter;
use super::element_mapper::ElementMapper;
use super::progress_tracker::ProgressTracker;
use super::types::{ImportAction, ItemImportResult, PendingItemImport};

/// Runs the dependent API calls that import a single content item
///
/// Order within an item is fixed: item, then all of its assets, then the
/// language variant (and its publication when enabled).
#[derive(Clone)]
pub struct ImportExecutor {
    asset_importer: AssetImporter,
    request_delay: Duration,
    publish_language_variants: bool,
}

impl ImportExecutor {
    pub fn new(
        asset_importer: AssetImporter,
        request_delay: Duration,
        publish_language_variants: bool,
    ) -> Self {
        Self {
            asset_importer,
            request_delay,
            publish_language_variants,
        }
    }

    pub async fn import_content_item(
        &self,
        item: &ContentItem,
        assets_from_file: &[AssetFromFile],
        client: &dyn ContentManagementClient,
        tracker: &ProgressTracker,
    ) -> AppResult<ItemImportResult> {
        let item_timer = TimedOperation::new("import_content_item");
        let mut pending = PendingItemImport::default();

        let created_item = client
            .create_content_item(AddContentItemData {
                name: item.system.name.clone(),
                content_type: Reference::by_codename(item.system.type_codename.as_str()),
            })
            .await?;
        let codename = created_item.codename.clone();
        tracker.report(item, ImportAction::AddContentItem, codename.clone());
        pending.content_item = Some(created_item);

        // pacing for the target API's rate limit
        tokio::time::sleep(self.request_delay).await;

        let assets = if item.has_asset_fields() {
            self.asset_importer
                .import_item_assets(item, assets_from_file, client, tracker)
                .await?
        } else {
            log_debug!("Item '{}' has no asset fields", item.codename());
            Vec::new()
        };

        Validator::validate_language_codename(item.codename(), item.language())?;

        let elements = ElementMapper::map_elements(item, &assets);
        pending.assets = Some(assets);

        let language_variant = client
            .upsert_language_variant(&codename, item.language(), elements)
            .await?;
        tracker.report(
            item,
            ImportAction::AddLanguageVariant,
            format!(
                "{} [{}] | {}",
                codename,
                item.language(),
                language_variant.item.id
            ),
        );
        pending.language_variant = Some(language_variant);

        if self.publish_language_variants {
            client
                .publish_language_variant(&codename, item.language())
                .await?;
            tracker.report(
                item,
                ImportAction::PublishLanguageVariant,
                format!("{} [{}]", codename, item.language()),
            );
        }

        let result = pending.finish()?;
        item_timer.finish_with_info(item.codename());
        Ok(result)
    }
}
