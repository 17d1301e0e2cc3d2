use crate::modules::management::domain::BinarySource;
use crate::shared::errors::AppResult;
use crate::shared::utils::{LogContext, TimedOperation};
use crate::{log_info, log_warn};

use futures::future::try_join_all;
use std::sync::Arc;
use std::time::Duration;

use super::asset_importer::AssetImporter;
use super::import_executor::ImportExecutor;
use super::progress_tracker::ProgressTracker;
use super::types::{ImportAction, ImportConfig, ImportContentItemsResult, ImportData};

/// Orchestrates the import workflow using focused components
#[derive(Clone)]
pub struct ImportCoordinator {
    import_executor: ImportExecutor,
    progress_tracker: ProgressTracker,
}

impl ImportCoordinator {
    pub fn new(
        binary_source: Arc<dyn BinarySource>,
        request_delay: Duration,
        config: &ImportConfig,
    ) -> Self {
        let import_executor = ImportExecutor::new(
            AssetImporter::new(binary_source),
            request_delay,
            config.publish_language_variants,
        );
        let progress_tracker = ProgressTracker::new(config);

        Self {
            import_executor,
            progress_tracker,
        }
    }

    pub fn progress_tracker(&self) -> &ProgressTracker {
        &self.progress_tracker
    }

    /// Import every content item of `data`
    ///
    /// Item pipelines run concurrently and are joined; the first failing item
    /// fails the whole run and no partial result is returned.
    pub async fn import_content_items(
        &self,
        data: &ImportData,
    ) -> AppResult<ImportContentItemsResult> {
        let timer = TimedOperation::new("import_content_items");
        let total_count = data.content_items.len();

        log_info!(
            "Starting import of {} content items ({} packaged assets)",
            total_count,
            data.assets_from_file.len()
        );

        let client = data.target_client.as_ref();
        let pipelines = data.content_items.iter().map(|item| {
            self.import_executor.import_content_item(
                item,
                &data.assets_from_file,
                client,
                &self.progress_tracker,
            )
        });

        let results = match try_join_all(pipelines).await {
            Ok(results) => results,
            Err(e) => {
                LogContext::error_with_context(&e, "Import aborted");
                self.log_summary();
                return Err(e);
            }
        };

        let result: ImportContentItemsResult = results.into_iter().collect();
        self.log_summary();
        timer.finish_with_info(&format!(
            "{} items, {} variants, {} assets",
            result.content_items.len(),
            result.language_variants.len(),
            result.assets.len()
        ));

        Ok(result)
    }

    fn log_summary(&self) {
        for action in ImportAction::ALL {
            let count = self.progress_tracker.count(action);
            if count > 0 {
                log_info!("Import summary: {} x{}", action, count);
            }
        }
        if self.progress_tracker.count(ImportAction::AddContentItem) == 0 {
            log_warn!("Import summary: no content items were created");
        }
    }
}
