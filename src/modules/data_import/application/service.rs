use crate::modules::management::domain::BinarySource;
use crate::modules::management::HttpBinarySource;
use crate::shared::config::AppEnvironment;
use crate::shared::errors::AppResult;

use std::sync::Arc;
use std::time::Duration;

use super::super::domain::services::import_components::{
    ImportConfig, ImportContentItemsResult, ImportCoordinator, ImportData, ImportStatistics,
};

/// Content items import service - clean interface that delegates to focused components
///
/// Creates content items, their assets and language variants in the target
/// project carried by [`ImportData`], reporting each step through the
/// [`ImportConfig`] callback.
#[derive(Clone)]
pub struct ContentItemsImportService {
    binary_source: Arc<dyn BinarySource>,
    request_delay: Duration,
}

/// Import outcome together with the progress counts of the run
#[derive(Debug, Clone)]
pub struct ImportRun {
    pub result: ImportContentItemsResult,
    pub statistics: ImportStatistics,
}

impl ContentItemsImportService {
    pub fn new(binary_source: Arc<dyn BinarySource>, request_delay: Duration) -> Self {
        Self {
            binary_source,
            request_delay,
        }
    }

    /// Service downloading assets over HTTP, paced by the environment's request delay
    pub fn from_environment(environment: &AppEnvironment) -> AppResult<Self> {
        let binary_source = Arc::new(HttpBinarySource::from_environment(environment)?);
        Ok(Self::new(binary_source, environment.request_delay))
    }

    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }

    pub async fn import_content_items(
        &self,
        data: &ImportData,
        config: &ImportConfig,
    ) -> AppResult<ImportContentItemsResult> {
        self.import_with_statistics(data, config)
            .await
            .map(|run| run.result)
    }

    pub async fn import_with_statistics(
        &self,
        data: &ImportData,
        config: &ImportConfig,
    ) -> AppResult<ImportRun> {
        let coordinator =
            ImportCoordinator::new(Arc::clone(&self.binary_source), self.request_delay, config);

        let result = coordinator.import_content_items(data).await?;
        Ok(ImportRun {
            result,
            statistics: coordinator.progress_tracker().statistics(),
        })
    }
}
