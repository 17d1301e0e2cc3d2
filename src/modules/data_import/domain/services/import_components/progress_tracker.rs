use crate::modules::content::ContentItem;
use crate::shared::utils::LogContext;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::types::{
    ImportAction, ImportConfig, ImportProgressEvent, ImportStatistics, ImportStatus,
    ProcessItemCallback,
};

/// Atomic counters for progress tracking without lock contention
#[derive(Default)]
struct ProgressCounts {
    per_action: [AtomicUsize; ImportAction::COUNT],
}

/// Forwards progress events to the caller's callback and keeps per-action counts
#[derive(Clone)]
pub struct ProgressTracker {
    process_item: ProcessItemCallback,
    counts: Arc<ProgressCounts>,
}

impl ProgressTracker {
    pub fn new(config: &ImportConfig) -> Self {
        Self {
            process_item: Arc::clone(&config.process_item),
            counts: Arc::new(ProgressCounts::default()),
        }
    }

    /// Report a completed sub-step of `item`
    pub fn report(&self, item: &ContentItem, action: ImportAction, name: String) {
        LogContext::import_step(action.as_str(), item.codename(), &name);
        self.counts.per_action[action.index()].fetch_add(1, Ordering::Relaxed);

        (self.process_item)(ImportProgressEvent {
            item: item.clone(),
            status: ImportStatus::Imported,
            action,
            name,
        });
    }

    pub fn count(&self, action: ImportAction) -> usize {
        self.counts.per_action[action.index()].load(Ordering::Relaxed)
    }

    pub fn statistics(&self) -> ImportStatistics {
        ImportStatistics {
            content_items: self.count(ImportAction::AddContentItem),
            binary_files: self.count(ImportAction::UploadBinaryFile),
            assets: self.count(ImportAction::AddAsset),
            language_variants: self.count(ImportAction::AddLanguageVariant),
            published_variants: self.count(ImportAction::PublishLanguageVariant),
        }
    }
}
