use crate::modules::content::{AssetFromFile, ContentItem};
use crate::modules::management::domain::{
    ContentManagementClient, CreatedAsset, CreatedContentItem, LanguageVariant,
};
use crate::shared::errors::{AppError, AppResult};
use std::fmt;
use std::sync::Arc;

/// Everything an import run needs: where to write and what to write
#[derive(Clone)]
pub struct ImportData {
    pub target_client: Arc<dyn ContentManagementClient>,
    pub content_items: Vec<ContentItem>,
    pub assets_from_file: Vec<AssetFromFile>,
}

impl ImportData {
    pub fn new(
        target_client: Arc<dyn ContentManagementClient>,
        content_items: Vec<ContentItem>,
        assets_from_file: Vec<AssetFromFile>,
    ) -> Self {
        Self {
            target_client,
            content_items,
            assets_from_file,
        }
    }
}

impl fmt::Debug for ImportData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportData")
            .field("content_items", &self.content_items.len())
            .field("assets_from_file", &self.assets_from_file.len())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportAction {
    AddContentItem,
    UploadBinaryFile,
    AddAsset,
    AddLanguageVariant,
    PublishLanguageVariant,
}

impl ImportAction {
    pub const COUNT: usize = 5;

    pub const ALL: [ImportAction; Self::COUNT] = [
        ImportAction::AddContentItem,
        ImportAction::UploadBinaryFile,
        ImportAction::AddAsset,
        ImportAction::AddLanguageVariant,
        ImportAction::PublishLanguageVariant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImportAction::AddContentItem => "Add content item",
            ImportAction::UploadBinaryFile => "Upload binary file",
            ImportAction::AddAsset => "Add asset",
            ImportAction::AddLanguageVariant => "Add language variant",
            ImportAction::PublishLanguageVariant => "Publish language variant",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            ImportAction::AddContentItem => 0,
            ImportAction::UploadBinaryFile => 1,
            ImportAction::AddAsset => 2,
            ImportAction::AddLanguageVariant => 3,
            ImportAction::PublishLanguageVariant => 4,
        }
    }
}

impl fmt::Display for ImportAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStatus {
    Imported,
}

impl fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportStatus::Imported => f.write_str("imported"),
        }
    }
}

/// One completed sub-step of an item's import
#[derive(Debug, Clone, PartialEq)]
pub struct ImportProgressEvent {
    pub item: ContentItem,
    pub status: ImportStatus,
    pub action: ImportAction,
    pub name: String,
}

pub type ProcessItemCallback = Arc<dyn Fn(ImportProgressEvent) + Send + Sync>;

/// Caller-side settings of an import run
#[derive(Clone)]
pub struct ImportConfig {
    pub process_item: ProcessItemCallback,
    pub publish_language_variants: bool,
}

impl ImportConfig {
    pub fn new<F>(process_item: F) -> Self
    where
        F: Fn(ImportProgressEvent) + Send + Sync + 'static,
    {
        Self {
            process_item: Arc::new(process_item),
            publish_language_variants: false,
        }
    }

    /// Config that discards progress events
    pub fn silent() -> Self {
        Self::new(|_| {})
    }

    pub fn with_publishing(mut self, publish: bool) -> Self {
        self.publish_language_variants = publish;
        self
    }
}

impl fmt::Debug for ImportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportConfig")
            .field("publish_language_variants", &self.publish_language_variants)
            .finish_non_exhaustive()
    }
}

/// Everything created for one content item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemImportResult {
    pub content_item: CreatedContentItem,
    pub language_variant: LanguageVariant,
    pub assets: Vec<CreatedAsset>,
}

/// Per-item result under construction; completes only with all parts present
#[derive(Debug, Default)]
pub struct PendingItemImport {
    pub content_item: Option<CreatedContentItem>,
    pub language_variant: Option<LanguageVariant>,
    pub assets: Option<Vec<CreatedAsset>>,
}

impl PendingItemImport {
    pub fn finish(self) -> AppResult<ItemImportResult> {
        let assets = self
            .assets
            .ok_or_else(|| AppError::MissingField("assets".to_string()))?;
        let content_item = self
            .content_item
            .ok_or_else(|| AppError::MissingField("content item".to_string()))?;
        let language_variant = self
            .language_variant
            .ok_or_else(|| AppError::MissingField("language variant".to_string()))?;

        Ok(ItemImportResult {
            content_item,
            language_variant,
            assets,
        })
    }
}

/// Aggregate of an import run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportContentItemsResult {
    pub content_items: Vec<CreatedContentItem>,
    pub language_variants: Vec<LanguageVariant>,
    pub assets: Vec<CreatedAsset>,
}

impl FromIterator<ItemImportResult> for ImportContentItemsResult {
    fn from_iter<I: IntoIterator<Item = ItemImportResult>>(iter: I) -> Self {
        let mut result = Self::default();
        for item in iter {
            result.content_items.push(item.content_item);
            result.language_variants.push(item.language_variant);
            result.assets.extend(item.assets);
        }
        result
    }
}

/// Counts of reported progress events per action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStatistics {
    pub content_items: usize,
    pub binary_files: usize,
    pub assets: usize,
    pub language_variants: usize,
    pub published_variants: usize,
}
