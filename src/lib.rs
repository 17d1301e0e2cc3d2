pub mod modules;
pub mod shared;

pub use modules::content::{AssetFromFile, ContentItem, ElementField, EmbeddedAsset};
pub use modules::data_import::{
    ContentItemsImportService, ExportPackageReader, ImportAction, ImportConfig,
    ImportContentItemsResult, ImportData, ImportProgressEvent, ImportStatus,
};
pub use modules::import_from_file::{ImportFromFilePage, JsonFileImportDataStorage};
pub use modules::management::{ContentManagementClient, KontentManagementClient};
pub use shared::{AppEnvironment, AppError, AppResult};
