pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::{ContentItemsImportService, ImportRun};
pub use domain::{ElementMapper, ImportCoordinator, ImportExecutor, ProgressTracker};
pub use infrastructure::{ExportPackageReader, ImportPackage, PackageMetadata};

// Re-export common types for shorter imports
pub use domain::services::import_components::types::{
    ImportAction, ImportConfig, ImportContentItemsResult, ImportData, ImportProgressEvent,
    ImportStatistics, ImportStatus, ItemImportResult,
};
