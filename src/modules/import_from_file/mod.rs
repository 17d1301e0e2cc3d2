pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::ImportFromFilePage;
pub use domain::{DroppedEntry, ImportDataStorage, ImportForm, SelectedFile, StoredImportData};
pub use infrastructure::JsonFileImportDataStorage;
