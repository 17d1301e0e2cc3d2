pub mod form;
pub mod storage;

pub use form::{DroppedEntry, ImportForm, SelectedFile};
pub use storage::{ImportDataStorage, StoredImportData};

#[cfg(test)]
pub use storage::MockImportDataStorage;
