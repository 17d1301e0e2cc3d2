use crate::modules::import_from_file::domain::{ImportDataStorage, StoredImportData};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_warn};

use std::path::{Path, PathBuf};

/// Stores the import form as a JSON document on disk
pub struct JsonFileImportDataStorage {
    path: PathBuf,
}

impl JsonFileImportDataStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImportDataStorage for JsonFileImportDataStorage {
    fn get_import_data(&self) -> Option<StoredImportData> {
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log_debug!("No stored import data at {}", self.path.display());
                return None;
            }
            Err(e) => {
                log_warn!("Failed to read import data {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(data) => Some(data),
            Err(e) => {
                log_warn!("Ignoring corrupt import data {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set_import_data(&self, data: &StoredImportData) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_vec_pretty(data).map_err(|e| {
            AppError::SerializationError(format!("Failed to serialize import data: {}", e))
        })?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
