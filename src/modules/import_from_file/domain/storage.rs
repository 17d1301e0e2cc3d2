use crate::shared::errors::AppResult;

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// Form values remembered between sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredImportData {
    pub target_project_id: String,
    pub target_project_api_key: String,
    pub publish_content_items: bool,
}

/// Persistence port for the import form
#[cfg_attr(test, automock)]
pub trait ImportDataStorage: Send + Sync {
    /// `None` when nothing usable has been stored yet
    fn get_import_data(&self) -> Option<StoredImportData>;

    fn set_import_data(&self, data: &StoredImportData) -> AppResult<()>;
}
