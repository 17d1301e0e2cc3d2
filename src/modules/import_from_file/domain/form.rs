use crate::modules::import_from_file::domain::storage::StoredImportData;
use crate::shared::config::AppEnvironment;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

use std::path::PathBuf;

pub const PROJECT_ID_FIELD: &str = "projectId";
pub const CM_API_KEY_FIELD: &str = "cmApiKey";

/// Target project credentials collected on the import page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportForm {
    pub project_id: String,
    pub cm_api_key: String,
    pub publish_all_items: bool,
}

impl ImportForm {
    /// Defaults from the environment, overridden by a stored record when present
    pub fn initial(environment: &AppEnvironment, stored: Option<StoredImportData>) -> Self {
        match stored {
            Some(stored) => Self {
                project_id: stored.target_project_id,
                cm_api_key: stored.target_project_api_key,
                publish_all_items: stored.publish_content_items,
            },
            None => Self {
                project_id: environment.default_projects.target_project_id.clone(),
                cm_api_key: environment.default_projects.target_project_api_key.clone(),
                publish_all_items: true,
            },
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_required(PROJECT_ID_FIELD, &self.project_id)?;
        Validator::validate_required(CM_API_KEY_FIELD, &self.cm_api_key)?;
        Ok(())
    }

    pub fn to_stored(&self) -> StoredImportData {
        StoredImportData {
            target_project_id: self.project_id.clone(),
            target_project_api_key: self.cm_api_key.clone(),
            publish_content_items: self.publish_all_items,
        }
    }
}

/// A file picked by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }
}

/// Entry dropped onto the page; directories carry no file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedEntry {
    pub relative_path: String,
    pub file: Option<SelectedFile>,
}

impl DroppedEntry {
    pub fn file(relative_path: impl Into<String>, file: SelectedFile) -> Self {
        Self {
            relative_path: relative_path.into(),
            file: Some(file),
        }
    }

    pub fn directory(relative_path: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            file: None,
        }
    }
}
