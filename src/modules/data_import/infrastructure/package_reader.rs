use crate::modules::content::{AssetFromFile, ContentItem, EmbeddedAsset};
use crate::modules::data_import::domain::services::import_components::ImportData;
use crate::modules::management::domain::ContentManagementClient;
use crate::shared::config::ExportFilenames;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Metadata written alongside an export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Parsed contents of an export package
#[derive(Debug, Clone, PartialEq)]
pub struct ImportPackage {
    pub metadata: Option<PackageMetadata>,
    pub content_items: Vec<ContentItem>,
    pub assets_from_file: Vec<AssetFromFile>,
}

impl ImportPackage {
    pub fn into_import_data(self, target_client: Arc<dyn ContentManagementClient>) -> ImportData {
        ImportData::new(target_client, self.content_items, self.assets_from_file)
    }
}

/// Reads an unpacked export package from disk
pub struct ExportPackageReader {
    filenames: ExportFilenames,
}

impl ExportPackageReader {
    pub fn new(filenames: ExportFilenames) -> Self {
        Self { filenames }
    }

    pub async fn read_dir(&self, root: &Path) -> AppResult<ImportPackage> {
        let content_items: Vec<ContentItem> = read_json(&root.join(&self.filenames.content_items))
            .await
            .map_err(|e| with_context(e, &self.filenames.content_items))?;

        let metadata_path = root.join(&self.filenames.metadata);
        let metadata = if tokio::fs::try_exists(&metadata_path).await? {
            Some(read_json::<PackageMetadata>(&metadata_path).await?)
        } else {
            None
        };

        let assets_from_file = self.read_assets(root).await?;

        log_info!(
            "Read export package {}: {} content items, {} packaged assets",
            root.display(),
            content_items.len(),
            assets_from_file.len()
        );

        Ok(ImportPackage {
            metadata,
            content_items,
            assets_from_file,
        })
    }

    async fn read_assets(&self, root: &Path) -> AppResult<Vec<AssetFromFile>> {
        let descriptors_path = root.join(&self.filenames.assets);
        if !tokio::fs::try_exists(&descriptors_path).await? {
            log_debug!("No {} in package, assets will be downloaded", self.filenames.assets);
            return Ok(Vec::new());
        }

        let descriptors: Vec<EmbeddedAsset> = read_json(&descriptors_path).await?;
        let folder = root.join(&self.filenames.assets_folder);

        let mut assets = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let path = self.binary_path(&folder, &descriptor)?;
            let data = match tokio::fs::read(&path).await {
                Ok(data) => data,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    return Err(AppError::NotFound(format!(
                        "Binary '{}' of asset '{}' is missing from the package",
                        descriptor.filename, descriptor.asset.url
                    )))
                }
                Err(e) => return Err(e.into()),
            };
            assets.push(AssetFromFile::new(descriptor, data));
        }

        Ok(assets)
    }

    /// Descriptor file names must stay inside the assets folder
    fn binary_path(&self, folder: &Path, descriptor: &EmbeddedAsset) -> AppResult<PathBuf> {
        let relative = Path::new(&descriptor.filename);
        let escapes = relative.components().any(|component| {
            !matches!(component, std::path::Component::Normal(_))
        });
        if descriptor.filename.is_empty() || escapes {
            return Err(AppError::InvalidInput(format!(
                "Invalid asset file name '{}'",
                descriptor.filename
            )));
        }
        Ok(folder.join(relative))
    }
}

async fn read_json<T>(path: &Path) -> AppResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let raw = tokio::fs::read(path).await?;
    serde_json::from_slice(&raw).map_err(|e| {
        AppError::SerializationError(format!("Failed to parse {}: {}", path.display(), e))
    })
}

fn with_context(error: AppError, filename: &str) -> AppError {
    match error {
        AppError::IoError(msg) => AppError::IoError(format!("{}: {}", filename, msg)),
        other => other,
    }
}
