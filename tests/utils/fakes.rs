/// In-memory stand-ins for the Content Management API and asset downloads
///
/// The fake client records every call in order so tests can assert on the
/// sequencing of an item's pipeline.
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use template_manager::modules::management::domain::{
    AddAssetData, AddContentItemData, BinarySource, ContentManagementClient, CreatedAsset,
    CreatedContentItem, FileReference, IdReference, LanguageVariant, LanguageVariantElement,
    Reference, UploadBinaryFileData,
};
use template_manager::shared::errors::{AppError, AppResult};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientCall {
    CreateContentItem { name: String },
    UploadBinaryFile { filename: String, data: Vec<u8> },
    CreateAsset { external_id: Option<String> },
    UpsertLanguageVariant {
        item_codename: String,
        language: String,
        elements: Vec<LanguageVariantElement>,
    },
    PublishLanguageVariant { item_codename: String, language: String },
}

#[derive(Default)]
pub struct RecordingClient {
    calls: Mutex<Vec<ClientCall>>,
    asset_ids: Mutex<HashMap<String, Uuid>>,
    failing_item: Option<String>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client rejecting the creation of the item named `name`
    pub fn failing_on(name: &str) -> Self {
        Self {
            failing_item: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<ClientCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Id assigned to the asset created from `url`
    pub fn asset_id(&self, url: &str) -> Option<Uuid> {
        self.asset_ids.lock().unwrap().get(url).copied()
    }

    fn record(&self, call: ClientCall) {
        self.calls.lock().unwrap().push(call);
    }
}

/// Codename the fake server derives from an item name
pub fn codename_of(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

#[async_trait]
impl ContentManagementClient for RecordingClient {
    async fn create_content_item(
        &self,
        data: AddContentItemData,
    ) -> AppResult<CreatedContentItem> {
        tokio::task::yield_now().await;
        if self.failing_item.as_deref() == Some(data.name.as_str()) {
            return Err(AppError::ApiError(format!(
                "Content item '{}' rejected",
                data.name
            )));
        }
        self.record(ClientCall::CreateContentItem {
            name: data.name.clone(),
        });
        Ok(CreatedContentItem {
            id: Uuid::new_v4(),
            codename: codename_of(&data.name),
            name: data.name,
            content_type: IdReference { id: Uuid::new_v4() },
            sitemap_locations: Vec::new(),
            external_id: None,
            last_modified: None,
        })
    }

    async fn upload_binary_file(&self, data: UploadBinaryFileData) -> AppResult<FileReference> {
        tokio::task::yield_now().await;
        self.record(ClientCall::UploadBinaryFile {
            filename: data.filename,
            data: data.binary_data,
        });
        Ok(FileReference {
            id: Uuid::new_v4(),
            reference_type: "internal".to_string(),
        })
    }

    async fn create_asset(&self, data: AddAssetData) -> AppResult<CreatedAsset> {
        tokio::task::yield_now().await;
        self.record(ClientCall::CreateAsset {
            external_id: data.external_id.clone(),
        });
        let id = Uuid::new_v4();
        if let Some(url) = &data.external_id {
            self.asset_ids.lock().unwrap().insert(url.clone(), id);
        }
        Ok(CreatedAsset {
            id,
            file_name: data.title.clone().unwrap_or_default(),
            title: data.title,
            size: 3,
            mime_type: "image/png".to_string(),
            file_reference: data.file_reference,
            descriptions: data.descriptions,
            external_id: data.external_id,
            last_modified: None,
        })
    }

    async fn upsert_language_variant(
        &self,
        item_codename: &str,
        language_codename: &str,
        elements: Vec<LanguageVariantElement>,
    ) -> AppResult<LanguageVariant> {
        tokio::task::yield_now().await;
        self.record(ClientCall::UpsertLanguageVariant {
            item_codename: item_codename.to_string(),
            language: language_codename.to_string(),
            elements,
        });
        Ok(LanguageVariant {
            item: IdReference { id: Uuid::new_v4() },
            language: IdReference { id: Uuid::nil() },
            last_modified: None,
            elements: Vec::new(),
        })
    }

    async fn publish_language_variant(
        &self,
        item_codename: &str,
        language_codename: &str,
    ) -> AppResult<()> {
        self.record(ClientCall::PublishLanguageVariant {
            item_codename: item_codename.to_string(),
            language: language_codename.to_string(),
        });
        Ok(())
    }
}

/// Serves asset binaries from memory, keyed by URL
#[derive(Default)]
pub struct InMemoryBinarySource {
    binaries: HashMap<String, Vec<u8>>,
    fetched: Mutex<Vec<String>>,
}

impl InMemoryBinarySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, data: &[u8]) -> Self {
        self.binaries.insert(url.to_string(), data.to_vec());
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl BinarySource for InMemoryBinarySource {
    async fn fetch(&self, url: &str) -> AppResult<Vec<u8>> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.binaries
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("No binary at {}", url)))
    }
}

pub fn is_reference_by_id(reference: &Reference, id: Uuid) -> bool {
    matches!(reference, Reference::Id { id: found } if *found == id)
}
