use crate::modules::management::domain::{
    AddAssetData, AddContentItemData, ContentManagementClient, CreatedAsset, CreatedContentItem,
    ElementValue, FileReference, LanguageVariant, LanguageVariantElement, Reference,
    UploadBinaryFileData,
};
use crate::shared::config::AppEnvironment;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

use super::http_handler::CommonHttpHandler;

const SERVICE_NAME: &str = "Content Management API";
const USER_AGENT: &str = "template-manager/0.1";

/// Content Management API client bound to one target project
pub struct KontentManagementClient {
    client: Client,
    base_url: String,
    project_id: String,
    api_key: String,
}

#[derive(Serialize)]
struct UpsertLanguageVariantBody<'a> {
    elements: Vec<VariantElementBody<'a>>,
}

#[derive(Serialize)]
struct VariantElementBody<'a> {
    element: Reference,
    value: &'a ElementValue,
}

impl KontentManagementClient {
    pub fn new(
        base_url: &str,
        project_id: impl Into<String>,
        api_key: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Client for `project_id` using the environment's API URL and timeout
    pub fn from_environment(
        environment: &AppEnvironment,
        project_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> AppResult<Self> {
        let project_id = project_id.into();
        let api_key = api_key.into();
        if project_id.trim().is_empty() || api_key.trim().is_empty() {
            return Err(AppError::ConfigError(
                "Target project id and API key are required".to_string(),
            ));
        }

        let client = CommonHttpHandler::create_http_client(environment.http_timeout, USER_AGENT)?;
        Ok(Self::new(
            &environment.management_api_url,
            project_id,
            api_key,
            client,
        ))
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn project_url(&self, path: &str) -> String {
        format!("{}/projects/{}/{}", self.base_url, self.project_id, path)
    }

    fn variant_path(item_codename: &str, language_codename: &str) -> String {
        format!(
            "items/codename/{}/variants/codename/{}",
            urlencoding::encode(item_codename),
            urlencoding::encode(language_codename)
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    async fn send(&self, method: &str, url: &str, request: RequestBuilder) -> AppResult<Response> {
        LogContext::api_call(url, method, "pending", None);
        let start = Instant::now();

        let response = request.send().await?;
        let status = response.status();
        LogContext::api_call(
            url,
            method,
            status.as_str(),
            Some(start.elapsed().as_millis() as u64),
        );

        CommonHttpHandler::ensure_success(response, SERVICE_NAME).await
    }

    async fn parse<T>(response: Response, what: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        response.json::<T>().await.map_err(|e| {
            AppError::SerializationError(format!("Failed to parse {} response: {}", what, e))
        })
    }

    fn upsert_body(elements: &[LanguageVariantElement]) -> UpsertLanguageVariantBody<'_> {
        UpsertLanguageVariantBody {
            elements: elements
                .iter()
                .map(|element| VariantElementBody {
                    element: Reference::by_codename(element.codename.clone()),
                    value: &element.value,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl ContentManagementClient for KontentManagementClient {
    async fn create_content_item(
        &self,
        data: AddContentItemData,
    ) -> AppResult<CreatedContentItem> {
        let url = self.project_url("items");
        let response = self
            .send("POST", &url, self.request(Method::POST, &url).json(&data))
            .await?;
        Self::parse(response, "content item").await
    }

    async fn upload_binary_file(&self, data: UploadBinaryFileData) -> AppResult<FileReference> {
        let url = self.project_url(&format!("files/{}", urlencoding::encode(&data.filename)));
        debug!(
            filename = %data.filename,
            content_length = data.content_length,
            "uploading binary file"
        );

        let request = self
            .request(Method::POST, &url)
            .header(CONTENT_TYPE, data.content_type)
            .header(CONTENT_LENGTH, data.content_length)
            .body(data.binary_data);
        let response = self.send("POST", &url, request).await?;
        Self::parse(response, "file reference").await
    }

    async fn create_asset(&self, data: AddAssetData) -> AppResult<CreatedAsset> {
        let url = self.project_url("assets");
        let response = self
            .send("POST", &url, self.request(Method::POST, &url).json(&data))
            .await?;
        Self::parse(response, "asset").await
    }

    async fn upsert_language_variant(
        &self,
        item_codename: &str,
        language_codename: &str,
        elements: Vec<LanguageVariantElement>,
    ) -> AppResult<LanguageVariant> {
        let url = self.project_url(&Self::variant_path(item_codename, language_codename));
        let body = Self::upsert_body(&elements);
        let response = self
            .send("PUT", &url, self.request(Method::PUT, &url).json(&body))
            .await?;
        Self::parse(response, "language variant").await
    }

    async fn publish_language_variant(
        &self,
        item_codename: &str,
        language_codename: &str,
    ) -> AppResult<()> {
        let url = self.project_url(&format!(
            "{}/publish",
            Self::variant_path(item_codename, language_codename)
        ));
        self.send("PUT", &url, self.request(Method::PUT, &url))
            .await?;
        Ok(())
    }
}
