use crate::log_debug;
use crate::shared::errors::{AppError, AppResult};
use std::time::Duration;

const ENV_PREFIX: &str = "TEMPLATE_MANAGER_";

/// Project credentials used to pre-populate the import form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultProjects {
    pub languages: String,
    pub source_project_api_key: String,
    pub source_project_id: String,
    pub target_project_id: String,
    pub target_project_api_key: String,
}

/// File names inside an export package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFilenames {
    pub package_prefix: String,
    pub assets: String,
    pub language_variants: String,
    pub content_items: String,
    pub content_types: String,
    pub taxonomies: String,
    pub assets_folder: String,
    pub metadata: String,
}

impl Default for ExportFilenames {
    fn default() -> Self {
        Self {
            package_prefix: "export_".to_string(),
            assets: "assets.json".to_string(),
            language_variants: "language-variants.json".to_string(),
            content_items: "content-items.json".to_string(),
            content_types: "content-types.json".to_string(),
            taxonomies: "taxonomies.json".to_string(),
            assets_folder: "assets".to_string(),
            metadata: "metadata.json".to_string(),
        }
    }
}

/// Application environment
///
/// Defaults match the production build. `from_env` overrides individual
/// values from `TEMPLATE_MANAGER_*` variables (a `.env` file is honoured).
#[derive(Debug, Clone, PartialEq)]
pub struct AppEnvironment {
    pub production: bool,
    pub app_name: String,
    pub default_projects: DefaultProjects,
    /// Courtesy pause after each content item is created
    pub request_delay: Duration,
    pub management_api_url: String,
    pub http_timeout: Duration,
    pub export_filenames: ExportFilenames,
}

impl Default for AppEnvironment {
    fn default() -> Self {
        Self {
            production: true,
            app_name: "Template manager".to_string(),
            default_projects: DefaultProjects::default(),
            request_delay: Duration::from_millis(80),
            management_api_url: "https://manage.kontent.ai/v2".to_string(),
            http_timeout: Duration::from_secs(30),
            export_filenames: ExportFilenames::default(),
        }
    }
}

impl AppEnvironment {
    /// Load `.env` (if present) and read overrides from the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build an environment from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));
        let mut env = Self::default();

        if let Some(value) = var("PRODUCTION") {
            env.production = parse_bool("PRODUCTION", &value)?;
        }
        if let Some(value) = var("APP_NAME") {
            env.app_name = value;
        }
        if let Some(value) = var("LANGUAGES") {
            env.default_projects.languages = value;
        }
        if let Some(value) = var("SOURCE_PROJECT_ID") {
            env.default_projects.source_project_id = value;
        }
        if let Some(value) = var("SOURCE_PROJECT_API_KEY") {
            env.default_projects.source_project_api_key = value;
        }
        if let Some(value) = var("TARGET_PROJECT_ID") {
            env.default_projects.target_project_id = value;
        }
        if let Some(value) = var("TARGET_PROJECT_API_KEY") {
            env.default_projects.target_project_api_key = value;
        }
        if let Some(value) = var("REQUEST_DELAY_MS") {
            env.request_delay = Duration::from_millis(parse_u64("REQUEST_DELAY_MS", &value)?);
        }
        if let Some(value) = var("MANAGEMENT_API_URL") {
            env.management_api_url = value.trim_end_matches('/').to_string();
        }
        if let Some(value) = var("HTTP_TIMEOUT_SECS") {
            env.http_timeout = Duration::from_secs(parse_u64("HTTP_TIMEOUT_SECS", &value)?);
        }

        log_debug!(
            "Environment loaded: production={}, request delay {:?}, management API {}",
            env.production,
            env.request_delay,
            env.management_api_url
        );

        Ok(env)
    }
}

fn parse_u64(name: &str, value: &str) -> AppResult<u64> {
    value.trim().parse::<u64>().map_err(|e| {
        AppError::ConfigError(format!("{}{} must be a number: {}", ENV_PREFIX, name, e))
    })
}

fn parse_bool(name: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(AppError::ConfigError(format!(
            "{}{} must be a boolean, got '{}'",
            ENV_PREFIX, name, other
        ))),
    }
}
