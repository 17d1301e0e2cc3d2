use crate::shared::errors::{AppError, AppResult};
use reqwest::{Response, StatusCode};
use std::time::Duration;

/// Longest response body excerpt carried in an error message
const MAX_ERROR_BODY_LEN: usize = 200;

/// Shared HTTP plumbing for management API and asset downloads
pub struct CommonHttpHandler;

impl CommonHttpHandler {
    /// Map a non-success status code to the matching error variant
    pub fn status_error(status: StatusCode, service_name: &str, body: &str) -> AppError {
        let detail = Self::truncate_body(body);
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                AppError::RateLimitError(format!("{} rate limit exceeded", service_name))
            }
            StatusCode::NOT_FOUND => {
                AppError::NotFound(format!("{} resource not found: {}", service_name, detail))
            }
            StatusCode::UNAUTHORIZED => AppError::Unauthorized(format!(
                "Unauthorized access to {}: {}",
                service_name, detail
            )),
            StatusCode::FORBIDDEN => AppError::Unauthorized(format!(
                "Access forbidden to {}: {}",
                service_name, detail
            )),
            s if s.is_server_error() => AppError::ExternalServiceError(format!(
                "{} service unavailable ({})",
                service_name, s
            )),
            _ => AppError::ApiError(format!(
                "Unexpected status code from {}: {} {}",
                service_name, status, detail
            )),
        }
    }

    /// Pass successful responses through, turn failures into errors with the body excerpt
    pub async fn ensure_success(response: Response, service_name: &str) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(Self::status_error(status, service_name, &body))
    }

    /// Create an HTTP client with consistent configuration
    pub fn create_http_client(timeout: Duration, user_agent: &str) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })
    }

    fn truncate_body(body: &str) -> String {
        if body.chars().count() > MAX_ERROR_BODY_LEN {
            let excerpt: String = body.chars().take(MAX_ERROR_BODY_LEN).collect();
            format!("{}...", excerpt)
        } else {
            body.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            CommonHttpHandler::status_error(StatusCode::TOO_MANY_REQUESTS, "CM API", ""),
            AppError::RateLimitError(_)
        ));
        assert!(matches!(
            CommonHttpHandler::status_error(StatusCode::UNAUTHORIZED, "CM API", ""),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            CommonHttpHandler::status_error(StatusCode::FORBIDDEN, "CM API", ""),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            CommonHttpHandler::status_error(StatusCode::NOT_FOUND, "CM API", ""),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            CommonHttpHandler::status_error(StatusCode::BAD_GATEWAY, "CM API", ""),
            AppError::ExternalServiceError(_)
        ));
    }

    #[test]
    fn test_bad_request_carries_body() {
        let err = CommonHttpHandler::status_error(
            StatusCode::BAD_REQUEST,
            "CM API",
            r#"{"message":"The provided type codename 'pge' does not exist."}"#,
        );
        assert!(matches!(err, AppError::ApiError(msg) if msg.contains("'pge'")));
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let body = "x".repeat(500);
        let err = CommonHttpHandler::status_error(StatusCode::CONFLICT, "CM API", &body);
        let message = err.to_string();
        assert!(message.ends_with("..."));
        assert!(message.len() < 300);
    }
}
