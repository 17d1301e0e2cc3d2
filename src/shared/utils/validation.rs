use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// Required form fields must carry a non-blank value
    pub fn validate_required(field: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!("{} is required", field)));
        }
        Ok(())
    }

    /// A language variant can only be addressed through a non-empty language codename
    pub fn validate_language_codename(item_codename: &str, language: &str) -> Result<(), AppError> {
        if language.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Invalid language for item '{}': '{}'",
                item_codename, language
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        assert!(Validator::validate_required("projectId", "").is_err());
        assert!(Validator::validate_required("projectId", "   ").is_err());
        assert!(Validator::validate_required("projectId", "abc").is_ok());
    }

    #[test]
    fn test_language_codename() {
        let err = Validator::validate_language_codename("home", "").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(msg) if msg.contains("'home'")));
        assert!(Validator::validate_language_codename("home", "en").is_ok());
    }

    #[test]
    fn test_language_codename_only_rejects_empty() {
        assert!(Validator::validate_language_codename("home", " ").is_ok());
    }
}
