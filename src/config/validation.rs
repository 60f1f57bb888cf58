use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API URL cannot be empty and must start with http:// or https://
/// - API key, if provided, cannot be blank
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
/// - HTTP timeout must be at least one second
pub fn validate_config(
    api_url: &str,
    api_key: Option<&str>,
    log_file_path: Option<&str>,
    http_timeout_seconds: u64,
) -> Result<(), AppError> {
    if api_url.is_empty() {
        return Err(AppError::config_error("API URL cannot be empty"));
    }

    if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
        return Err(AppError::config_error(
            "API URL must start with http:// or https://",
        ));
    }

    if let Some(key) = api_key
        && key.trim().is_empty()
    {
        return Err(AppError::config_error("API key cannot be blank"));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(validate_config("https://api.opendota.com", None, None, 30).is_ok());
        assert!(validate_config("http://localhost:5000", Some("key"), None, 1).is_ok());
    }

    #[test]
    fn test_rejects_bad_url() {
        assert!(matches!(
            validate_config("", None, None, 30),
            Err(AppError::Config(_))
        ));
        assert!(validate_config("api.opendota.com", None, None, 30).is_err());
    }

    #[test]
    fn test_rejects_blank_key() {
        assert!(validate_config("https://api.opendota.com", Some("  "), None, 30).is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        assert!(validate_config("https://api.opendota.com", None, None, 0).is_err());
    }

    #[test]
    fn test_log_path_parent_is_created() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("client.log");
        let log_path_str = log_path.to_string_lossy();

        validate_config("https://api.opendota.com", None, Some(&log_path_str), 30).unwrap();
        assert!(temp_dir.path().join("nested").exists());

        assert!(validate_config("https://api.opendota.com", None, Some(""), 30).is_err());
    }
}
