//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Matcher construction error from core
    MatchError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MatchError(msg) => write!(f, "Match error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<markwords_core::SliceError> for CliError {
    fn from(err: markwords_core::SliceError) -> Self {
        CliError::MatchError(err.to_string())
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("test.txt".to_string());
        assert_eq!(error.to_string(), "File not found: test.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown boundary".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown boundary");
    }

    #[test]
    fn test_match_error_from_core() {
        let core = markwords_core::SliceError::InvalidMatcher {
            word: "oops".to_string(),
            source: "factory failed".into(),
        };
        let error = CliError::from(core);

        assert_eq!(
            error.to_string(),
            "Match error: invalid matcher for word 'oops': factory failed"
        );
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("test".to_string());
        assert_eq!(success.as_ref().unwrap(), "test");

        let failure: CliResult<String> = Err(CliError::ConfigError("bad".to_string()).into());
        assert!(failure
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("Configuration error: bad"));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("ファイル/test 文件.txt".to_string());
        assert_eq!(error.to_string(), "File not found: ファイル/test 文件.txt");
    }
}
