use thiserror::Error;

/// Shown whenever the service gives us nothing better to say.
pub const UNKNOWN_ERROR_MESSAGE: &str = "알 수 없는 에러가 발생했습니다.";
pub const TIMEOUT_MESSAGE: &str = "요청 시간이 초과되었습니다. 다시 시도해주세요.";
pub const NETWORK_UNREACHABLE_MESSAGE: &str =
    "API 서버에 연결할 수 없습니다. 서버가 실행 중인지 확인해주세요.";
pub const UNHEALTHY_MESSAGE: &str = "API 서버 상태가 정상이 아닙니다. 잠시 후 다시 시도해주세요.";

#[derive(Error, Debug)]
pub enum EbitdaError {
    #[error("Request timed out")]
    Timeout,

    #[error("Could not connect to the EBITDA service")]
    NetworkUnreachable,

    #[error("EBITDA service did not report a healthy status")]
    Unhealthy,

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Unknown error: {message}")]
    Unknown { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Service,
    Configuration,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EbitdaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EbitdaError::Timeout | EbitdaError::NetworkUnreachable => ErrorCategory::Transport,
            EbitdaError::Unhealthy | EbitdaError::Server { .. } | EbitdaError::Unknown { .. } => {
                ErrorCategory::Service
            }
            EbitdaError::ConfigError { .. }
            | EbitdaError::InvalidConfigValueError { .. }
            | EbitdaError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EbitdaError::ValidationError { .. } => ErrorCategory::Input,
            EbitdaError::IoError(_)
            | EbitdaError::SerializationError(_)
            | EbitdaError::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // retrying usually helps
            EbitdaError::Timeout | EbitdaError::NetworkUnreachable | EbitdaError::Unhealthy => {
                ErrorSeverity::Medium
            }
            EbitdaError::Server { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            EbitdaError::Server { .. }
            | EbitdaError::Unknown { .. }
            | EbitdaError::ValidationError { .. } => ErrorSeverity::High,
            _ => ErrorSeverity::Critical,
        }
    }

    /// The descriptive string a single failed lookup is reported with.
    pub fn user_friendly_message(&self) -> String {
        match self {
            EbitdaError::Timeout => TIMEOUT_MESSAGE.to_string(),
            EbitdaError::NetworkUnreachable => NETWORK_UNREACHABLE_MESSAGE.to_string(),
            EbitdaError::Unhealthy => UNHEALTHY_MESSAGE.to_string(),
            EbitdaError::Server { message, .. } => message.clone(),
            EbitdaError::Unknown { .. } => UNKNOWN_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Transport => "Check that the EBITDA service is running and retry",
            ErrorCategory::Service => "Check the company name, year and report type, then retry",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::Input => "Correct the query and search again",
            ErrorCategory::Output => "Check the output path and permissions",
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.severity() == ErrorSeverity::Medium
    }
}

pub type Result<T> = std::result::Result<T, EbitdaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_have_fixed_messages() {
        assert_eq!(EbitdaError::Timeout.user_friendly_message(), TIMEOUT_MESSAGE);
        assert_eq!(
            EbitdaError::NetworkUnreachable.user_friendly_message(),
            NETWORK_UNREACHABLE_MESSAGE
        );
        assert!(EbitdaError::Timeout.is_retryable());
    }

    #[test]
    fn test_unhealthy_is_not_reported_as_unreachable() {
        let err = EbitdaError::Unhealthy;
        assert_eq!(err.user_friendly_message(), UNHEALTHY_MESSAGE);
        assert_ne!(err.user_friendly_message(), NETWORK_UNREACHABLE_MESSAGE);
        assert_eq!(err.category(), ErrorCategory::Service);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_server_error_uses_payload_message() {
        let err = EbitdaError::Server {
            status: 404,
            message: "회사를 찾을 수 없습니다".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "회사를 찾을 수 없습니다");
        assert_eq!(err.category(), ErrorCategory::Service);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_unknown_error_hides_detail() {
        let err = EbitdaError::Unknown {
            message: "expected value at line 1".to_string(),
        };
        assert_eq!(err.user_friendly_message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = EbitdaError::MissingConfigError {
            field: "api.base_url".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
