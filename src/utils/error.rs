use thiserror::Error;

#[derive(Error, Debug)]
pub enum FpMateError {
    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Malformed printer response: {message}")]
    MalformedResponse { message: String },

    #[error("XML rendering error: {message}")]
    XmlError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Protocol,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status used by the `fpmate` binary.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Critical => 3,
        }
    }
}

impl FpMateError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TransportError(_) => ErrorCategory::Transport,
            Self::MalformedResponse { .. } | Self::XmlError { .. } => ErrorCategory::Protocol,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // the caller may simply resend once the printer is reachable
            ErrorCategory::Transport => ErrorSeverity::Medium,
            ErrorCategory::Protocol | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::TransportError(e) if e.is_timeout() => {
                "The printer did not answer in time; check the paper and cover, or raise the timeout"
            }
            Self::TransportError(_) => {
                "Check that the printer is powered on and that host/port are reachable"
            }
            Self::MalformedResponse { .. } => {
                "The endpoint did not answer with an FpMate envelope; verify the host points at the fiscal printer"
            }
            Self::XmlError { .. } => "Check the document for characters that cannot be encoded",
            Self::IoError(_) => "Check file paths and permissions",
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Fix the job file or command-line options and retry",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::TransportError(e) if e.is_timeout() => "Printer request timed out".to_string(),
            Self::TransportError(e) => match e.status() {
                Some(status) => format!("Printer endpoint answered with HTTP {}", status),
                None => "Could not reach the printer".to_string(),
            },
            Self::MalformedResponse { .. } => "Printer returned an unreadable response".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FpMateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_response_is_protocol_error() {
        let err = FpMateError::malformed("missing s:Body");
        assert_eq!(err.category(), ErrorCategory::Protocol);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("missing s:Body"));
    }

    #[test]
    fn test_config_errors_share_category() {
        let missing = FpMateError::MissingConfigError {
            field: "printer.host".to_string(),
        };
        let invalid = FpMateError::InvalidConfigValueError {
            field: "printer.timeout".to_string(),
            value: "0".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert_eq!(
            invalid.user_friendly_message(),
            "Invalid value for 'printer.timeout': '0' (must be positive)"
        );
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = [
            FpMateError::malformed("missing s:Body"),
            FpMateError::XmlError {
                message: "bad".to_string(),
            },
            FpMateError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "job")),
            FpMateError::ConfigError {
                message: "bad toml".to_string(),
            },
        ];

        for err in errors {
            assert_ne!(err.severity().exit_code(), 0, "{}", err);
        }
        assert_eq!(ErrorSeverity::High.exit_code(), 1);
        assert_eq!(ErrorSeverity::Medium.exit_code(), 2);
        assert_eq!(ErrorSeverity::Critical.exit_code(), 3);
        assert_eq!(
            FpMateError::IoError(std::io::Error::other("disk")).severity(),
            ErrorSeverity::Critical
        );
    }
}
