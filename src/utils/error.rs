use thiserror::Error;

#[derive(Error, Debug)]
pub enum VacancyError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{provider} responded with {status} for {url}")]
    UnexpectedStatus {
        provider: String,
        status: u16,
        url: String,
    },

    #[error("{provider} returned an unexpected payload: {message}")]
    MalformedResponse { provider: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing credential: environment variable {variable} is not set")]
    MissingCredential { variable: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Provider,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl VacancyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VacancyError::HttpError(_) => ErrorCategory::Network,
            VacancyError::UnexpectedStatus { .. } | VacancyError::MalformedResponse { .. } => {
                ErrorCategory::Provider
            }
            VacancyError::MissingCredential { .. }
            | VacancyError::ConfigError { .. }
            | VacancyError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            VacancyError::IoError(_) | VacancyError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Provider | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Exit code reported by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VacancyError::HttpError(e) if e.is_timeout() => {
                "The job board did not answer in time".to_string()
            }
            VacancyError::HttpError(_) => "Could not reach the job board".to_string(),
            VacancyError::UnexpectedStatus {
                provider, status, ..
            } => format!("{} rejected the request (HTTP {})", provider, status),
            VacancyError::MalformedResponse { provider, .. } => {
                format!("{} answered with data in an unexpected format", provider)
            }
            VacancyError::MissingCredential { variable } => {
                format!("Credential {} is not configured", variable)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            VacancyError::HttpError(_) => {
                "Check the network connection and try again".to_string()
            }
            VacancyError::UnexpectedStatus { status: 403, .. }
            | VacancyError::UnexpectedStatus { status: 401, .. } => {
                "Check that the API token is valid".to_string()
            }
            VacancyError::UnexpectedStatus { status: 429, .. } => {
                "The provider is rate limiting; raise request_delay_ms and retry later"
                    .to_string()
            }
            VacancyError::UnexpectedStatus { .. } => {
                "Verify the endpoint and query settings in the configuration".to_string()
            }
            VacancyError::MalformedResponse { .. } => {
                "The provider API may have changed; verify the endpoint URL".to_string()
            }
            VacancyError::MissingCredential { variable } => format!(
                "Export {} or add it to a .env file in the working directory",
                variable
            ),
            VacancyError::ConfigError { .. } | VacancyError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again".to_string()
            }
            VacancyError::IoError(_) => "Check file paths and permissions".to_string(),
            VacancyError::SerializationError(_) => "Please report this as a bug".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VacancyError>;
