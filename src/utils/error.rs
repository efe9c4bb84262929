use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Plan file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid currency code: {code}")]
    InvalidCurrency { code: String },

    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("Rate service error: {message}")]
    RateServiceError { message: String },

    #[error("Rate not found for {to} (base {from})")]
    RateNotFound { from: String, to: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::RateServiceError { .. } | Self::RateNotFound { .. } => {
                ErrorCategory::Network
            }
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) | Self::TomlError(_) => ErrorCategory::Data,
            Self::MissingConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::InvalidCurrency { .. } | Self::InvalidAmount { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // upstream hiccups are worth a retry later
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration | ErrorCategory::Data => {
                ErrorSeverity::High
            }
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) | Self::RateServiceError { .. } => {
                "Check your connection or try again later; the rate service may be unavailable"
            }
            Self::RateNotFound { .. } => "The rate service does not quote this pair, try another currency",
            Self::IoError(_) => "Check that the plan file and data directory exist and are writable",
            Self::SerializationError(_) => "The stored data is corrupted, remove it and retry",
            Self::TomlError(_) => "Fix the TOML syntax in the plan file",
            Self::MissingConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the command line options and the reported plan entry"
            }
            Self::InvalidCurrency { .. } => "Use an ISO 4217 code such as EUR, BRL or USD",
            Self::InvalidAmount { .. } => "Use an amount greater than zero",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) | Self::RateServiceError { .. } => {
                "Could not fetch the exchange rate right now".to_string()
            }
            Self::InvalidCurrency { code } => format!("'{}' is not a supported currency", code),
            Self::InvalidAmount { .. } => "The amount must be greater than zero".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
