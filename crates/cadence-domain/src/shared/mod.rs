use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

define_id!(UserId);
define_id!(TaskId);
define_id!(CheckInId);
define_id!(WorkSessionId);
define_id!(SubscriptionId);

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication & Authorization (1xxx)
    MissingCallerIdentity = 1001,
    AiAuthRequired = 1002,

    // Resource Not Found (2xxx)
    ProfileNotFound = 2001,
    TaskNotFound = 2002,
    WorkSessionNotFound = 2004,
    SubscriptionNotFound = 2005,

    // Business Logic (3xxx)
    RecommendationFailed = 3001,
    AiQuotaExceeded = 3002,
    SessionAlreadyStopped = 3003,
    SubtaskNesting = 3004,

    // Data & Persistence (4xxx)
    RepositoryError = 4001,
    DataIntegrityError = 4002,
    SerializationError = 4003,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,
    NetworkError = 5002,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidInput = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::AiAuthRequired
            | ErrorCode::AiQuotaExceeded
            | ErrorCode::RecommendationFailed
            | ErrorCode::NetworkError => ErrorSeverity::Warning,

            ErrorCode::MissingCallerIdentity
            | ErrorCode::ProfileNotFound
            | ErrorCode::TaskNotFound
            | ErrorCode::WorkSessionNotFound
            | ErrorCode::SubscriptionNotFound
            | ErrorCode::ValidationError
            | ErrorCode::InvalidInput
            | ErrorCode::SessionAlreadyStopped
            | ErrorCode::SubtaskNesting => ErrorSeverity::Info,

            ErrorCode::RepositoryError
            | ErrorCode::DataIntegrityError
            | ErrorCode::SerializationError
            | ErrorCode::InfrastructureError => ErrorSeverity::Error,
        }
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorCode::NetworkError
                | ErrorCode::AiQuotaExceeded
                | ErrorCode::RecommendationFailed
                | ErrorCode::RepositoryError
        )
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Missing caller identity: {0}")]
    MissingCallerIdentity(String),

    #[error("AI endpoint rejected credentials: {0}")]
    AiAuthRequired(String),

    #[error("AI endpoint capacity or billing limit: {0}")]
    AiQuotaExceeded(String),

    #[error("Recommendation request failed: {0}")]
    RecommendationFailed(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Work session not found: {0}")]
    WorkSessionNotFound(String),

    #[error("Subscription not found: {0}")]
    SubscriptionNotFound(String),

    #[error("Work session already stopped: {0}")]
    SessionAlreadyStopped(String),

    #[error("Subtasks cannot have children: {0}")]
    SubtaskNesting(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::MissingCallerIdentity(_) => ErrorCode::MissingCallerIdentity,
            DomainError::AiAuthRequired(_) => ErrorCode::AiAuthRequired,
            DomainError::AiQuotaExceeded(_) => ErrorCode::AiQuotaExceeded,
            DomainError::RecommendationFailed(_) => ErrorCode::RecommendationFailed,
            DomainError::ProfileNotFound(_) => ErrorCode::ProfileNotFound,
            DomainError::TaskNotFound(_) => ErrorCode::TaskNotFound,
            DomainError::WorkSessionNotFound(_) => ErrorCode::WorkSessionNotFound,
            DomainError::SubscriptionNotFound(_) => ErrorCode::SubscriptionNotFound,
            DomainError::SessionAlreadyStopped(_) => ErrorCode::SessionAlreadyStopped,
            DomainError::SubtaskNesting(_) => ErrorCode::SubtaskNesting,
            DomainError::Repository(_) => ErrorCode::RepositoryError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::DataIntegrity(_) => ErrorCode::DataIntegrityError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::Serialization(_) => ErrorCode::SerializationError,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::MissingCallerIdentity(msg)
            | DomainError::AiAuthRequired(msg)
            | DomainError::AiQuotaExceeded(msg)
            | DomainError::RecommendationFailed(msg)
            | DomainError::ProfileNotFound(msg)
            | DomainError::TaskNotFound(msg)
            | DomainError::WorkSessionNotFound(msg)
            | DomainError::SubscriptionNotFound(msg)
            | DomainError::SessionAlreadyStopped(msg)
            | DomainError::SubtaskNesting(msg)
            | DomainError::Repository(msg)
            | DomainError::Infrastructure(msg)
            | DomainError::Validation(msg)
            | DomainError::DataIntegrity(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::Serialization(msg) => msg,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
