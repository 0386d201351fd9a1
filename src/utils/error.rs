use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevUrlError {
    #[error("invalid port {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },

    #[error("invalid access level {0:?}")]
    InvalidAccessLevel(String),

    #[error("invalid devurl name {0:?}: name must be < 64 chars in length, begin with a letter and only contain letters or digits")]
    InvalidName(String),

    #[error("environment {0:?} not found")]
    EnvironmentNotFound(String),

    #[error("{operation}: remote service unavailable: {message}")]
    RemoteUnavailable { operation: String, message: String },

    #[error("{operation}: malformed response: {source}")]
    DecodeError {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no devurl found for port {port} in environment {environment:?}")]
    NotFound { environment: String, port: u16 },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Environment,
    Remote,
    NotFound,
    Configuration,
    Cancelled,
}

impl DevUrlError {
    pub fn remote(operation: &str, message: impl ToString) -> Self {
        DevUrlError::RemoteUnavailable {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }

    pub fn decode(operation: &str, source: serde_json::Error) -> Self {
        DevUrlError::DecodeError {
            operation: operation.to_string(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        DevUrlError::Config {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DevUrlError::InvalidPort { .. }
            | DevUrlError::InvalidAccessLevel(_)
            | DevUrlError::InvalidName(_) => ErrorCategory::Validation,
            DevUrlError::EnvironmentNotFound(_) => ErrorCategory::Environment,
            DevUrlError::RemoteUnavailable { .. } | DevUrlError::DecodeError { .. } => {
                ErrorCategory::Remote
            }
            DevUrlError::NotFound { .. } => ErrorCategory::NotFound,
            DevUrlError::Config { .. } | DevUrlError::Io(_) => ErrorCategory::Configuration,
            DevUrlError::Cancelled => ErrorCategory::Cancelled,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DevUrlError::InvalidPort { value, .. } => {
                format!("\"{}\" is not a usable port", value)
            }
            DevUrlError::RemoteUnavailable { operation, .. } => {
                format!("Could not reach the DevURL service ({})", operation)
            }
            DevUrlError::DecodeError { operation, .. } => {
                format!("The DevURL service sent a response we could not read ({})", operation)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DevUrlError::InvalidPort { .. } => "Use a port number between 1 and 65535",
            DevUrlError::InvalidAccessLevel(_) => {
                "Use one of: private, org, authed, public (see `devurl urls access-levels`)"
            }
            DevUrlError::InvalidName(_) => {
                "Pick a name that starts with a letter and only contains letters and digits"
            }
            DevUrlError::EnvironmentNotFound(_) => "Check the environment name and try again",
            DevUrlError::RemoteUnavailable { .. } => {
                "Check --url, your session token and network connectivity, then retry"
            }
            DevUrlError::DecodeError { .. } => "Check that --url points at a compatible service",
            DevUrlError::NotFound { .. } => "Run `devurl urls ls <env>` to see existing devurls",
            DevUrlError::Config { .. } | DevUrlError::Io(_) => {
                "Check the configuration file and command-line flags"
            }
            DevUrlError::Cancelled => "Re-run the command to try again",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Configuration => 2,
            ErrorCategory::Environment | ErrorCategory::Remote | ErrorCategory::NotFound => 1,
            ErrorCategory::Cancelled => 130,
        }
    }
}

pub type Result<T> = std::result::Result<T, DevUrlError>;
