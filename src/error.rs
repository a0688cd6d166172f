//! Error types for Dialog Prompt.

/// Top-level error type for the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Dialog service error: {0}")]
    Dialog(#[from] DialogError),

    #[error("Malformed response: {0}")]
    Parse(#[from] ParseError),

    #[error("Documentation error: {0}")]
    Document(#[from] DocumentError),

    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors talking to the remote dialog service.
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode service response: {0}")]
    Decode(String),
}

/// Errors raised while normalizing a raw turn response.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Response is missing field `{0}`")]
    MissingField(String),

    #[error("Response field `{field}` is invalid: expected {expected}")]
    InvalidField { field: String, expected: String },
}

/// Documentation table errors.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to read documentation links from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse documentation links from {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("No documentation found for topic '{0}'")]
    TopicNotFound(String),
}

/// Action handler errors.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Invalid argument for action {name}: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("No documentation found for topic '{0}'")]
    TopicNotFound(String),
}

/// Dispatcher errors.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("No handler registered for action '{name}'")]
    UnknownAction { name: String },

    #[error("Action {name} failed: {source}")]
    Action {
        name: String,
        #[source]
        source: ActionError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the client.
pub type Result<T> = std::result::Result<T, Error>;
