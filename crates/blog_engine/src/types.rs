use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub title: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArticle {
    pub id: String,
    pub title: String,
    pub content: String,
    pub timestamp_ms: i64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ArticleGenerated(GeneratedArticle),
    ArticleFailed {
        title: String,
        error: CompletionError,
    },
    BatchFinished {
        generated: usize,
        failed: usize,
    },
}

/// Failure of a single completion call. `message` is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CompletionError {
    pub kind: FailureKind,
    pub message: String,
}

impl CompletionError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Timeout,
    HttpStatus(u16),
    /// The API answered with an `error` object.
    Api { error_type: Option<String> },
    MalformedResponse,
    EmptyChoices,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Api {
                error_type: Some(error_type),
            } => write!(f, "api error ({error_type})"),
            FailureKind::Api { error_type: None } => write!(f, "api error"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::EmptyChoices => write!(f, "response had no choices"),
        }
    }
}

/// Errors raised while wiring up the engine, before any request is sent.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid completion endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("an API key is required")]
    MissingApiKey,
    #[error("failed to build http client: {0}")]
    Client(String),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
