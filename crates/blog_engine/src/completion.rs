use std::time::Duration;

use blog_logging::blog_debug;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{CompletionError, FailureKind, SetupError};

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

#[derive(Debug, Clone)]
pub struct CompletionSettings {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }
}

#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends one user prompt and returns the first choice's text verbatim.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    error: Option<ApiErrorBody>,
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(rename = "type", default)]
    error_type: Option<String>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReqwestCompletionClient {
    client: reqwest::Client,
    endpoint: Url,
    settings: CompletionSettings,
}

impl ReqwestCompletionClient {
    pub fn new(settings: CompletionSettings) -> Result<Self, SetupError> {
        if settings.api_key.trim().is_empty() {
            return Err(SetupError::MissingApiKey);
        }
        let endpoint = Url::parse(&settings.endpoint).map_err(|err| SetupError::InvalidEndpoint {
            endpoint: settings.endpoint.clone(),
            reason: err.to_string(),
        })?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SetupError::Client(err.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            settings,
        })
    }
}

#[async_trait::async_trait]
impl CompletionClient for ReqwestCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.settings.max_tokens,
        };

        blog_debug!(
            "POST {} model={} prompt_len={}",
            self.endpoint,
            self.settings.model,
            prompt.len()
        );
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;
        blog_debug!("completion status={} body_len={}", status, text.len());

        interpret_response(status, &text)
    }
}

/// An `error` object wins over the status code; a usable body on a non-2xx
/// status is still treated as a failure.
fn interpret_response(status: StatusCode, text: &str) -> Result<String, CompletionError> {
    let parsed = serde_json::from_str::<ChatResponse>(text);
    match parsed {
        Ok(ChatResponse {
            error: Some(error), ..
        }) => {
            let message = if error.message.is_empty() {
                status.to_string()
            } else {
                error.message
            };
            Err(CompletionError::new(
                FailureKind::Api {
                    error_type: error.error_type,
                },
                message,
            ))
        }
        _ if !status.is_success() => Err(CompletionError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        )),
        Err(err) => Err(CompletionError::new(
            FailureKind::MalformedResponse,
            format!("invalid response body: {err}"),
        )),
        Ok(response) => response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                CompletionError::new(FailureKind::EmptyChoices, "response contained no choices")
            }),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> CompletionError {
    if err.is_timeout() {
        return CompletionError::new(FailureKind::Timeout, err.to_string());
    }
    CompletionError::new(FailureKind::Network, err.to_string())
}
