//! Blog engine: completion API client and sequential article generation.
mod batch;
mod completion;
mod engine;
mod stamp;
mod types;

pub use batch::{generate_batch, BatchSummary, ChannelEventSink, EventSink};
pub use completion::{
    CompletionClient, CompletionSettings, ReqwestCompletionClient, DEFAULT_ENDPOINT,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
};
pub use engine::{EngineConfig, EngineHandle};
pub use stamp::{format_display_date, new_article_id, ArticleStamper, Clock};
pub use types::{
    CompletionError, EngineEvent, FailureKind, GeneratedArticle, GenerationRequest, SetupError,
};
