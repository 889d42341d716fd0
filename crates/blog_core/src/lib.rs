//! Blog core: pure state machine, prompt building and view-model helpers.
mod article;
mod effect;
mod msg;
mod prompt;
mod state;
mod update;
mod view_model;

pub use article::{Article, ArticleId};
pub use effect::{ArticleRequest, Effect};
pub use msg::Msg;
pub use prompt::{build_prompt, parse_titles};
pub use state::{AppState, Page};
pub use update::{update, DELETE_CONFIRM_PROMPT, NO_TITLES_ALERT};
pub use view_model::{AppViewModel, ArticleRowView, PendingDeleteView};
