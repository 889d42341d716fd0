use blog_logging::blog_warn;

use crate::{build_prompt, parse_titles, AppState, ArticleRequest, Effect, Msg};

pub const NO_TITLES_ALERT: &str = "Please enter at least one article title";
pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete this article?";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            state.finish_loading();
            Vec::new()
        }
        Msg::ShowPage(page) => {
            state.set_page(page);
            Vec::new()
        }
        // The form is disabled while a batch runs.
        Msg::TitlesChanged(text) => {
            if !state.is_generating() {
                state.set_titles_input(text);
            }
            Vec::new()
        }
        Msg::DetailsChanged(text) => {
            if !state.is_generating() {
                state.set_details_input(text);
            }
            Vec::new()
        }
        Msg::GenerateClicked => {
            if state.is_generating() {
                return (state, Vec::new());
            }
            let titles = parse_titles(state.titles_input());
            if titles.is_empty() {
                return (
                    state,
                    vec![Effect::Alert {
                        message: NO_TITLES_ALERT.to_string(),
                    }],
                );
            }

            let details = state.details_input();
            let requests = titles
                .into_iter()
                .map(|title| {
                    let prompt = build_prompt(&title, Some(details));
                    ArticleRequest { title, prompt }
                })
                .collect();
            state.begin_generation();
            vec![Effect::GenerateArticles { requests }]
        }
        Msg::ArticleGenerated(article) => {
            let id = article.id.clone();
            if !state.prepend_article(article) {
                blog_warn!("Dropping article with duplicate id {}", id);
            }
            Vec::new()
        }
        Msg::ArticleFailed { title, message } => vec![Effect::Alert {
            message: format!("Failed to generate article: {title}. Error: {message}"),
        }],
        Msg::GenerationFinished => {
            if state.is_generating() {
                state.finish_generation();
            }
            Vec::new()
        }
        Msg::DeleteRequested { id } => match state.request_delete(&id) {
            Some(title) => vec![Effect::ConfirmDelete { id, title }],
            None => Vec::new(),
        },
        Msg::DeleteConfirmed => {
            state.confirm_delete();
            Vec::new()
        }
        Msg::DeleteCancelled => {
            state.cancel_delete();
            Vec::new()
        }
    };

    (state, effects)
}
