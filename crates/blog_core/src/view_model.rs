use crate::{ArticleId, Page};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub page: Page,
    pub loading: bool,
    pub generating: bool,
    /// Generate is enabled only when idle and at least one title was typed.
    pub can_generate: bool,
    pub titles_input: String,
    pub details_input: String,
    pub article_count: usize,
    pub articles: Vec<ArticleRowView>,
    pub pending_delete: Option<PendingDeleteView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRowView {
    /// 1-based position in the list, newest first.
    pub index: usize,
    pub id: ArticleId,
    pub title: String,
    pub date: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeleteView {
    pub id: ArticleId,
    pub title: String,
}
