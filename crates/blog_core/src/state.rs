use crate::view_model::{AppViewModel, ArticleRowView, PendingDeleteView};
use crate::{Article, ArticleId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Blog,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    page: Page,
    /// Newest first.
    articles: Vec<Article>,
    titles_input: String,
    details_input: String,
    generating: bool,
    loading: bool,
    pending_delete: Option<ArticleId>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: Page::Blog,
            articles: Vec::new(),
            titles_input: String::new(),
            details_input: String::new(),
            generating: false,
            loading: true,
            pending_delete: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let articles = self
            .articles
            .iter()
            .enumerate()
            .map(|(idx, article)| ArticleRowView {
                index: idx + 1,
                id: article.id.clone(),
                title: article.title.clone(),
                date: article.date.clone(),
                content: article.content.clone(),
            })
            .collect();

        let pending_delete = self.pending_delete.as_ref().and_then(|id| {
            self.find(id).map(|article| PendingDeleteView {
                id: id.clone(),
                title: article.title.clone(),
            })
        });

        AppViewModel {
            page: self.page,
            loading: self.loading,
            generating: self.generating,
            can_generate: !self.generating && !self.titles_input.trim().is_empty(),
            titles_input: self.titles_input.clone(),
            details_input: self.details_input.clone(),
            article_count: self.articles.len(),
            articles,
            pending_delete,
            dirty: self.dirty,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn titles_input(&self) -> &str {
        &self.titles_input
    }

    pub fn details_input(&self) -> &str {
        &self.details_input
    }

    /// Returns whether state changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn finish_loading(&mut self) {
        if self.loading {
            self.loading = false;
            self.dirty = true;
        }
    }

    pub(crate) fn set_page(&mut self, page: Page) {
        if self.page != page {
            self.page = page;
            self.dirty = true;
        }
    }

    pub(crate) fn set_titles_input(&mut self, text: String) {
        if self.titles_input != text {
            self.titles_input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn set_details_input(&mut self, text: String) {
        if self.details_input != text {
            self.details_input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_generation(&mut self) {
        self.generating = true;
        self.dirty = true;
    }

    /// Batch is over: inputs are cleared and the list page is shown.
    pub(crate) fn finish_generation(&mut self) {
        self.generating = false;
        self.titles_input.clear();
        self.details_input.clear();
        self.page = Page::Blog;
        self.dirty = true;
    }

    /// Prepends the article. Returns false if its id is already taken.
    pub(crate) fn prepend_article(&mut self, article: Article) -> bool {
        if self.find(&article.id).is_some() {
            return false;
        }
        self.articles.insert(0, article);
        self.dirty = true;
        true
    }

    /// Records a pending delete and returns the article title, or `None` for unknown ids.
    pub(crate) fn request_delete(&mut self, id: &ArticleId) -> Option<String> {
        let title = self.find(id)?.title.clone();
        self.pending_delete = Some(id.clone());
        self.dirty = true;
        Some(title)
    }

    pub(crate) fn confirm_delete(&mut self) -> Option<Article> {
        let id = self.pending_delete.take()?;
        self.dirty = true;
        let position = self.articles.iter().position(|a| a.id == id)?;
        Some(self.articles.remove(position))
    }

    pub(crate) fn cancel_delete(&mut self) {
        if self.pending_delete.take().is_some() {
            self.dirty = true;
        }
    }

    fn find(&self, id: &ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| &a.id == id)
    }
}
