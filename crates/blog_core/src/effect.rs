use crate::ArticleId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Generate one article per request, strictly in order.
    GenerateArticles { requests: Vec<ArticleRequest> },
    /// Show a blocking notice to the user.
    Alert { message: String },
    /// Ask the user to confirm deleting an article.
    ConfirmDelete { id: ArticleId, title: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRequest {
    pub title: String,
    pub prompt: String,
}
