use crate::{Article, ArticleId, Page};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Front-end finished its startup; clears the loading flag.
    Mounted,
    /// User switched between the blog list and the admin form.
    ShowPage(Page),
    /// User edited the titles input (one title per line).
    TitlesChanged(String),
    /// User edited the shared details input.
    DetailsChanged(String),
    /// User clicked Generate.
    GenerateClicked,
    /// Engine produced an article for one title.
    ArticleGenerated(Article),
    /// Engine failed to produce an article for one title.
    ArticleFailed { title: String, message: String },
    /// Engine worked through every title of the batch.
    GenerationFinished,
    /// User clicked delete on an article.
    DeleteRequested { id: ArticleId },
    /// User confirmed the pending delete.
    DeleteConfirmed,
    /// User declined the pending delete.
    DeleteCancelled,
}
