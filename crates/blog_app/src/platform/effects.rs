use std::io::{self, Write};
use std::sync::mpsc;

use blog_core::{Article, ArticleId, Effect, Msg, DELETE_CONFIRM_PROMPT};
use blog_engine::{EngineEvent, EngineHandle, EventSink, GenerationRequest};
use blog_logging::{blog_error, blog_info};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    /// Executes effects, writing user-facing notices to `out`.
    ///
    /// Returns follow-up messages for effects that could not be carried out.
    pub fn run(&self, effects: Vec<Effect>, out: &mut impl Write) -> io::Result<Vec<Msg>> {
        let mut follow_up = Vec::new();
        for effect in effects {
            match effect {
                Effect::GenerateArticles { requests } => {
                    blog_info!("GenerateArticles count={}", requests.len());
                    let titles: Vec<String> = requests.iter().map(|r| r.title.clone()).collect();
                    let requests = requests
                        .into_iter()
                        .map(|request| GenerationRequest {
                            title: request.title,
                            prompt: request.prompt,
                        })
                        .collect();
                    if !self.engine.generate(requests) {
                        follow_up.extend(titles.into_iter().map(|title| Msg::ArticleFailed {
                            title,
                            message: "generation engine is not running".to_string(),
                        }));
                        follow_up.push(Msg::GenerationFinished);
                    }
                }
                Effect::Alert { message } => {
                    writeln!(out, "! {message}")?;
                }
                Effect::ConfirmDelete { id, title } => {
                    blog_info!("ConfirmDelete id={}", id);
                    writeln!(out, "? {DELETE_CONFIRM_PROMPT} \"{title}\" [y/N]")?;
                }
            }
        }
        out.flush()?;
        Ok(follow_up)
    }
}

/// Forwards engine events into the dispatcher inbox as core messages.
pub struct EngineEventForwarder {
    tx: mpsc::Sender<AppEvent>,
}

impl EngineEventForwarder {
    pub fn new(tx: mpsc::Sender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for EngineEventForwarder {
    fn emit(&self, event: EngineEvent) {
        if self.tx.send(AppEvent::Engine(map_event(event))).is_err() {
            blog_error!("Dispatcher gone; engine event dropped");
        }
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ArticleGenerated(article) => Msg::ArticleGenerated(Article {
            id: ArticleId::new(article.id),
            title: article.title,
            content: article.content,
            timestamp: article.timestamp_ms,
            date: article.date,
        }),
        EngineEvent::ArticleFailed { title, error } => Msg::ArticleFailed {
            title,
            message: error.message,
        },
        EngineEvent::BatchFinished { .. } => Msg::GenerationFinished,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_engine::{CompletionError, FailureKind, GeneratedArticle};

    #[test]
    fn engine_events_map_onto_core_messages() {
        let msg = map_event(EngineEvent::ArticleGenerated(GeneratedArticle {
            id: "article-1-abcdefghi".to_string(),
            title: "Traits".to_string(),
            content: "body".to_string(),
            timestamp_ms: 1,
            date: "January 1, 1970".to_string(),
        }));
        assert_eq!(
            msg,
            Msg::ArticleGenerated(Article {
                id: ArticleId::from("article-1-abcdefghi"),
                title: "Traits".to_string(),
                content: "body".to_string(),
                timestamp: 1,
                date: "January 1, 1970".to_string(),
            })
        );

        let msg = map_event(EngineEvent::ArticleFailed {
            title: "Traits".to_string(),
            error: CompletionError {
                kind: FailureKind::HttpStatus(500),
                message: "500 Internal Server Error".to_string(),
            },
        });
        assert_eq!(
            msg,
            Msg::ArticleFailed {
                title: "Traits".to_string(),
                message: "500 Internal Server Error".to_string(),
            }
        );

        assert_eq!(
            map_event(EngineEvent::BatchFinished {
                generated: 0,
                failed: 1
            }),
            Msg::GenerationFinished
        );
    }
}
