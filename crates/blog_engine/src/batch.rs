use std::sync::mpsc;

use blog_logging::{blog_error, blog_info};

use crate::{ArticleStamper, CompletionClient, EngineEvent, GenerationRequest};

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub generated: usize,
    pub failed: usize,
}

/// Generates one article per request, awaiting each call before the next.
///
/// A failed title is reported and skipped; it never stops the batch. Emits
/// `BatchFinished` exactly once, after the last request.
pub async fn generate_batch(
    client: &dyn CompletionClient,
    stamper: &ArticleStamper,
    requests: Vec<GenerationRequest>,
    sink: &dyn EventSink,
) -> BatchSummary {
    let total = requests.len();
    blog_info!("Generating {} article(s)", total);

    let mut summary = BatchSummary::default();
    for (idx, request) in requests.into_iter().enumerate() {
        blog_info!("[{}/{}] generating {:?}", idx + 1, total, request.title);
        match client.complete(&request.prompt).await {
            Ok(content) => {
                let article = stamper.stamp(&request.title, content);
                summary.generated += 1;
                sink.emit(EngineEvent::ArticleGenerated(article));
            }
            Err(error) => {
                blog_error!(
                    "Error generating article {:?}: {} ({})",
                    request.title,
                    error.message,
                    error.kind
                );
                summary.failed += 1;
                sink.emit(EngineEvent::ArticleFailed {
                    title: request.title,
                    error,
                });
            }
        }
    }

    blog_info!(
        "Batch finished: {} generated, {} failed",
        summary.generated,
        summary.failed
    );
    sink.emit(EngineEvent::BatchFinished {
        generated: summary.generated,
        failed: summary.failed,
    });
    summary
}
