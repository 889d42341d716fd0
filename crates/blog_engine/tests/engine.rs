use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use blog_engine::{
    ArticleStamper, ChannelEventSink, CompletionClient, CompletionError, EngineEvent,
    EngineHandle, GenerationRequest,
};

/// Answers with the prompt text, failing prompts that contain "fail".
#[derive(Default)]
struct EchoClient {
    seen: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl CompletionClient for EchoClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.seen.lock().unwrap().push(prompt.to_string());
        if prompt.contains("fail") {
            return Err(CompletionError {
                kind: blog_engine::FailureKind::Network,
                message: "connection reset".to_string(),
            });
        }
        Ok(format!("echo: {prompt}"))
    }
}

fn request(title: &str, prompt: &str) -> GenerationRequest {
    GenerationRequest {
        title: title.to_string(),
        prompt: prompt.to_string(),
    }
}

fn recv(rx: &mpsc::Receiver<EngineEvent>) -> EngineEvent {
    rx.recv_timeout(Duration::from_secs(5)).expect("engine event")
}

#[test]
fn engine_runs_queued_batches_in_order() {
    let client = Arc::new(EchoClient::default());
    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::with_client(
        client.clone(),
        ArticleStamper::system(),
        Arc::new(ChannelEventSink::new(tx)),
    )
    .expect("engine");

    assert!(engine.generate(vec![
        request("One", "one"),
        request("Two", "please fail"),
    ]));
    assert!(engine.generate(vec![request("Three", "three")]));

    match recv(&rx) {
        EngineEvent::ArticleGenerated(article) => {
            assert_eq!(article.title, "One");
            assert_eq!(article.content, "echo: one");
        }
        other => panic!("unexpected event {other:?}"),
    }
    match recv(&rx) {
        EngineEvent::ArticleFailed { title, error } => {
            assert_eq!(title, "Two");
            assert_eq!(error.to_string(), "connection reset");
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(
        recv(&rx),
        EngineEvent::BatchFinished {
            generated: 1,
            failed: 1
        }
    );
    assert!(matches!(recv(&rx), EngineEvent::ArticleGenerated(_)));
    assert_eq!(
        recv(&rx),
        EngineEvent::BatchFinished {
            generated: 1,
            failed: 0
        }
    );

    assert_eq!(
        *client.seen.lock().unwrap(),
        vec!["one", "please fail", "three"]
    );
}
