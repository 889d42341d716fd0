use std::sync::{mpsc, Arc};
use std::thread;

use blog_logging::{blog_error, blog_warn};

use crate::{
    generate_batch, ArticleStamper, CompletionClient, CompletionSettings, EventSink,
    GenerationRequest, ReqwestCompletionClient, SetupError,
};

pub struct EngineConfig {
    pub completion: CompletionSettings,
    pub stamper: ArticleStamper,
}

impl EngineConfig {
    pub fn new(completion: CompletionSettings) -> Self {
        Self {
            completion,
            stamper: ArticleStamper::system(),
        }
    }
}

enum EngineCommand {
    Generate { requests: Vec<GenerationRequest> },
}

/// Handle to the engine thread. Batches queue up and run one after another.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig, sink: Arc<dyn EventSink>) -> Result<Self, SetupError> {
        let client = Arc::new(ReqwestCompletionClient::new(config.completion)?);
        Self::with_client(client, config.stamper, sink)
    }

    pub fn with_client(
        client: Arc<dyn CompletionClient>,
        stamper: ArticleStamper,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, SetupError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                runtime.block_on(handle_command(
                    client.as_ref(),
                    &stamper,
                    command,
                    sink.as_ref(),
                ));
            }
        });

        Ok(Self { cmd_tx })
    }

    /// Queues a batch. Returns false if the engine thread is gone.
    pub fn generate(&self, requests: Vec<GenerationRequest>) -> bool {
        if requests.is_empty() {
            blog_warn!("Ignoring empty generation batch");
        }
        match self.cmd_tx.send(EngineCommand::Generate { requests }) {
            Ok(()) => true,
            Err(_) => {
                blog_error!("Engine thread stopped; batch dropped");
                false
            }
        }
    }
}

async fn handle_command(
    client: &dyn CompletionClient,
    stamper: &ArticleStamper,
    command: EngineCommand,
    sink: &dyn EventSink,
) {
    match command {
        EngineCommand::Generate { requests } => {
            generate_batch(client, stamper, requests, sink).await;
        }
    }
}
