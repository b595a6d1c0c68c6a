//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;
use tracing::debug;

use crate::loader::{ContentCache, DocumentSource};
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::LoadContent { source } => {
            tokio::spawn(async move {
                load_content(ContentCache::global(), source, msg_tx).await;
            });
        }
    }
}

/// Fetch content through `cache` and report the outcome as a message
pub async fn load_content(
    cache: &ContentCache,
    source: DocumentSource,
    msg_tx: mpsc::Sender<Message>,
) {
    let msg = match cache.load(&source).await {
        Ok(tree) => Message::ContentLoaded(tree),
        Err(e) => Message::ContentLoadFailed {
            error: e.to_string(),
        },
    };
    if msg_tx.send(msg).await.is_err() {
        // Receiver gone: the app is shutting down
        debug!("Dropping content load result, event loop closed");
    }
}
