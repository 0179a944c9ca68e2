//! One-shot delayed push over a per-connection channel.
//!
//! A subscriber gets exactly one batch of messages: after `delay`, the job runs
//! once, each message it produced is forwarded, and the stream ends. The job is
//! spawned on its own task so a slow store query never blocks other connections.
//!
//! The returned stream owns the task. Dropping the stream (the client went
//! away) aborts the task, and a subscriber that leaves during the delay wakes
//! the task early so it exits without running the job.

use futures::Stream;
use futures::stream;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A single named event for the subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushMessage {
    pub event: String,
    pub data: String,
}

impl PushMessage {
    pub fn new(event: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            data: data.into(),
        }
    }
}

/// Aborts the wrapped task when dropped.
struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Spawns the push task for one subscriber and returns its message stream.
///
/// `label` only appears in log lines. A failing job is logged and the stream
/// closes without emitting anything.
pub fn delayed_push<F, Fut, E>(
    label: String,
    delay: Duration,
    job: F,
) -> impl Stream<Item = PushMessage> + Send + 'static
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<Vec<PushMessage>, E>> + Send + 'static,
    E: Display + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<PushMessage>(8);

    let handle = tokio::spawn(async move {
        tokio::select! {
            _ = tx.closed() => {
                tracing::debug!("Subscriber on '{label}' left before the push fired");
                return;
            }
            _ = tokio::time::sleep(delay) => {}
        }

        let messages = match job().await {
            Ok(messages) => messages,
            Err(e) => {
                tracing::error!("Push on '{label}' failed: {e}");
                return;
            }
        };

        for msg in messages {
            if tx.send(msg).await.is_err() {
                tracing::info!("Client disconnected while sending to '{label}'");
                return;
            }
        }
        tracing::debug!("Push on '{label}' complete");
    });

    stream::unfold(
        (rx, AbortOnDrop(handle)),
        |(mut rx, guard)| async move { rx.recv().await.map(|msg| (msg, (rx, guard))) },
    )
}
