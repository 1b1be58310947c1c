//! Batch execution off the caller's task, with an event stream back.
//!
//! The caller (an interactive surface, a CLI event loop) must never block
//! for the duration of a batch, and must never be touched from the worker
//! directly; everything crosses over as explicit messages on a channel.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::translator::Translator;

/// One batch of paragraphs translated together to a single target language.
#[derive(Debug, Clone)]
pub struct TranslateTask {
    pub paragraphs: Vec<String>,
    pub target_lang: String,
}

/// Events delivered while a batch runs.
///
/// Per batch: zero or more `Progress`, then exactly one of `Completed` or
/// `Failed`, then exactly one `Finished`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateEvent {
    /// A paragraph finished (translated or fell back).
    Progress { done: usize, total: usize },
    /// Terminal success: the full ordered result list.
    Completed(Vec<String>),
    /// Terminal failure: a human-readable message. No result accompanies it.
    Failed(String),
    /// Always delivered once, after the terminal event, so the caller can
    /// restore whatever it disabled for the run.
    Finished,
}

/// Runs one [`TranslateTask`] against one [`Translator`] on a background
/// task.
///
/// A runner is consumed by [`Self::start`]; translating another batch takes
/// a new runner. Events sent after the caller dropped the receiver are
/// discarded — abandoning a run is always safe.
pub struct BatchRunner {
    task: TranslateTask,
    translator: Box<dyn Translator>,
}

impl BatchRunner {
    pub fn new(task: TranslateTask, translator: Box<dyn Translator>) -> Self {
        Self { task, translator }
    }

    /// Spawns the batch and returns the event stream.
    pub fn start(self) -> UnboundedReceiver<TranslateEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            self.run(tx).await;
        });
        rx
    }

    async fn run(self, tx: UnboundedSender<TranslateEvent>) {
        let progress_tx = tx.clone();
        let on_progress = move |done: usize, total: usize| {
            // The receiver may already be gone; a lost observer never
            // aborts the batch.
            let _ = progress_tx.send(TranslateEvent::Progress { done, total });
        };

        let outcome = self
            .translator
            .translate_many(&self.task.paragraphs, &self.task.target_lang, Some(&on_progress))
            .await;

        match outcome {
            Ok(results) => {
                let _ = tx.send(TranslateEvent::Completed(results));
            }
            Err(error) => {
                let _ = tx.send(TranslateEvent::Failed(error.to_string()));
            }
        }
        let _ = tx.send(TranslateEvent::Finished);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use anyhow::{Result, bail};
    use async_trait::async_trait;

    use super::*;
    use crate::translation::translator::{ProgressFn, report_progress};

    /// Tags every non-empty item with the target language.
    #[derive(Debug)]
    struct EchoTranslator;

    #[async_trait]
    impl Translator for EchoTranslator {
        async fn translate_many(
            &self,
            texts: &[String],
            target: &str,
            on_progress: Option<ProgressFn<'_>>,
        ) -> Result<Vec<String>> {
            let total = texts.len();
            let mut results = Vec::with_capacity(total);
            for (done, text) in texts.iter().enumerate() {
                if text.trim().is_empty() {
                    results.push(text.clone());
                } else {
                    results.push(format!("[{target}] {text}"));
                }
                report_progress(on_progress, done + 1, total);
            }
            Ok(results)
        }
    }

    /// Fails at the batch level, before any item completes.
    #[derive(Debug)]
    struct BrokenTranslator;

    #[async_trait]
    impl Translator for BrokenTranslator {
        async fn translate_many(
            &self,
            _texts: &[String],
            _target: &str,
            _on_progress: Option<ProgressFn<'_>>,
        ) -> Result<Vec<String>> {
            bail!("connection pool exhausted")
        }
    }

    fn task(paragraphs: &[&str]) -> TranslateTask {
        TranslateTask {
            paragraphs: paragraphs.iter().map(ToString::to_string).collect(),
            target_lang: "zh-CN".to_string(),
        }
    }

    async fn collect_events(mut rx: UnboundedReceiver<TranslateEvent>) -> Vec<TranslateEvent> {
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_successful_batch_event_sequence() {
        let runner = BatchRunner::new(task(&["one", "two"]), Box::new(EchoTranslator));
        let events = collect_events(runner.start()).await;

        assert_eq!(
            events,
            vec![
                TranslateEvent::Progress { done: 1, total: 2 },
                TranslateEvent::Progress { done: 2, total: 2 },
                TranslateEvent::Completed(vec![
                    "[zh-CN] one".to_string(),
                    "[zh-CN] two".to_string()
                ]),
                TranslateEvent::Finished,
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_batch_emits_failure_then_finished() {
        let runner = BatchRunner::new(task(&["one"]), Box::new(BrokenTranslator));
        let events = collect_events(runner.start()).await;

        assert_eq!(
            events,
            vec![
                TranslateEvent::Failed("connection pool exhausted".to_string()),
                TranslateEvent::Finished,
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_batch_completes_with_empty_result() {
        let runner = BatchRunner::new(task(&[]), Box::new(EchoTranslator));
        let events = collect_events(runner.start()).await;

        assert_eq!(
            events,
            vec![TranslateEvent::Completed(Vec::new()), TranslateEvent::Finished]
        );
    }

    #[tokio::test]
    async fn test_dropped_receiver_does_not_panic_worker() {
        let runner = BatchRunner::new(task(&["one", "two", "three"]), Box::new(EchoTranslator));
        let rx = runner.start();
        drop(rx);
        // Give the worker a chance to run to completion against a closed
        // channel; nothing to assert beyond "it did not blow up".
        tokio::task::yield_now().await;
    }

    #[tokio::test]
    async fn test_degraded_passthrough_end_to_end() {
        use crate::translation::google::GoogleWebTranslator;

        let runner = BatchRunner::new(
            task(&["Hello world", "", "Good bye"]),
            Box::new(GoogleWebTranslator::degraded()),
        );
        let events = collect_events(runner.start()).await;

        assert_eq!(
            events,
            vec![
                TranslateEvent::Progress { done: 1, total: 3 },
                TranslateEvent::Progress { done: 2, total: 3 },
                TranslateEvent::Progress { done: 3, total: 3 },
                TranslateEvent::Completed(vec![
                    "Hello world".to_string(),
                    String::new(),
                    "Good bye".to_string()
                ]),
                TranslateEvent::Finished,
            ]
        );
    }
}
