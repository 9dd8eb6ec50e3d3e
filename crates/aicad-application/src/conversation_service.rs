//! Conversation service.
//!
//! Owns a [`ConversationEngine`] for the lifetime of one conversation
//! screen, schedules the simulated generation delay, and notifies the
//! presentation layer after every append so it can re-render and
//! auto-scroll to the newest entry.

use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;

use aicad_core::conversation::{
    ConversationEngine, ConversationMessage, GenerationState, Responder, SubmitOutcome,
};

use crate::generation::GenerationTask;

/// Notifications emitted to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationEvent {
    /// The log grew; re-render and auto-scroll to the newest entry.
    MessageAppended { revision: u64 },
    /// The in-flight generation settled (completed or cancelled).
    GenerationFinished,
}

/// Drives one conversation: submissions, the single-flight generation
/// delay, and append notifications.
///
/// The service is screen-local state. Dropping it (navigating away)
/// cancels any in-flight generation; the engine and its log are
/// discarded with it.
pub struct ConversationService {
    engine: Arc<Mutex<ConversationEngine>>,
    responder: Arc<dyn Responder>,
    delay: Duration,
    events: mpsc::UnboundedSender<ConversationEvent>,
    /// Root token; child tokens are handed to each generation task.
    shutdown: CancellationToken,
    inflight: StdMutex<Option<GenerationTask>>,
}

impl ConversationService {
    /// Creates a service and the event receiver the screen drains.
    pub fn new(
        responder: Arc<dyn Responder>,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<ConversationEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let service = Self {
            engine: Arc::new(Mutex::new(ConversationEngine::new())),
            responder,
            delay,
            events,
            shutdown: CancellationToken::new(),
            inflight: StdMutex::new(None),
        };
        (service, receiver)
    }

    /// Current message log, oldest first.
    pub async fn messages(&self) -> Vec<ConversationMessage> {
        self.engine.lock().await.messages().to_vec()
    }

    /// Current generation state.
    pub async fn state(&self) -> GenerationState {
        self.engine.lock().await.state()
    }

    /// Current pending input buffer.
    pub async fn draft(&self) -> String {
        self.engine.lock().await.draft().to_string()
    }

    /// Replaces the pending input buffer.
    pub async fn set_draft(&self, text: impl Into<String>) {
        self.engine.lock().await.set_draft(text);
    }

    /// Submits the current draft.
    ///
    /// On acceptance the user message is appended immediately, the engine
    /// enters `Generating`, and the reply is scheduled after the
    /// configured delay; the call returns without waiting for it.
    /// Rejections (empty draft, generation already in flight) are silent
    /// no-ops, mirrored back in the outcome.
    pub async fn submit(&self) -> SubmitOutcome {
        let outcome = {
            let mut engine = self.engine.lock().await;
            let outcome = engine.submit();
            if let SubmitOutcome::Submitted { .. } = outcome {
                self.notify_appended(engine.revision());
            }
            outcome
        };

        if let SubmitOutcome::Submitted { prompt } = &outcome {
            self.spawn_generation(prompt.clone());
        }
        outcome
    }

    /// Cancels the in-flight generation, if any. The engine returns to
    /// idle without an assistant append.
    pub fn cancel(&self) {
        if let Some(task) = self.inflight.lock().unwrap().take() {
            task.cancel();
        }
    }

    fn spawn_generation(&self, prompt: String) {
        let engine = self.engine.clone();
        let responder = self.responder.clone();
        let events = self.events.clone();
        let delay = self.delay;
        let token = self.shutdown.child_token();
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {
                    tracing::debug!("generation cancelled");
                    engine.lock().await.abort_generation();
                    let _ = events.send(ConversationEvent::GenerationFinished);
                }
                _ = tokio::time::sleep(delay) => {
                    let reply = responder.reply(&prompt);
                    let mut engine = engine.lock().await;
                    engine.complete_generation(reply);
                    let _ = events.send(ConversationEvent::MessageAppended {
                        revision: engine.revision(),
                    });
                    let _ = events.send(ConversationEvent::GenerationFinished);
                }
            }
        });

        *self.inflight.lock().unwrap() = Some(GenerationTask::new(token, handle));
    }

    fn notify_appended(&self, revision: u64) {
        let _ = self
            .events
            .send(ConversationEvent::MessageAppended { revision });
    }
}

impl Drop for ConversationService {
    fn drop(&mut self) {
        // Navigating away tears the screen down; a generation still in
        // flight is cancelled rather than left running against a dead
        // engine.
        self.shutdown.cancel();
    }
}
