//! Conversation engine: append-only log plus the generation state machine.

use serde::{Deserialize, Serialize};

use super::message::ConversationMessage;

/// Assistant greeting seeded as the first log entry of every conversation.
pub const GREETING: &str = "Hello! I'm your AI CAD assistant. Describe the 3D model \
you want to create, and I'll generate it for you. For example, try \"Create a simple \
gear with 12 teeth\" or \"Design a coffee mug with a handle\".";

/// Whether a simulated response is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationState {
    /// No generation in flight; submissions are accepted.
    Idle,
    /// A generation is in flight; submissions are rejected, not queued.
    Generating,
}

impl std::fmt::Display for GenerationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationState::Idle => write!(f, "idle"),
            GenerationState::Generating => write!(f, "generating"),
        }
    }
}

/// Result of a [`ConversationEngine::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was accepted; a generation for `prompt` is now in flight.
    Submitted { prompt: String },
    /// The trimmed draft was empty. No-op.
    RejectedEmpty,
    /// A generation is already in flight. The input is ignored, not queued.
    RejectedBusy,
}

/// Owns the ordered message log, the draft input buffer, and the
/// single-flight generation state machine.
///
/// The engine is deliberately synchronous: it transitions on discrete
/// events (`submit`, `complete_generation`) and leaves the scheduling of
/// the asynchronous delay to its caller. That keeps the state machine's
/// external contract unchanged when the simulated responder is swapped
/// for a real backend call.
///
/// Every append bumps `revision`; consumers re-render and auto-scroll to
/// the newest entry whenever the revision they last rendered is behind.
#[derive(Debug)]
pub struct ConversationEngine {
    messages: Vec<ConversationMessage>,
    state: GenerationState,
    draft: String,
    revision: u64,
}

impl ConversationEngine {
    /// Creates an engine seeded with the standard assistant greeting.
    pub fn new() -> Self {
        Self::with_greeting(GREETING)
    }

    /// Creates an engine seeded with a custom greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut engine = Self {
            messages: Vec::new(),
            state: GenerationState::Idle,
            draft: String::new(),
            revision: 0,
        };
        engine.append(ConversationMessage::assistant(greeting));
        engine
    }

    /// The ordered message log, oldest first.
    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// Current generation state.
    pub fn state(&self) -> GenerationState {
        self.state
    }

    /// Monotonic counter bumped on every append.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The pending input buffer.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the pending input buffer.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Submits the current draft.
    ///
    /// Preconditions: the trimmed draft is non-empty AND the state is
    /// `Idle`. On success the user message is appended, the draft is
    /// cleared and the engine enters `Generating`. Rejections are silent
    /// no-ops; a busy rejection leaves the draft untouched.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state == GenerationState::Generating {
            tracing::debug!("submission rejected: generation in flight");
            return SubmitOutcome::RejectedBusy;
        }

        let prompt = self.draft.trim().to_string();
        if prompt.is_empty() {
            return SubmitOutcome::RejectedEmpty;
        }

        self.append(ConversationMessage::user(prompt.clone()));
        self.draft.clear();
        self.state = GenerationState::Generating;
        SubmitOutcome::Submitted { prompt }
    }

    /// Completes the in-flight generation with the assistant's reply.
    ///
    /// Appends exactly one assistant message and returns to `Idle`. A
    /// completion arriving while `Idle` is stale (e.g. it raced a
    /// cancellation) and is dropped with a warning.
    pub fn complete_generation(&mut self, reply: impl Into<String>) {
        if self.state != GenerationState::Generating {
            tracing::warn!("dropping stale generation completion");
            return;
        }
        self.append(ConversationMessage::assistant(reply));
        self.state = GenerationState::Idle;
    }

    /// Aborts the in-flight generation without appending a reply.
    ///
    /// Used when the conversation screen is torn down while a generation
    /// is pending. Aborting while `Idle` is a no-op.
    pub fn abort_generation(&mut self) {
        if self.state == GenerationState::Generating {
            self.state = GenerationState::Idle;
        }
    }

    fn append(&mut self, message: ConversationMessage) {
        self.messages.push(message);
        self.revision += 1;
    }
}

impl Default for ConversationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::MessageRole;

    #[test]
    fn test_new_engine_is_seeded_with_greeting() {
        let engine = ConversationEngine::new();
        assert_eq!(engine.messages().len(), 1);
        assert_eq!(engine.messages()[0].role, MessageRole::Assistant);
        assert_eq!(engine.messages()[0].content, GREETING);
        assert_eq!(engine.state(), GenerationState::Idle);
    }

    #[test]
    fn test_submit_appends_user_message_and_enters_generating() {
        let mut engine = ConversationEngine::new();
        engine.set_draft("Create a gear with 12 teeth");

        let outcome = engine.submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Submitted {
                prompt: "Create a gear with 12 teeth".to_string()
            }
        );
        assert_eq!(engine.messages().len(), 2);
        assert_eq!(engine.messages()[1].role, MessageRole::User);
        assert_eq!(engine.state(), GenerationState::Generating);
        assert!(engine.draft().is_empty());
    }

    #[test]
    fn test_submit_trims_whitespace() {
        let mut engine = ConversationEngine::new();
        engine.set_draft("  a cube  ");

        let outcome = engine.submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Submitted {
                prompt: "a cube".to_string()
            }
        );
        assert_eq!(engine.messages()[1].content, "a cube");
    }

    #[test]
    fn test_whitespace_only_submission_is_a_noop() {
        let mut engine = ConversationEngine::new();
        engine.set_draft("   \t ");

        assert_eq!(engine.submit(), SubmitOutcome::RejectedEmpty);
        assert_eq!(engine.messages().len(), 1);
        assert_eq!(engine.state(), GenerationState::Idle);
    }

    #[test]
    fn test_submit_while_generating_is_rejected_and_leaves_draft() {
        let mut engine = ConversationEngine::new();
        engine.set_draft("first");
        engine.submit();

        engine.set_draft("second");
        let outcome = engine.submit();

        assert_eq!(outcome, SubmitOutcome::RejectedBusy);
        assert_eq!(engine.messages().len(), 2);
        assert_eq!(engine.draft(), "second");
        assert_eq!(engine.state(), GenerationState::Generating);
    }

    #[test]
    fn test_full_cycle_appends_user_then_assistant() {
        let mut engine = ConversationEngine::new();
        engine.set_draft("a coffee mug");
        engine.submit();
        engine.complete_generation("Done, see the viewer.");

        let roles: Vec<MessageRole> = engine.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![MessageRole::Assistant, MessageRole::User, MessageRole::Assistant]
        );
        assert_eq!(engine.state(), GenerationState::Idle);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut engine = ConversationEngine::new();
        engine.complete_generation("unsolicited");
        assert_eq!(engine.messages().len(), 1);
        assert_eq!(engine.state(), GenerationState::Idle);
    }

    #[test]
    fn test_abort_returns_to_idle_without_append() {
        let mut engine = ConversationEngine::new();
        engine.set_draft("a gear");
        engine.submit();

        engine.abort_generation();

        assert_eq!(engine.state(), GenerationState::Idle);
        assert_eq!(engine.messages().len(), 2);

        // The late completion for the aborted generation must not land.
        engine.complete_generation("too late");
        assert_eq!(engine.messages().len(), 2);
    }

    #[test]
    fn test_revision_bumps_on_every_append() {
        let mut engine = ConversationEngine::new();
        assert_eq!(engine.revision(), 1);

        engine.set_draft("a gear");
        engine.submit();
        assert_eq!(engine.revision(), 2);

        engine.complete_generation("done");
        assert_eq!(engine.revision(), 3);

        // Rejections do not bump the revision.
        engine.submit();
        assert_eq!(engine.revision(), 3);
    }
}
