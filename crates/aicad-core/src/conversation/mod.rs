//! Conversation domain module.
//!
//! This module contains the message types, the generation state machine,
//! and the responder seam.
//!
//! # Module Structure
//!
//! - `message`: Message types (`MessageRole`, `ConversationMessage`)
//! - `engine`: Append-only log + single-flight state machine
//! - `responder`: Reply-producing trait implemented by backends

mod engine;
mod message;
mod responder;

// Re-export public API
pub use engine::{ConversationEngine, GenerationState, SubmitOutcome, GREETING};
pub use message::{ConversationMessage, MessageRole};
pub use responder::Responder;
