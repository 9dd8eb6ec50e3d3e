//! Application layer for AiCAD.
//!
//! Use cases over the core domain: the session store, the conversation
//! service with its simulated generation scheduling, and the canned
//! responder.

mod conversation_service;
mod generation;
mod responder;
mod session_store;

pub use conversation_service::{ConversationEvent, ConversationService};
pub use generation::GenerationTask;
pub use responder::{CANNED_RESPONSES, CannedResponder};
pub use session_store::SessionStore;
