//! Responder trait: the seam between the state machine and whatever
//! produces assistant replies.

/// Produces the assistant reply for a submitted prompt.
///
/// The conversation engine does not care where replies come from; the demo
/// wires in a canned pool, and a real asynchronous backend call is a
/// drop-in replacement of the implementation, not a redesign of the state
/// machine.
pub trait Responder: Send + Sync {
    /// Returns the reply for the given prompt.
    fn reply(&self, prompt: &str) -> String;
}
