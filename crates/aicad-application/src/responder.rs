//! Canned responder.
//!
//! Stand-in for the real generation backend: picks uniformly at random
//! from a fixed pool of acknowledgement texts. The pool and the choice
//! policy are part of the demo's interaction contract; the [`Responder`]
//! seam is what a real backend would replace.

use aicad_core::conversation::Responder;
use rand::seq::SliceRandom;

/// The fixed response pool.
pub const CANNED_RESPONSES: [&str; 4] = [
    "I've generated a 3D CAD model based on your description. You can see it in the \
     viewer on the left. The model includes all the specifications you mentioned. \
     Would you like me to make any adjustments?",
    "Great! I've created the model you requested. It's now visible in the 3D viewer. \
     You can rotate and zoom to inspect it from all angles. Let me know if you'd like \
     to modify anything.",
    "The CAD model has been generated successfully! Check out the 3D viewer on the \
     left to see your design. Feel free to ask for any changes or refinements.",
    "Perfect! Your 3D model is ready and displayed in the viewer. I've incorporated \
     all the details from your description. Would you like to adjust any dimensions \
     or features?",
];

/// [`Responder`] that answers every prompt with a random canned text.
#[derive(Debug, Clone, Default)]
pub struct CannedResponder;

impl Responder for CannedResponder {
    fn reply(&self, _prompt: &str) -> String {
        CANNED_RESPONSES
            .choose(&mut rand::thread_rng())
            .expect("response pool is non-empty")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_comes_from_the_pool() {
        let responder = CannedResponder;
        for _ in 0..20 {
            let reply = responder.reply("Create a gear with 12 teeth");
            assert!(CANNED_RESPONSES.contains(&reply.as_str()));
        }
    }
}
