//! Core domain layer for AiCAD.
//!
//! Contains the identity model and persistence trait, the route guard,
//! the conversation engine, and the viewport transform. Everything here
//! is storage- and presentation-agnostic; infrastructure and application
//! crates provide the concrete backends.

pub mod conversation;
pub mod error;
pub mod identity;
pub mod route;
pub mod viewport;

// Re-export common error type
pub use error::{AicadError, Result};
