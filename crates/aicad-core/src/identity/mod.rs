//! Identity domain module.
//!
//! This module contains the identity model, profile update semantics,
//! credential request types, and the repository trait for durable
//! persistence.
//!
//! # Module Structure
//!
//! - `model`: Identity domain model and partial profile updates
//! - `request`: Login and registration form submissions
//! - `repository`: Repository trait for durable persistence

mod model;
mod repository;
mod request;

// Re-export public API
pub use model::{Identity, ProfileUpdate};
pub use repository::IdentityRepository;
pub use request::{LoginRequest, RegistrationError, RegistrationRequest};
