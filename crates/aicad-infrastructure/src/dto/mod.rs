//! Storage DTOs.
//!
//! DTOs are the versioned wire format of durable state; domain models
//! never serialize directly.

mod identity;

pub use identity::{IdentityV1, IDENTITY_V1_VERSION};
