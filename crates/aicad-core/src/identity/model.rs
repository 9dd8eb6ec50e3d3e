//! Identity domain model.
//!
//! Represents the authenticated user's profile data held for the duration
//! of a session.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The logged-in user's profile.
///
/// At most one `Identity` is current at any time; its absence means
/// "logged out". The identity is exclusively owned by the session store
/// and is only mutated through an explicit profile update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique identifier (UUID v4 format)
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Company or organisation, if provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Short bio, if provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl Identity {
    /// Creates a new identity with a freshly generated id.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            company: None,
            bio: None,
        }
    }

    /// Merges a partial profile update into this identity.
    ///
    /// Fields not named in the update keep their previous value. This is
    /// deliberately a merge, never a wholesale replacement.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(company) = update.company {
            self.company = Some(company);
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
    }
}

/// A partial update to an [`Identity`].
///
/// Every field is optional; only the fields present are written through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub bio: Option<String>,
}

impl ProfileUpdate {
    /// Returns true if the update names no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.company.is_none() && self.bio.is_none()
    }
}
