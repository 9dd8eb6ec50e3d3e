//! Identity DTO for durable storage.

use aicad_core::identity::Identity;
use serde::{Deserialize, Serialize};

/// Current identity schema version.
pub const IDENTITY_V1_VERSION: &str = "1.0.0";

/// Durable representation of the identity entry (V1).
///
/// Carries an explicit schema version so a future format change can be
/// detected and migrated instead of silently misparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityV1 {
    /// Schema version of this record.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

fn default_schema_version() -> String {
    IDENTITY_V1_VERSION.to_string()
}

impl IdentityV1 {
    /// Converts the DTO into the domain model.
    pub fn into_domain(self) -> Identity {
        Identity {
            id: self.id,
            name: self.name,
            email: self.email,
            company: self.company,
            bio: self.bio,
        }
    }
}

impl From<&Identity> for IdentityV1 {
    fn from(identity: &Identity) -> Self {
        Self {
            schema_version: IDENTITY_V1_VERSION.to_string(),
            id: identity.id.clone(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            company: identity.company.clone(),
            bio: identity.bio.clone(),
        }
    }
}
