//! Identity repository trait.
//!
//! Defines the interface for durable persistence of the current identity.

use super::model::Identity;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for the single durable identity entry.
///
/// This trait decouples the session store from the specific storage
/// mechanism (a TOML file under the user's config directory in the default
/// implementation, an in-memory map in tests). The store holds at most one
/// entry; there is no keyspace beyond "the current user".
///
/// # Implementation Notes
///
/// Implementations must fail soft on malformed data: a stored value that
/// cannot be parsed is reported as `Ok(None)`, never as an error, so a
/// corrupt profile file can never prevent the application from starting.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Loads the stored identity.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Identity))`: a well-formed entry exists
    /// - `Ok(None)`: no entry, or the entry is malformed
    /// - `Err(_)`: the storage itself could not be accessed
    async fn load(&self) -> Result<Option<Identity>>;

    /// Saves the identity, overwriting any prior entry.
    async fn save(&self, identity: &Identity) -> Result<()>;

    /// Erases the stored entry. Erasing an absent entry is not an error.
    async fn clear(&self) -> Result<()>;
}
