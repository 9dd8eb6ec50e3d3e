//! In-memory identity repository.
//!
//! Used by tests and as a no-persistence fallback when the config
//! directory cannot be resolved. Holds the entry for the lifetime of the
//! process only.

use std::sync::Mutex;

use async_trait::async_trait;

use aicad_core::Result;
use aicad_core::identity::{Identity, IdentityRepository};

/// Volatile [`IdentityRepository`] backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryIdentityRepository {
    entry: Mutex<Option<Identity>>,
}

impl MemoryIdentityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityRepository for MemoryIdentityRepository {
    async fn load(&self) -> Result<Option<Identity>> {
        Ok(self.entry.lock().unwrap().clone())
    }

    async fn save(&self, identity: &Identity) -> Result<()> {
        *self.entry.lock().unwrap() = Some(identity.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.entry.lock().unwrap() = None;
        Ok(())
    }
}
