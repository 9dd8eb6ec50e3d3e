//! TOML-backed identity repository.
//!
//! Persists the current identity as a single `app_user.toml` entry under
//! the application's config directory. Absence of the file means logged
//! out; a malformed file is treated as absent so corrupt state can never
//! crash the application.

use async_trait::async_trait;

use aicad_core::identity::{Identity, IdentityRepository};
use aicad_core::{AicadError, Result};

use crate::dto::IdentityV1;
use crate::paths::AicadPaths;
use crate::storage::AtomicTomlFile;

/// Durable [`IdentityRepository`] over an atomic TOML file.
pub struct TomlIdentityRepository {
    file: AtomicTomlFile<IdentityV1>,
}

impl TomlIdentityRepository {
    /// Creates a repository at the standard profile path.
    pub fn new(paths: &AicadPaths) -> Result<Self> {
        Ok(Self {
            file: AtomicTomlFile::new(paths.profile_path()?),
        })
    }

    /// Creates a repository at an explicit path (tests, alternate profiles).
    pub fn at_path(path: std::path::PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }
}

#[async_trait]
impl IdentityRepository for TomlIdentityRepository {
    async fn load(&self) -> Result<Option<Identity>> {
        match self.file.load() {
            Ok(Some(dto)) => Ok(Some(dto.into_domain())),
            Ok(None) => Ok(None),
            Err(e) if e.is_malformed() => {
                tracing::warn!(
                    path = %self.file.path().display(),
                    error = %e,
                    "stored profile is malformed, treating as logged out"
                );
                Ok(None)
            }
            Err(e) => Err(AicadError::from(e)),
        }
    }

    async fn save(&self, identity: &Identity) -> Result<()> {
        self.file.save(&IdentityV1::from(identity))?;
        tracing::debug!(id = %identity.id, "persisted identity");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.file.remove()?;
        tracing::debug!("erased durable identity entry");
        Ok(())
    }
}
