//! Session store: the single source of truth for "who is logged in".
//!
//! One owned state container, injected into the route guard and the
//! views rather than reached into ambiently, so it can be swapped for a
//! backend-backed session later. Every mutating operation updates the
//! in-memory identity and the durable store before returning; the two
//! never diverge.

use std::sync::Arc;

use tokio::sync::RwLock;

use aicad_core::identity::{Identity, IdentityRepository, ProfileUpdate};
use aicad_core::{AicadError, Result};

/// Owns the current [`Identity`] and its durable persistence.
///
/// The current identity has exactly one writer path: the operations on
/// this store. All reads go through [`SessionStore::current`].
pub struct SessionStore {
    current: RwLock<Option<Identity>>,
    repository: Arc<dyn IdentityRepository>,
}

impl SessionStore {
    /// Creates a store over the given repository. No identity is current
    /// until [`restore`](Self::restore) or a login/registration runs.
    pub fn new(repository: Arc<dyn IdentityRepository>) -> Self {
        Self {
            current: RwLock::new(None),
            repository,
        }
    }

    /// Restores the session from durable storage on startup.
    ///
    /// A well-formed entry becomes the current identity; an absent or
    /// malformed entry leaves the store logged out (the repository fails
    /// soft on malformed data).
    pub async fn restore(&self) -> Result<Option<Identity>> {
        let restored = self.repository.load().await?;
        let mut current = self.current.write().await;
        *current = restored.clone();
        if let Some(identity) = &restored {
            tracing::info!(email = %identity.email, "session restored");
        }
        Ok(restored)
    }

    /// Sets the current identity and writes it through, overwriting any
    /// prior entry. The durable write completes before this returns.
    pub async fn login(&self, identity: Identity) -> Result<()> {
        let mut current = self.current.write().await;
        self.repository.save(&identity).await?;
        tracing::info!(email = %identity.email, "logged in");
        *current = Some(identity);
        Ok(())
    }

    /// Registers a new identity.
    ///
    /// Semantically identical to [`login`](Self::login) in this system:
    /// no credential verification exists, so any submitted registration
    /// becomes the current identity.
    pub async fn register(&self, identity: Identity) -> Result<()> {
        self.login(identity).await
    }

    /// Merges a partial update into the current identity and writes the
    /// merged result through.
    ///
    /// # Errors
    ///
    /// Fails with [`AicadError::NoSession`] when no identity is current.
    /// The route guard makes that state unreachable from the UI, so
    /// hitting it is a programming error surfaced loudly rather than
    /// masked.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Identity> {
        let mut current = self.current.write().await;
        let identity = current.as_mut().ok_or(AicadError::NoSession)?;

        let mut merged = identity.clone();
        merged.apply(update);
        self.repository.save(&merged).await?;
        tracing::info!(email = %merged.email, "profile updated");

        *identity = merged.clone();
        Ok(merged)
    }

    /// Clears the current identity and erases the durable entry.
    pub async fn logout(&self) -> Result<()> {
        let mut current = self.current.write().await;
        self.repository.clear().await?;
        if current.take().is_some() {
            tracing::info!("logged out");
        }
        Ok(())
    }

    /// Snapshot of the current identity, if any.
    pub async fn current(&self) -> Option<Identity> {
        self.current.read().await.clone()
    }

    /// Whether an identity is current.
    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aicad_infrastructure::{MemoryIdentityRepository, TomlIdentityRepository};
    use tempfile::TempDir;

    fn memory_store() -> (SessionStore, Arc<MemoryIdentityRepository>) {
        let repo = Arc::new(MemoryIdentityRepository::new());
        (SessionStore::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_login_sets_current_and_persists() {
        let (store, repo) = memory_store();
        store.login(Identity::new("Ada", "a@b.com")).await.unwrap();

        assert!(store.is_authenticated().await);
        assert_eq!(repo.load().await.unwrap().unwrap().email, "a@b.com");
    }

    #[tokio::test]
    async fn test_register_behaves_like_login() {
        let (store, repo) = memory_store();
        store
            .register(Identity::new("Grace", "g@h.com"))
            .await
            .unwrap();

        assert_eq!(store.current().await.unwrap().name, "Grace");
        assert!(repo.load().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_logout_clears_memory_and_durable_entry() {
        let (store, repo) = memory_store();
        store.login(Identity::new("Ada", "a@b.com")).await.unwrap();

        store.logout().await.unwrap();

        assert!(!store.is_authenticated().await);
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_profile_merges_and_persists() {
        let (store, repo) = memory_store();
        store.login(Identity::new("Ada", "a@b.com")).await.unwrap();

        let updated = store
            .update_profile(ProfileUpdate {
                company: Some("Analytical Engines".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        // Unnamed fields keep their previous values.
        assert_eq!(updated.name, "Ada");
        assert_eq!(updated.email, "a@b.com");
        assert_eq!(updated.company.as_deref(), Some("Analytical Engines"));

        let persisted = repo.load().await.unwrap().unwrap();
        assert_eq!(persisted, updated);
    }

    #[tokio::test]
    async fn test_update_profile_without_session_fails_loudly() {
        let (store, _repo) = memory_store();

        let err = store
            .update_profile(ProfileUpdate {
                name: Some("Nobody".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AicadError::NoSession));
    }

    #[tokio::test]
    async fn test_restore_observes_last_write_across_restart() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app_user.toml");

        // First process lifetime: login, then update.
        {
            let repo = Arc::new(TomlIdentityRepository::at_path(path.clone()));
            let store = SessionStore::new(repo);
            store.login(Identity::new("Ada", "a@b.com")).await.unwrap();
            store
                .update_profile(ProfileUpdate {
                    bio: Some("First programmer".to_string()),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        // Simulated restart: a fresh store over the same storage.
        let repo = Arc::new(TomlIdentityRepository::at_path(path));
        let store = SessionStore::new(repo);
        let restored = store.restore().await.unwrap().unwrap();

        assert_eq!(restored.email, "a@b.com");
        assert_eq!(restored.bio.as_deref(), Some("First programmer"));
        assert!(store.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_restore_after_logout_stays_logged_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app_user.toml");

        {
            let repo = Arc::new(TomlIdentityRepository::at_path(path.clone()));
            let store = SessionStore::new(repo);
            store.login(Identity::new("Ada", "a@b.com")).await.unwrap();
            store.logout().await.unwrap();
        }

        let repo = Arc::new(TomlIdentityRepository::at_path(path));
        let store = SessionStore::new(repo);
        assert!(store.restore().await.unwrap().is_none());
        assert!(!store.is_authenticated().await);
    }
}
