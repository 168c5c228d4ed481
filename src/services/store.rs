use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::config::{StoreBackend, StoreSettings};
use crate::models::Profile;
use crate::services::postgres::PostgresProfileStore;

/// Immutable, ordered view of the store handed to one search
pub type ProfileSnapshot = Arc<Vec<Profile>>;

/// Errors that can occur when reading profiles
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("{0}")]
    Unavailable(String),
}

/// Profiles held in memory, loaded once
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    profiles: ProfileSnapshot,
}

impl MemoryProfileStore {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Arc::new(profiles),
        }
    }

    /// Load a JSON array of profile records
    pub async fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let profiles: Vec<Profile> = serde_json::from_slice(&bytes)?;

        tracing::info!("Loaded {} profiles from {}", profiles.len(), path.display());

        Ok(Self::new(profiles))
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        Arc::clone(&self.profiles)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Profile store backing the search endpoints
///
/// Every search takes its own [`ProfileSnapshot`], so concurrent searches
/// never share an iteration cursor and see a consistent view even while a
/// backend refreshes.
pub enum ProfileStore {
    Memory(MemoryProfileStore),
    Postgres(PostgresProfileStore),
    /// Backend failed to initialize; every read reports the reason
    Unavailable(String),
}

impl ProfileStore {
    /// Build the configured backend
    ///
    /// Initialization failures do not abort startup: the store degrades to
    /// [`ProfileStore::Unavailable`] and searches fail with a retryable error.
    pub async fn from_settings(settings: &StoreSettings) -> Self {
        let store = match settings.backend {
            StoreBackend::File => MemoryProfileStore::from_json_file(&settings.dataset_path)
                .await
                .map(ProfileStore::Memory),
            StoreBackend::Postgres => PostgresProfileStore::from_settings(settings)
                .await
                .map(ProfileStore::Postgres),
        };

        store.unwrap_or_else(|e| {
            tracing::error!("Failed to initialize {:?} profile store: {}", settings.backend, e);
            ProfileStore::Unavailable(format!("Dataset not loaded: {}", e))
        })
    }

    pub async fn snapshot(&self) -> Result<ProfileSnapshot, StoreError> {
        match self {
            ProfileStore::Memory(store) => Ok(store.snapshot()),
            ProfileStore::Postgres(store) => store.snapshot().await,
            ProfileStore::Unavailable(reason) => Err(StoreError::Unavailable(reason.clone())),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            ProfileStore::Memory(_) => "memory",
            ProfileStore::Postgres(_) => "postgres",
            ProfileStore::Unavailable(_) => "unavailable",
        }
    }
}

impl From<MemoryProfileStore> for ProfileStore {
    fn from(store: MemoryProfileStore) -> Self {
        ProfileStore::Memory(store)
    }
}
