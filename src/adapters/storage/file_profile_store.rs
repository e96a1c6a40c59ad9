//! File-based Profile Store Adapter
//!
//! Persists the profile as a single JSON document on disk. Every save
//! rewrites the whole file; there is no partial patching.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::profile::{StoredProfile, UserProfile};
use crate::ports::{ProfileStore, ProfileStoreError};

/// File-backed storage for the user profile.
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    /// Creates a store persisting to the given file path.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileProfileStore::new("./data/profile.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<(), ProfileStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ProfileStoreError::Io(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for FileProfileStore {
    async fn save(&self, profile: &UserProfile) -> Result<(), ProfileStoreError> {
        self.ensure_parent_dir().await?;

        let json = StoredProfile::current(profile.clone())
            .to_json()
            .map_err(|e| ProfileStoreError::SerializationFailed(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| ProfileStoreError::Io(e.to_string()))
    }

    async fn load(&self) -> Result<Option<UserProfile>, ProfileStoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ProfileStoreError::Io(e.to_string()))?;

        let profile = StoredProfile::decode(&raw)?;
        Ok(Some(profile))
    }

    async fn clear(&self) -> Result<(), ProfileStoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .await
                .map_err(|e| ProfileStoreError::Io(e.to_string()))?;
        }
        Ok(())
    }

    async fn exists(&self) -> Result<bool, ProfileStoreError> {
        Ok(self.path.exists())
    }
}
