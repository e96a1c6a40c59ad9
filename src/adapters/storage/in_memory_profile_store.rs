//! In-Memory Profile Store Adapter
//!
//! Holds the blob in memory. Used by tests and by sessions that run
//! without durable storage. Errors can be injected to exercise the
//! degraded paths.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::profile::UserProfile;
use crate::ports::{ProfileStore, ProfileStoreError};

/// In-memory storage for the user profile.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    blob: Arc<RwLock<Option<UserProfile>>>,
    /// Errors returned by upcoming saves, consumed in order.
    save_failures: Arc<RwLock<VecDeque<ProfileStoreError>>>,
    save_count: Arc<RwLock<u32>>,
}

impl InMemoryProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds a profile, as if a previous
    /// session had saved it.
    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            blob: Arc::new(RwLock::new(Some(profile))),
            ..Self::default()
        }
    }

    /// Queues an error for the next save call.
    ///
    /// Multiple queued errors fail consecutive saves; once the queue is
    /// drained, saves succeed again.
    pub async fn fail_next_save(&self, error: ProfileStoreError) {
        self.save_failures.write().await.push_back(error);
    }

    /// Number of save calls made, successful or not.
    pub async fn save_count(&self) -> u32 {
        *self.save_count.read().await
    }

    /// Direct read of the stored blob, for assertions.
    pub async fn stored(&self) -> Option<UserProfile> {
        self.blob.read().await.clone()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn save(&self, profile: &UserProfile) -> Result<(), ProfileStoreError> {
        *self.save_count.write().await += 1;

        if let Some(error) = self.save_failures.write().await.pop_front() {
            return Err(error);
        }

        *self.blob.write().await = Some(profile.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<UserProfile>, ProfileStoreError> {
        Ok(self.blob.read().await.clone())
    }

    async fn clear(&self) -> Result<(), ProfileStoreError> {
        *self.blob.write().await = None;
        Ok(())
    }

    async fn exists(&self) -> Result<bool, ProfileStoreError> {
        Ok(self.blob.read().await.is_some())
    }
}
