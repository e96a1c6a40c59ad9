//! Profile Store Port - Interface for the durable profile blob.
//!
//! One logical key holds the whole serialized profile; absence of the key
//! means an unauthenticated session. Writes always replace the blob
//! wholesale.

use async_trait::async_trait;

use crate::domain::profile::{ProfileCodecError, UserProfile};

/// Errors that can occur during profile storage operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("failed to serialize profile: {0}")]
    SerializationFailed(String),

    #[error("failed to deserialize profile: {0}")]
    DeserializationFailed(String),

    #[error("unsupported profile schema version: {0}")]
    UnsupportedVersion(u32),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl ProfileStoreError {
    /// True for load failures the session treats as "no stored profile"
    /// rather than surfacing: a corrupt blob or a schema this build does
    /// not understand.
    pub fn is_unreadable_blob(&self) -> bool {
        matches!(
            self,
            ProfileStoreError::DeserializationFailed(_) | ProfileStoreError::UnsupportedVersion(_)
        )
    }
}

impl From<ProfileCodecError> for ProfileStoreError {
    fn from(err: ProfileCodecError) -> Self {
        match err {
            ProfileCodecError::Malformed(reason) => ProfileStoreError::DeserializationFailed(reason),
            ProfileCodecError::UnsupportedVersion(v) => ProfileStoreError::UnsupportedVersion(v),
        }
    }
}

/// Port for persisting and loading the single user profile.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Replaces the stored blob with this profile.
    ///
    /// # Errors
    /// Returns `ProfileStoreError` if serialization or the write fails.
    async fn save(&self, profile: &UserProfile) -> Result<(), ProfileStoreError>;

    /// Loads the stored profile.
    ///
    /// Returns `Ok(None)` when no blob exists. A blob that exists but
    /// cannot be decoded is an error; callers decide whether to treat it
    /// as absent (see [`ProfileStoreError::is_unreadable_blob`]).
    async fn load(&self) -> Result<Option<UserProfile>, ProfileStoreError>;

    /// Removes the stored blob. No-op when absent.
    async fn clear(&self) -> Result<(), ProfileStoreError>;

    /// Returns true if a blob is present.
    async fn exists(&self) -> Result<bool, ProfileStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_errors_map_to_store_errors() {
        let err: ProfileStoreError = ProfileCodecError::Malformed("bad json".to_string()).into();
        assert!(matches!(err, ProfileStoreError::DeserializationFailed(_)));

        let err: ProfileStoreError = ProfileCodecError::UnsupportedVersion(9).into();
        assert!(matches!(err, ProfileStoreError::UnsupportedVersion(9)));
    }

    #[test]
    fn unreadable_blob_classification() {
        assert!(ProfileStoreError::DeserializationFailed("x".into()).is_unreadable_blob());
        assert!(ProfileStoreError::UnsupportedVersion(2).is_unreadable_blob());
        assert!(!ProfileStoreError::Io("disk".into()).is_unreadable_blob());
        assert!(!ProfileStoreError::Unavailable("quota".into()).is_unreadable_blob());
    }

    #[test]
    fn errors_display_their_cause() {
        let err = ProfileStoreError::SerializationFailed("loop".to_string());
        assert!(err.to_string().contains("serialize"));
        let err = ProfileStoreError::UnsupportedVersion(3);
        assert!(err.to_string().contains('3'));
    }
}
