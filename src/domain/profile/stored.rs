//! Versioned persistence envelope for the profile blob.
//!
//! The durable store holds one JSON document. Version 1 wraps the profile
//! in an envelope carrying a schema version; blobs written before the
//! envelope existed are a bare profile object and are migrated on read.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::UserProfile;

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors decoding or encoding the persisted profile document.
#[derive(Debug, Clone, Error)]
pub enum ProfileCodecError {
    #[error("malformed profile document: {0}")]
    Malformed(String),

    #[error("unsupported profile schema version: {0}")]
    UnsupportedVersion(u32),
}

/// The on-disk document: schema version plus the profile record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub version: u32,
    pub profile: UserProfile,
}

impl StoredProfile {
    /// Wraps a profile in the current-version envelope.
    pub fn current(profile: UserProfile) -> Self {
        Self {
            version: SCHEMA_VERSION,
            profile,
        }
    }

    /// Serializes the envelope to the persisted JSON form.
    pub fn to_json(&self) -> Result<String, ProfileCodecError> {
        serde_json::to_string(self).map_err(|e| ProfileCodecError::Malformed(e.to_string()))
    }

    /// Decodes a persisted document into a profile.
    ///
    /// Accepts the versioned envelope and, as a migration path, a bare
    /// legacy profile object with no `version` field. Versions newer than
    /// [`SCHEMA_VERSION`] are rejected rather than guessed at.
    pub fn decode(raw: &str) -> Result<UserProfile, ProfileCodecError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| ProfileCodecError::Malformed(e.to_string()))?;

        if value.get("version").is_none() {
            // Pre-envelope blob: the profile object itself.
            return serde_json::from_value(value)
                .map_err(|e| ProfileCodecError::Malformed(e.to_string()));
        }

        let stored: StoredProfile = serde_json::from_value(value)
            .map_err(|e| ProfileCodecError::Malformed(e.to_string()))?;

        if stored.version > SCHEMA_VERSION {
            return Err(ProfileCodecError::UnsupportedVersion(stored.version));
        }

        Ok(stored.profile)
    }
}
