//! Profile storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Profile storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the file holding the serialized profile
    #[serde(default = "default_profile_path")]
    pub profile_path: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.profile_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyProfilePath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            profile_path: default_profile_path(),
        }
    }
}

fn default_profile_path() -> PathBuf {
    PathBuf::from("./data/profile.json")
}
