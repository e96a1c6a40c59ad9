//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `PATHFINDER` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use pathfinder::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Profile stored at {}", config.storage.profile_path.display());
//! ```

mod error;
mod mentor;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use mentor::MentorConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Mentor provider configuration (Gemini)
    #[serde(default)]
    pub mentor: MentorConfig,

    /// Profile storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `PATHFINDER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PATHFINDER__MENTOR__GEMINI_API_KEY=...` -> `mentor.gemini_api_key`
    /// - `PATHFINDER__STORAGE__PROFILE_PATH=...` -> `storage.profile_path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PATHFINDER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.mentor.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("PATHFINDER__MENTOR__GEMINI_API_KEY", "test-key");
    }

    fn clear_env() {
        env::remove_var("PATHFINDER__MENTOR__GEMINI_API_KEY");
        env::remove_var("PATHFINDER__MENTOR__MODEL");
        env::remove_var("PATHFINDER__MENTOR__TIMEOUT_SECS");
        env::remove_var("PATHFINDER__STORAGE__PROFILE_PATH");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.mentor.gemini_api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_apply_without_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.mentor.model, "gemini-3-flash-preview");
        assert_eq!(config.mentor.timeout_secs, 60);
        assert_eq!(
            config.storage.profile_path.to_str().unwrap(),
            "./data/profile.json"
        );
    }

    #[test]
    fn test_custom_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PATHFINDER__MENTOR__TIMEOUT_SECS", "15");
        env::set_var("PATHFINDER__STORAGE__PROFILE_PATH", "/tmp/p.json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.mentor.timeout_secs, 15);
        assert_eq!(config.storage.profile_path.to_str().unwrap(), "/tmp/p.json");
    }
}
