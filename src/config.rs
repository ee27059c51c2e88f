//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Storage
//!
//! ```bash
//! export DATA_FILE="data/profile.json"   # persist the profile as JSON
//! export UPLOAD_DIR="data/uploads"       # keep uploaded images on disk
//! ```
//!
//! Without `DATA_FILE` the profile lives in memory only. Without `UPLOAD_DIR`
//! uploaded images are inlined into the profile as `data:` URLs.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAX_UPLOAD_BYTES` - Image upload cap (default: 5 MiB)
//! - `ANALYTICS_WINDOW_DAYS` - Trailing analytics window (default: 30, max: 365)
//! - `ANALYTICS_SEED` - Seed for the synthetic analytics source
//! - `PROFILE_USERNAME`, `PROFILE_EMAIL`, `PROFILE_DISPLAY_NAME` - Owner of a
//!   fresh profile when no snapshot exists yet

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::utils::validation::MAX_IMAGE_BYTES;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// JSON snapshot location. `None` keeps the profile in memory.
    pub data_file: Option<PathBuf>,
    /// Directory for uploaded images, served under `/uploads`.
    /// `None` inlines images as data URLs.
    pub upload_dir: Option<PathBuf>,
    pub max_upload_bytes: usize,
    pub analytics_window_days: u32,
    /// Makes the synthetic analytics reproducible.
    pub analytics_seed: Option<u64>,

    // ── Initial profile owner ───────────────────────────────────────────────
    pub profile_username: String,
    pub profile_email: String,
    pub profile_display_name: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let data_file = non_empty_var("DATA_FILE").map(PathBuf::from);
        let upload_dir = non_empty_var("UPLOAD_DIR").map(PathBuf::from);

        let max_upload_bytes = parse_var("MAX_UPLOAD_BYTES")?.unwrap_or(MAX_IMAGE_BYTES);
        let analytics_window_days = parse_var("ANALYTICS_WINDOW_DAYS")?.unwrap_or(30);
        let analytics_seed = parse_var("ANALYTICS_SEED")?;

        let profile_username = env::var("PROFILE_USERNAME").unwrap_or_else(|_| "demo".to_string());
        let profile_email =
            env::var("PROFILE_EMAIL").unwrap_or_else(|_| "demo@example.com".to_string());
        let profile_display_name =
            env::var("PROFILE_DISPLAY_NAME").unwrap_or_else(|_| "Demo User".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            data_file,
            upload_dir,
            max_upload_bytes,
            analytics_window_days,
            analytics_seed,
            profile_username,
            profile_email,
            profile_display_name,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `max_upload_bytes` is 0 or above 5 MiB
    /// - `analytics_window_days` is outside 1-365
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.max_upload_bytes == 0 || self.max_upload_bytes > MAX_IMAGE_BYTES {
            anyhow::bail!(
                "MAX_UPLOAD_BYTES must be between 1 and {}, got {}",
                MAX_IMAGE_BYTES,
                self.max_upload_bytes
            );
        }

        if !(1..=365).contains(&self.analytics_window_days) {
            anyhow::bail!(
                "ANALYTICS_WINDOW_DAYS must be between 1 and 365, got {}",
                self.analytics_window_days
            );
        }

        Ok(())
    }

    /// Returns whether the profile survives restarts.
    pub fn is_persistent(&self) -> bool {
        self.data_file.is_some()
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match &self.data_file {
            Some(path) => tracing::info!("  Profile data: {}", path.display()),
            None => tracing::info!("  Profile data: in memory (not persisted)"),
        }
        match &self.upload_dir {
            Some(dir) => tracing::info!("  Uploads: {}", dir.display()),
            None => tracing::info!("  Uploads: inline data URLs"),
        }
        tracing::info!("  Max upload: {} bytes", self.max_upload_bytes);
        tracing::info!("  Analytics window: {} days", self.analytics_window_days);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    non_empty_var(name)
        .map(|v| {
            v.trim()
                .parse::<T>()
                .with_context(|| format!("{name} must be a number, got '{v}'"))
        })
        .transpose()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            data_file: None,
            upload_dir: None,
            max_upload_bytes: MAX_IMAGE_BYTES,
            analytics_window_days: 30,
            analytics_seed: None,
            profile_username: "demo".to_string(),
            profile_email: "demo@example.com".to_string(),
            profile_display_name: "Demo User".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();
        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:3000".to_string();

        // Test upload cap above the image limit
        config.max_upload_bytes = MAX_IMAGE_BYTES + 1;
        assert!(config.validate().is_err());

        config.max_upload_bytes = 1024;

        // Test analytics window bounds
        config.analytics_window_days = 0;
        assert!(config.validate().is_err());
        config.analytics_window_days = 366;
        assert!(config.validate().is_err());

        config.analytics_window_days = 7;
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATA_FILE");
            env::remove_var("UPLOAD_DIR");
            env::remove_var("MAX_UPLOAD_BYTES");
            env::remove_var("ANALYTICS_WINDOW_DAYS");
            env::remove_var("ANALYTICS_SEED");
        }

        let config = Config::from_env().unwrap();

        assert!(config.data_file.is_none());
        assert!(!config.is_persistent());
        assert_eq!(config.max_upload_bytes, MAX_IMAGE_BYTES);
        assert_eq!(config.analytics_window_days, 30);
    }

    #[test]
    #[serial]
    fn test_from_env_values() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATA_FILE", "/tmp/linkbio/profile.json");
            env::set_var("UPLOAD_DIR", "  ");
            env::set_var("ANALYTICS_WINDOW_DAYS", "14");
            env::set_var("ANALYTICS_SEED", "99");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(
            config.data_file,
            Some(PathBuf::from("/tmp/linkbio/profile.json"))
        );
        assert!(config.upload_dir.is_none());
        assert_eq!(config.analytics_window_days, 14);
        assert_eq!(config.analytics_seed, Some(99));

        // Cleanup
        unsafe {
            env::remove_var("DATA_FILE");
            env::remove_var("UPLOAD_DIR");
            env::remove_var("ANALYTICS_WINDOW_DAYS");
            env::remove_var("ANALYTICS_SEED");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_non_numeric() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("MAX_UPLOAD_BYTES", "lots");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("MAX_UPLOAD_BYTES"));

        // Cleanup
        unsafe {
            env::remove_var("MAX_UPLOAD_BYTES");
        }
    }
}
