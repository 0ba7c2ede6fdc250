//! Configuration management for the URI converter.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Everything the converter can be
//! told from the outside lives here: the pinned URI kind, the output mode,
//! the inter-batch delay, authentication material and the API endpoints.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

use crate::error::{ConvertError, Result};

/// Loads environment variables from `.env` files.
///
/// Checks the current working directory first, then the platform-specific
/// local data directory under `spuricli/.env`, creating that directory if
/// needed so users have a place to drop credentials. A missing file is not
/// an error; plain environment variables are a complete configuration.
///
/// # Directory Structure
///
/// The data-directory `.env` is looked up in:
/// - Linux: `~/.local/share/spuricli/.env`
/// - macOS: `~/Library/Application Support/spuricli/.env`
/// - Windows: `%LOCALAPPDATA%/spuricli/.env`
///
/// # Errors
///
/// Returns an error only if the data directory cannot be created.
pub async fn load_env() -> crate::Res<()> {
    dotenv::dotenv().ok();

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spuricli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    dotenv::from_path(path).ok();
    Ok(())
}

/// Returns the URI kind pinned by `SPOTIFY_URI_TYPE`, if set.
///
/// The raw string is returned unvalidated; validation against the kind
/// enumeration happens at session setup so a bad value becomes a usage
/// error instead of a panic.
pub fn uri_kind() -> Option<String> {
    env::var("SPOTIFY_URI_TYPE").ok()
}

/// Returns whether CSV output mode is toggled via `SPOTIFY_CSV`.
///
/// Presence alone enables the mode; the value is ignored.
pub fn csv_mode() -> bool {
    env::var("SPOTIFY_CSV").is_ok()
}

/// Returns the inter-batch delay in seconds from `SPOTIFY_BATCH_DELAY`.
///
/// # Errors
///
/// A set but non-numeric value is a usage error.
pub fn batch_delay() -> Result<Option<u64>> {
    match env::var("SPOTIFY_BATCH_DELAY") {
        Ok(v) => v.parse::<u64>().map(Some).map_err(|_| {
            ConvertError::Usage(format!(
                "SPOTIFY_BATCH_DELAY must be a number of seconds, got '{v}'"
            ))
        }),
        Err(_) => Ok(None),
    }
}

/// Returns a pre-issued bearer token from `SPOTIFY_ACCESS_TOKEN`, if set.
///
/// When present, no client-credentials exchange is performed.
pub fn access_token() -> Option<String> {
    env::var("SPOTIFY_ACCESS_TOKEN").ok()
}

/// Returns the Spotify API client ID from `SPOTIFY_CLIENT_ID`, if set.
pub fn spotify_client_id() -> Option<String> {
    env::var("SPOTIFY_CLIENT_ID").ok()
}

/// Returns the Spotify API client secret from `SPOTIFY_CLIENT_SECRET`, if set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> Option<String> {
    env::var("SPOTIFY_CLIENT_SECRET").ok()
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL` and falls back to the public endpoint, so a
/// zero-setup run works against the real API while tests and proxies can
/// point elsewhere.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth token endpoint.
///
/// Reads `SPOTIFY_API_TOKEN_URL` with the public accounts endpoint as the
/// default. Used for the client-credentials exchange.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}
