//! Connection Profiles
//!
//! Admin endpoint configuration and persistence. Profiles live in a TOML
//! file under the platform config directory; access tokens are stored
//! encrypted.

use crate::error::{Error, Result};
use crate::helpers::{decrypt, encrypt, get_or_create_config_dir};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;
use url::Url;
use uuid::Uuid;

/// One saved admin endpoint
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionProfile {
    /// Unique identifier (UUID)
    pub id: String,
    /// Profile name (user-visible)
    pub name: String,
    /// Base URL of the server, e.g. "https://live.example.com"
    pub server_url: String,
    /// Admin access token (encrypted storage)
    pub access_token: Option<String>,
    /// Last update timestamp (RFC3339)
    pub updated_at: Option<String>,
}

/// TOML wrapper structure for the profile list
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct ConnectionProfiles {
    profiles: Vec<ConnectionProfile>,
}

impl ConnectionProfile {
    /// Create a fresh profile with a generated id
    pub fn new(name: impl Into<String>, server_url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            server_url: server_url.into(),
            access_token: None,
            updated_at: None,
        }
    }

    /// Parse the configured server URL into a base for API requests
    pub fn api_base(&self) -> Result<Url> {
        Url::parse(&self.server_url).map_err(|e| Error::Invalid {
            message: format!("Bad server URL {}: {e}", self.server_url),
        })
    }

    /// Generate display name (e.g. "Studio (live.example.com)")
    pub fn display_name(&self) -> String {
        let host = self
            .api_base()
            .ok()
            .and_then(|url| url.host_str().map(|h| h.to_string()))
            .unwrap_or_else(|| self.server_url.clone());
        if self.name.is_empty() {
            host
        } else {
            format!("{} ({host})", self.name)
        }
    }
}

/// Get or create the profile file path
fn get_profile_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("connections.toml");

    #[cfg(debug_assertions)]
    info!("Connection profile file: {}", path.display());

    if !path.exists() {
        std::fs::write(&path, "")?;
    }

    Ok(path)
}

/// Load all saved profiles, decrypting their tokens
pub fn get_profiles() -> Result<Vec<ConnectionProfile>> {
    let path = get_profile_path()?;
    let value = std::fs::read_to_string(&path)?;

    if value.trim().is_empty() {
        return Ok(vec![]);
    }

    let wrapper: ConnectionProfiles = toml::from_str(&value)?;
    let mut profiles = wrapper.profiles;

    for profile in profiles.iter_mut() {
        if let Some(token) = &profile.access_token {
            if !token.is_empty() {
                profile.access_token = Some(decrypt(token)?);
            }
        }
    }

    Ok(profiles)
}

/// Persist the full profile list, encrypting tokens on the way out
pub fn save_profiles(profiles: &[ConnectionProfile]) -> Result<()> {
    let mut stored = profiles.to_vec();
    for profile in stored.iter_mut() {
        if let Some(token) = &profile.access_token {
            if !token.is_empty() {
                profile.access_token = Some(encrypt(token)?);
            }
        }
        profile.updated_at = Some(chrono::Utc::now().to_rfc3339());
    }

    let wrapper = ConnectionProfiles { profiles: stored };
    let value = toml::to_string_pretty(&wrapper)?;
    std::fs::write(get_profile_path()?, value)?;
    Ok(())
}

/// Insert or replace a profile by id
pub fn upsert_profile(profile: ConnectionProfile) -> Result<()> {
    let mut profiles = get_profiles()?;
    match profiles.iter_mut().find(|p| p.id == profile.id) {
        Some(existing) => *existing = profile,
        None => profiles.push(profile),
    }
    save_profiles(&profiles)
}

/// Delete a profile by id
pub fn delete_profile(id: &str) -> Result<()> {
    let mut profiles = get_profiles()?;
    profiles.retain(|p| p.id != id);
    save_profiles(&profiles)
}
