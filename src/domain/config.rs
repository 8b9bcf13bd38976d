//! Server Configuration Snapshot
//!
//! Typed view of the canonical configuration subtrees as read from the
//! admin API. Snapshots are owned by the server; the core only reads them
//! and seeds page drafts from them.

use serde::{Deserialize, Serialize};

/// Canonical server configuration as last fetched from the admin API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    /// Federation (fediverse) settings
    pub federation: FederationConfig,
    /// Directory listing settings, home of the public instance URL
    pub directory: DirectoryConfig,
    /// External S3 storage settings
    pub s3: S3StorageConfig,
    /// Usernames reserved by the server; recomputed server-side when the
    /// blocked-domain list changes
    pub forbidden_usernames: Vec<String>,
}

/// Federation settings subtree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FederationConfig {
    /// Whether federation is enabled at all
    pub enabled: bool,
    /// Do not share activity publicly; followers must be approved
    pub is_private: bool,
    /// The server's fediverse account name
    pub username: String,
    /// Message posted to followers when a stream goes live
    pub go_live_message: String,
    /// Show follower/engagement counts on the public page
    pub show_engagement: bool,
    /// Domains this server refuses to federate with
    pub blocked_domains: Vec<String>,
}

/// Directory settings subtree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectoryConfig {
    /// Publicly reachable base URL of this instance
    pub instance_url: String,
}

/// External S3 storage settings, committed as one block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct S3StorageConfig {
    /// Whether external storage is used for serving video
    pub enabled: bool,
    /// S3 API endpoint URL
    pub endpoint: String,
    /// Access key ID
    pub access_key: String,
    /// Secret access key
    pub secret: String,
    /// Bucket name
    pub bucket: String,
    /// Bucket region
    pub region: String,
    /// Optional CDN/alternate endpoint used for serving
    pub serving_endpoint: Option<String>,
    /// Optional canned ACL applied to uploaded objects
    pub acl: Option<String>,
    /// Use path-style addressing instead of virtual-hosted style
    pub force_path_style: bool,
}
