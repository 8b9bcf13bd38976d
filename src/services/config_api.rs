//! Config API Port
//!
//! Abstraction over the remote configuration API: reading the canonical
//! snapshot, pushing single-field or single-group updates back, and the
//! fire-and-forget outbound post. Controllers are generic over this trait
//! so tests can substitute a recording implementation.

use serde_json::Value;

use crate::domain::{S3StorageConfig, ServerConfig};
use crate::error::Result;

/// Admin API endpoint paths. Payload shapes are defined by the server;
/// the core treats paths and values as opaque.
pub mod paths {
    pub const SERVER_CONFIG: &str = "/api/admin/serverconfig";
    pub const FEDERATION_ENABLED: &str = "/api/admin/config/federation/enable";
    pub const FEDERATION_PRIVATE: &str = "/api/admin/config/federation/private";
    pub const FEDERATION_USERNAME: &str = "/api/admin/config/federation/username";
    pub const FEDERATION_LIVE_MESSAGE: &str = "/api/admin/config/federation/livemessage";
    pub const FEDERATION_SHOW_ENGAGEMENT: &str = "/api/admin/config/federation/showengagement";
    pub const FEDERATION_BLOCKED_DOMAINS: &str = "/api/admin/config/federation/blockdomains";
    pub const DIRECTORY_INSTANCE_URL: &str = "/api/admin/config/directory/instanceurl";
    pub const STORAGE_S3: &str = "/api/admin/config/s3";
    pub const OUTBOX_SEND: &str = "/api/admin/federation/send";
}

/// Server response to a blocked-domain list replacement.
///
/// The server recomputes its reserved usernames as a consequence of the
/// list change and returns them in the same payload.
#[derive(Debug, Clone, Default)]
pub struct BlocklistUpdate {
    pub forbidden_usernames: Option<Vec<String>>,
}

/// Port to the remote configuration API
#[allow(async_fn_in_trait)]
pub trait ConfigApi {
    /// Fetch the current canonical configuration subtrees
    async fn fetch_config(&self) -> Result<ServerConfig>;

    /// Persist one named field
    async fn update_field(&self, path: &str, value: Value) -> Result<()>;

    /// Replace the blocked-domain list wholesale
    async fn update_blocked_domains(&self, domains: &[String]) -> Result<BlocklistUpdate>;

    /// Persist the S3 storage block as one sub-resource
    async fn update_storage(&self, storage: &S3StorageConfig) -> Result<()>;

    /// Post a message to followers. Fire-and-forget: nothing is persisted
    /// client-side beyond a transient status.
    async fn send_outbox_message(&self, content: &str) -> Result<()>;
}
