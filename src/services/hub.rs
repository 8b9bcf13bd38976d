//! Config Hub
//!
//! Owns the app event channel and performs the global snapshot reads.
//! Each successful load is assigned a new, monotonically increasing
//! snapshot version, the identity the draft slots use to decide whether
//! to re-seed. Controllers never read ambient state; they get the
//! snapshot handed to them through `AppEvent::ConfigLoaded`.

use crossbeam_channel::{Receiver, Sender};

use crate::error::Result;
use crate::eventing::AppEvent;
use crate::services::ConfigApi;

/// Central hub: shared API handle, event channel, snapshot versioning
pub struct ConfigHub<C> {
    api: C,
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
    version: u64,
}

impl<C: ConfigApi> ConfigHub<C> {
    pub fn new(api: C) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            api,
            tx,
            rx,
            version: 0,
        }
    }

    /// Event receiver for the shell's loop. Events from all background
    /// tasks are multiplexed into this single channel.
    pub fn events(&self) -> Receiver<AppEvent> {
        self.rx.clone()
    }

    /// Sender handed to controllers and expiry timers
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    /// Version of the most recently loaded snapshot
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Fetch the canonical snapshot and broadcast it under a fresh
    /// version. Local drafts re-seed (discarding their edits) when they
    /// see the new version; last writer wins.
    pub async fn refresh_config(&mut self) -> Result<()> {
        let config = self.api.fetch_config().await?;
        self.version += 1;
        tracing::info!(version = self.version, "server config loaded");

        let _ = self.tx.send(AppEvent::ConfigLoaded {
            config,
            version: self.version,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServerConfig;
    use crate::error::Error;
    use crate::services::BlocklistUpdate;
    use serde_json::Value;

    struct StaticApi;

    impl ConfigApi for StaticApi {
        async fn fetch_config(&self) -> Result<ServerConfig> {
            Ok(ServerConfig::default())
        }

        async fn update_field(&self, _path: &str, _value: Value) -> Result<()> {
            Err(Error::Invalid {
                message: "not used".to_string(),
            })
        }

        async fn update_blocked_domains(&self, _domains: &[String]) -> Result<BlocklistUpdate> {
            Err(Error::Invalid {
                message: "not used".to_string(),
            })
        }

        async fn update_storage(
            &self,
            _storage: &crate::domain::S3StorageConfig,
        ) -> Result<()> {
            Err(Error::Invalid {
                message: "not used".to_string(),
            })
        }

        async fn send_outbox_message(&self, _content: &str) -> Result<()> {
            Err(Error::Invalid {
                message: "not used".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn refresh_bumps_version_and_broadcasts() {
        let mut hub = ConfigHub::new(StaticApi);
        let events = hub.events();

        hub.refresh_config().await.expect("refresh");
        hub.refresh_config().await.expect("refresh");

        assert_eq!(hub.version(), 2);

        let first = events.try_recv().expect("event");
        assert!(matches!(first, AppEvent::ConfigLoaded { version: 1, .. }));
        let second = events.try_recv().expect("event");
        assert!(matches!(second, AppEvent::ConfigLoaded { version: 2, .. }));
    }
}
