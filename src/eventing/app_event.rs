//! AppEvent - Application Event Enum
//!
//! All state transitions run to completion on the shell's event loop.
//! Anything that originates outside a user interaction (a status expiry
//! timer firing, a fresh config snapshot arriving) is delivered as an
//! `AppEvent` and routed into the matching controller callback.

use crossbeam_channel::Sender;

use crate::constants::STATUS_RESET_TIMEOUT;
use crate::domain::ServerConfig;

/// Which commit-reporting surface a transient status belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusScope {
    /// Blocked-domain list on the federation page
    Blocklist,
    /// Whole-block save on the storage page
    Storage,
    /// Outbound post composer
    Outbox,
}

/// Events for background-task -> core-loop communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A fresh canonical snapshot was loaded; `version` is its identity
    /// for draft re-seeding
    ConfigLoaded { config: ServerConfig, version: u64 },

    /// A transient status display window elapsed. Only honored by the
    /// owning controller if `generation` still matches.
    StatusExpired { scope: StatusScope, generation: u64 },

    /// The server recomputed its reserved usernames as a side effect of a
    /// blocked-domain change
    ForbiddenUsernamesRefreshed { usernames: Vec<String> },
}

/// Arm the expiry timer for a transient status.
///
/// The task captures the status generation; the receiving controller
/// ignores the event if a newer status has superseded it in the meantime.
pub fn schedule_status_reset(tx: Sender<AppEvent>, scope: StatusScope, generation: u64) {
    tokio::spawn(async move {
        tokio::time::sleep(STATUS_RESET_TIMEOUT).await;
        let _ = tx.send(AppEvent::StatusExpired { scope, generation });
    });
}
