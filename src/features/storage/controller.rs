//! Storage Page Controller
//!
//! Draft/commit logic for the external storage form. Field edits are
//! local; an explicit save commits the entire S3 block as one
//! sub-resource write and reports through the same transient status
//! mechanism as the other pages.

use crossbeam_channel::Sender;

use crate::domain::ServerConfig;
use crate::eventing::{AppEvent, StatusScope, schedule_status_reset};
use crate::services::ConfigApi;
use crate::state::{DraftSlot, SaveStatus, StatusSlot, StorageDraft, StorageEdit};

/// Controller for the storage settings page
pub struct StorageController<C> {
    api: C,
    event_tx: Sender<AppEvent>,
    draft: DraftSlot<StorageDraft>,
    status: StatusSlot,
    modified: bool,
}

impl<C: ConfigApi> StorageController<C> {
    pub fn new(api: C, event_tx: Sender<AppEvent>) -> Self {
        Self {
            api,
            event_tx,
            draft: DraftSlot::new(),
            status: StatusSlot::new(),
            modified: false,
        }
    }

    /// A canonical snapshot arrived; a new version rebuilds the draft and
    /// clears the dirty flag
    pub fn on_config_loaded(&mut self, config: &ServerConfig, version: u64) {
        if self.draft.on_snapshot(version, || StorageDraft::seed(config)) {
            self.modified = false;
        }
    }

    pub fn draft(&self) -> Option<&StorageDraft> {
        self.draft.get()
    }

    /// Whether unsaved edits exist (drives the save button)
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn status(&self) -> Option<&SaveStatus> {
        self.status.current()
    }

    /// Apply a single named-field edit to the draft. Local only.
    pub fn update_field(&mut self, edit: StorageEdit) {
        if let Some(draft) = self.draft.get_mut() {
            draft.apply(edit);
            self.modified = true;
        }
    }

    /// Commit the whole S3 block. An enabled block without an endpoint
    /// and bucket cannot work, so `enabled` is downgraded before the
    /// write rather than persisting a broken configuration.
    pub async fn save(&mut self) {
        let Some(draft) = self.draft.get_mut() else {
            return;
        };

        if draft.enabled && (draft.endpoint.trim().is_empty() || draft.bucket.trim().is_empty()) {
            tracing::info!("storage settings incomplete, disabling external storage");
            draft.enabled = false;
        }
        let block = draft.to_config();

        match self.api.update_storage(&block).await {
            Ok(()) => {
                self.modified = false;
                self.begin_status(SaveStatus::Success);
            }
            Err(err) => {
                tracing::error!("storage update failed: {err}");
                self.begin_status(SaveStatus::Error(err.user_message()));
            }
        }
    }

    fn begin_status(&mut self, status: SaveStatus) {
        let generation = self.status.set(status);
        schedule_status_reset(self.event_tx.clone(), StatusScope::Storage, generation);
    }

    /// Timer callback; only honored for the generation it was armed for
    pub fn on_status_expired(&mut self, generation: u64) {
        self.status.expire(generation);
    }
}
