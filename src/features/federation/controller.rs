//! Federation Page Controller
//!
//! Draft/commit logic for the federation settings form: local field
//! edits, the confirmation gate on the enable toggle, the instance-URL
//! dependent rule, and the blocked-domain list editor with whole-list
//! commits and transient feedback.

use crossbeam_channel::Sender;
use serde_json::Value;

use crate::domain::ServerConfig;
use crate::error::Result;
use crate::eventing::{AppEvent, StatusScope, schedule_status_reset};
use crate::helpers::{is_secure_url, normalize_domain};
use crate::services::{ConfigApi, paths};
use crate::state::{
    ConfirmGate, DraftSlot, FederationDraft, FederationEdit, FederationField, GateOutcome,
    GateState, SaveStatus, StatusSlot,
};

/// Controller for the federation settings page
pub struct FederationController<C> {
    api: C,
    event_tx: Sender<AppEvent>,
    draft: DraftSlot<FederationDraft>,
    gate: ConfirmGate,
    blocklist_status: StatusSlot,
    forbidden_usernames: Vec<String>,
}

impl<C: ConfigApi> FederationController<C> {
    pub fn new(api: C, event_tx: Sender<AppEvent>) -> Self {
        Self {
            api,
            event_tx,
            draft: DraftSlot::new(),
            gate: ConfirmGate::new(),
            blocklist_status: StatusSlot::new(),
            forbidden_usernames: Vec::new(),
        }
    }

    /// A canonical snapshot arrived. Re-seeds the draft when the version
    /// is new, discarding local edits.
    pub fn on_config_loaded(&mut self, config: &ServerConfig, version: u64) {
        self.draft.on_snapshot(version, || FederationDraft::seed(config));
        self.forbidden_usernames = config.forbidden_usernames.clone();
    }

    // ==================== Render State ====================

    /// The current draft; `None` until the first snapshot arrives, in
    /// which case the page renders a loading state
    pub fn draft(&self) -> Option<&FederationDraft> {
        self.draft.get()
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    /// Transient status of the most recent blocked-domain commit
    pub fn blocklist_status(&self) -> Option<&SaveStatus> {
        self.blocklist_status.current()
    }

    /// Usernames the server reserves; refreshed when the blocklist changes
    pub fn forbidden_usernames(&self) -> &[String] {
        &self.forbidden_usernames
    }

    /// Render-time dependent rule: the enable toggle is only operable
    /// while the instance URL is present and uses https
    pub fn can_enable_federation(&self) -> bool {
        self.draft
            .get()
            .is_some_and(|draft| is_secure_url(&draft.instance_url))
    }

    // ==================== Local Edits ====================

    /// Apply a single named-field edit to the draft. Local only; nothing
    /// is validated here and nothing reaches the remote.
    pub fn update_field(&mut self, edit: FederationEdit) {
        if let Some(draft) = self.draft.get_mut() {
            draft.apply(edit);
        }
    }

    /// Route a requested enable value through the confirmation gate:
    /// enabling opens the gate and leaves the draft untouched, disabling
    /// is applied directly.
    pub fn set_enabled(&mut self, requested: bool) {
        match self.gate.request(requested) {
            GateOutcome::Apply(value) => self.update_field(FederationEdit::Enabled(value)),
            GateOutcome::Pending => {}
        }
    }

    /// Resolve the open confirmation gate. Accepting writes the requested
    /// value into the draft; cancelling reverts the toggle to off.
    pub fn resolve_gate(&mut self, accept: bool) {
        if let Some(value) = self.gate.resolve(accept) {
            self.update_field(FederationEdit::Enabled(value));
        }
    }

    // ==================== Commits ====================

    /// Push the current draft value of one field to the remote
    pub async fn submit_field(&self, field: FederationField) -> Result<()> {
        let Some(draft) = self.draft.get() else {
            return Ok(());
        };
        let (path, value) = field_payload(field, draft);
        self.api.update_field(path, value).await
    }

    /// Submit the instance URL, then enforce the dependent rule: an empty
    /// or non-https URL force-disables federation, in the draft and on
    /// the server, regardless of what the user had chosen.
    pub async fn submit_instance_url(&mut self) -> Result<()> {
        let Some(draft) = self.draft.get() else {
            return Ok(());
        };
        let url = draft.instance_url.clone();

        let submitted = self
            .api
            .update_field(paths::DIRECTORY_INSTANCE_URL, Value::String(url.clone()))
            .await;

        let enabled = self.draft.get().is_some_and(|d| d.enabled);
        if !is_secure_url(&url) && enabled {
            tracing::info!("instance URL no longer valid, disabling federation");
            if let Some(draft) = self.draft.get_mut() {
                draft.enabled = false;
            }
            if let Err(err) = self
                .api
                .update_field(paths::FEDERATION_ENABLED, Value::Bool(false))
                .await
            {
                // The local state is already safe; the server keeps its
                // stale flag until the next successful write
                tracing::warn!("failed to disable federation remotely: {err}");
            }
        }

        submitted
    }

    // ==================== Blocked Domains ====================

    /// Append a normalized entry to the blocked-domain list and commit
    /// the whole list. Duplicates are kept; the list is a plain ordered
    /// sequence.
    pub async fn add_blocked_domain(&mut self, raw: &str) {
        let Some(draft) = self.draft.get_mut() else {
            return;
        };
        draft.blocked_domains.push(normalize_domain(raw));
        self.commit_blocked_domains().await;
    }

    /// Remove the entry at `index` (order of the rest preserved) and
    /// commit the whole list
    pub async fn remove_blocked_domain(&mut self, index: usize) {
        let Some(draft) = self.draft.get_mut() else {
            return;
        };
        if index >= draft.blocked_domains.len() {
            tracing::warn!(index, "blocked-domain index out of range");
            return;
        }
        draft.blocked_domains.remove(index);
        self.commit_blocked_domains().await;
    }

    /// Whole-list replacement commit. On failure the local list is left
    /// in its optimistic state under the error banner; no rollback.
    async fn commit_blocked_domains(&mut self) {
        let Some(draft) = self.draft.get() else {
            return;
        };
        let domains = draft.blocked_domains.clone();

        match self.api.update_blocked_domains(&domains).await {
            Ok(update) => {
                if let Some(usernames) = update.forbidden_usernames {
                    self.forbidden_usernames = usernames.clone();
                    let _ = self
                        .event_tx
                        .send(AppEvent::ForbiddenUsernamesRefreshed { usernames });
                }
                self.begin_status(SaveStatus::Success);
            }
            Err(err) => {
                tracing::error!("blocked-domain update failed: {err}");
                self.begin_status(SaveStatus::Error(err.user_message()));
            }
        }
    }

    fn begin_status(&mut self, status: SaveStatus) {
        let generation = self.blocklist_status.set(status);
        schedule_status_reset(self.event_tx.clone(), StatusScope::Blocklist, generation);
    }

    /// Timer callback: clears the blocklist status only if it is still
    /// the one the timer was armed for
    pub fn on_status_expired(&mut self, generation: u64) {
        self.blocklist_status.expire(generation);
    }
}

fn field_payload(field: FederationField, draft: &FederationDraft) -> (&'static str, Value) {
    match field {
        FederationField::Enabled => (paths::FEDERATION_ENABLED, Value::Bool(draft.enabled)),
        FederationField::IsPrivate => (paths::FEDERATION_PRIVATE, Value::Bool(draft.is_private)),
        FederationField::Username => (
            paths::FEDERATION_USERNAME,
            Value::String(draft.username.clone()),
        ),
        FederationField::GoLiveMessage => (
            paths::FEDERATION_LIVE_MESSAGE,
            Value::String(draft.go_live_message.clone()),
        ),
        FederationField::ShowEngagement => (
            paths::FEDERATION_SHOW_ENGAGEMENT,
            Value::Bool(draft.show_engagement),
        ),
    }
}
