//! Outbox Controller
//!
//! Composer for the fire-and-forget post to followers. Nothing is
//! persisted client-side; the only state is the composed content, a
//! pending flag, and the transient outcome status.

use crossbeam_channel::Sender;

use crate::constants::OUTBOX_MAX_LENGTH;
use crate::eventing::{AppEvent, StatusScope, schedule_status_reset};
use crate::services::ConfigApi;
use crate::state::{SaveStatus, StatusSlot};

/// Controller for the outbound post composer
pub struct OutboxController<C> {
    api: C,
    event_tx: Sender<AppEvent>,
    content: String,
    pending: bool,
    status: StatusSlot,
}

impl<C: ConfigApi> OutboxController<C> {
    pub fn new(api: C, event_tx: Sender<AppEvent>) -> Self {
        Self {
            api,
            event_tx,
            content: String::new(),
            pending: false,
            status: StatusSlot::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn status(&self) -> Option<&SaveStatus> {
        self.status.current()
    }

    /// Replace the composed content, truncated to the post length limit
    pub fn set_content(&mut self, text: impl Into<String>) {
        let mut text = text.into();
        if let Some((index, _)) = text.char_indices().nth(OUTBOX_MAX_LENGTH) {
            text.truncate(index);
        }
        self.content = text;
    }

    /// Whether the send button is operable: not while a send is in
    /// flight, not while the success state is still showing, and not for
    /// an empty post
    pub fn can_send(&self) -> bool {
        !self.pending
            && !self.status.current().is_some_and(SaveStatus::is_success)
            && !self.content.trim().is_empty()
    }

    /// Post the composed content to followers. Success clears the
    /// composer; failure leaves it for a retry.
    pub async fn send(&mut self) {
        if !self.can_send() {
            return;
        }

        self.pending = true;
        let result = self.api.send_outbox_message(&self.content).await;
        self.pending = false;

        match result {
            Ok(()) => {
                self.content.clear();
                self.begin_status(SaveStatus::Success);
            }
            Err(err) => {
                tracing::error!("outbound post failed: {err}");
                self.begin_status(SaveStatus::Error(err.user_message()));
            }
        }
    }

    fn begin_status(&mut self, status: SaveStatus) {
        let generation = self.status.set(status);
        schedule_status_reset(self.event_tx.clone(), StatusScope::Outbox, generation);
    }

    /// Timer callback; only honored for the generation it was armed for
    pub fn on_status_expired(&mut self, generation: u64) {
        self.status.expire(generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{S3StorageConfig, ServerConfig};
    use crate::error::{Error, Result};
    use crate::services::BlocklistUpdate;
    use serde_json::Value;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorded {
        messages: Vec<String>,
        fail_next: Option<String>,
    }

    #[derive(Clone, Default)]
    struct MockApi {
        recorded: Rc<RefCell<Recorded>>,
    }

    impl ConfigApi for MockApi {
        async fn fetch_config(&self) -> Result<ServerConfig> {
            Ok(ServerConfig::default())
        }

        async fn update_field(&self, _path: &str, _value: Value) -> Result<()> {
            Ok(())
        }

        async fn update_blocked_domains(&self, _domains: &[String]) -> Result<BlocklistUpdate> {
            Ok(BlocklistUpdate::default())
        }

        async fn update_storage(&self, _storage: &S3StorageConfig) -> Result<()> {
            Ok(())
        }

        async fn send_outbox_message(&self, content: &str) -> Result<()> {
            let mut recorded = self.recorded.borrow_mut();
            if let Some(message) = recorded.fail_next.take() {
                return Err(Error::Remote { message });
            }
            recorded.messages.push(content.to_string());
            Ok(())
        }
    }

    fn make_controller() -> (OutboxController<MockApi>, MockApi) {
        let api = MockApi::default();
        let (tx, _rx) = crossbeam_channel::unbounded();
        (OutboxController::new(api.clone(), tx), api)
    }

    #[tokio::test]
    async fn send_posts_and_clears_the_composer() {
        let (mut controller, api) = make_controller();

        controller.set_content("going live soon");
        controller.send().await;

        assert_eq!(api.recorded.borrow().messages, vec!["going live soon"]);
        assert_eq!(controller.content(), "");
        assert_eq!(controller.status(), Some(&SaveStatus::Success));
    }

    #[tokio::test]
    async fn empty_content_cannot_be_sent() {
        let (mut controller, api) = make_controller();

        controller.set_content("   ");
        controller.send().await;

        assert!(api.recorded.borrow().messages.is_empty());
        assert_eq!(controller.status(), None);
    }

    #[tokio::test]
    async fn success_state_blocks_resend_until_expiry() {
        let (mut controller, api) = make_controller();

        controller.set_content("first");
        controller.send().await;

        controller.set_content("second");
        assert!(!controller.can_send());
        controller.send().await;
        assert_eq!(api.recorded.borrow().messages.len(), 1);

        controller.on_status_expired(1);
        assert!(controller.can_send());
    }

    #[tokio::test]
    async fn failure_keeps_content_for_retry() {
        let (mut controller, api) = make_controller();
        api.recorded.borrow_mut().fail_next = Some("outbox unavailable".to_string());

        controller.set_content("hello fediverse");
        controller.send().await;

        assert_eq!(controller.content(), "hello fediverse");
        assert_eq!(
            controller.status(),
            Some(&SaveStatus::Error("outbox unavailable".to_string()))
        );
        assert!(controller.can_send());
    }

    #[test]
    fn content_is_truncated_to_the_limit() {
        let (mut controller, _api) = make_controller();

        controller.set_content("x".repeat(OUTBOX_MAX_LENGTH + 50));

        assert_eq!(controller.content().chars().count(), OUTBOX_MAX_LENGTH);
    }
}
