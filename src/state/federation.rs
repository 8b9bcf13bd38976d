//! Federation Page Draft
//!
//! The editable local copy of the federation settings, plus the instance
//! URL from the directory subtree that the cross-field rules depend on.

use crate::domain::ServerConfig;

/// Local, independently mutable copy of the federation form's fields
#[derive(Debug, Clone, PartialEq)]
pub struct FederationDraft {
    pub enabled: bool,
    pub is_private: bool,
    pub username: String,
    pub go_live_message: String,
    pub show_engagement: bool,
    /// Lives in the directory subtree server-side; projected in because
    /// the enable toggle depends on it
    pub instance_url: String,
    pub blocked_domains: Vec<String>,
}

impl FederationDraft {
    /// Copy all tracked fields out of the canonical snapshot
    pub fn seed(config: &ServerConfig) -> Self {
        let federation = &config.federation;
        Self {
            enabled: federation.enabled,
            is_private: federation.is_private,
            username: federation.username.clone(),
            go_live_message: federation.go_live_message.clone(),
            show_engagement: federation.show_engagement,
            instance_url: config.directory.instance_url.clone(),
            blocked_domains: federation.blocked_domains.clone(),
        }
    }

    /// Replace exactly one field; every other field is untouched
    pub fn apply(&mut self, edit: FederationEdit) {
        match edit {
            FederationEdit::Enabled(value) => self.enabled = value,
            FederationEdit::IsPrivate(value) => self.is_private = value,
            FederationEdit::Username(value) => self.username = value,
            FederationEdit::GoLiveMessage(value) => self.go_live_message = value,
            FederationEdit::ShowEngagement(value) => self.show_engagement = value,
            FederationEdit::InstanceUrl(value) => self.instance_url = value,
        }
    }
}

/// A single named-field edit to the federation draft.
///
/// The blocked-domain list is not edited this way; it has its own
/// append/remove operations that commit immediately.
#[derive(Debug, Clone, PartialEq)]
pub enum FederationEdit {
    Enabled(bool),
    IsPrivate(bool),
    Username(String),
    GoLiveMessage(String),
    ShowEngagement(bool),
    InstanceUrl(String),
}

/// Field selector for an explicit remote submission of one draft field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FederationField {
    Enabled,
    IsPrivate,
    Username,
    GoLiveMessage,
    ShowEngagement,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DirectoryConfig, FederationConfig};

    fn make_config() -> ServerConfig {
        ServerConfig {
            federation: FederationConfig {
                enabled: true,
                is_private: false,
                username: "streamer".to_string(),
                go_live_message: "We are live!".to_string(),
                show_engagement: true,
                blocked_domains: vec!["spam.example".to_string()],
            },
            directory: DirectoryConfig {
                instance_url: "https://live.example.com".to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn seed_copies_fields_exactly() {
        let config = make_config();
        let draft = FederationDraft::seed(&config);

        assert!(draft.enabled);
        assert!(!draft.is_private);
        assert_eq!(draft.username, "streamer");
        assert_eq!(draft.go_live_message, "We are live!");
        assert!(draft.show_engagement);
        assert_eq!(draft.instance_url, "https://live.example.com");
        assert_eq!(draft.blocked_domains, vec!["spam.example"]);
    }

    #[test]
    fn apply_changes_only_the_edited_field() {
        let config = make_config();
        let before = FederationDraft::seed(&config);

        let mut draft = before.clone();
        draft.apply(FederationEdit::Username("other".to_string()));

        assert_eq!(draft.username, "other");
        assert_eq!(draft.enabled, before.enabled);
        assert_eq!(draft.is_private, before.is_private);
        assert_eq!(draft.go_live_message, before.go_live_message);
        assert_eq!(draft.show_engagement, before.show_engagement);
        assert_eq!(draft.instance_url, before.instance_url);
        assert_eq!(draft.blocked_domains, before.blocked_domains);
    }

    #[test]
    fn draft_is_independent_of_the_snapshot() {
        let mut config = make_config();
        let mut draft = FederationDraft::seed(&config);

        draft.apply(FederationEdit::InstanceUrl(String::new()));
        draft.blocked_domains.push("more.example".to_string());

        assert_eq!(config.directory.instance_url, "https://live.example.com");
        assert_eq!(config.federation.blocked_domains.len(), 1);

        // And the other way around
        config.federation.username.clear();
        assert_eq!(draft.username, "streamer");
    }
}
