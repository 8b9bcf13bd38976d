//! Storage Page Draft
//!
//! Editable copy of the S3 storage block. Unlike the federation page,
//! edits here are committed in one whole-block write on explicit save.

use crate::domain::{S3StorageConfig, ServerConfig};

/// Local, independently mutable copy of the storage form's fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorageDraft {
    pub enabled: bool,
    pub endpoint: String,
    pub access_key: String,
    pub secret: String,
    pub bucket: String,
    pub region: String,
    pub serving_endpoint: Option<String>,
    pub acl: Option<String>,
    pub force_path_style: bool,
}

impl StorageDraft {
    /// Copy the S3 block out of the canonical snapshot
    pub fn seed(config: &ServerConfig) -> Self {
        let s3 = &config.s3;
        Self {
            enabled: s3.enabled,
            endpoint: s3.endpoint.clone(),
            access_key: s3.access_key.clone(),
            secret: s3.secret.clone(),
            bucket: s3.bucket.clone(),
            region: s3.region.clone(),
            serving_endpoint: s3.serving_endpoint.clone(),
            acl: s3.acl.clone(),
            force_path_style: s3.force_path_style,
        }
    }

    /// Replace exactly one field; every other field is untouched
    pub fn apply(&mut self, edit: StorageEdit) {
        match edit {
            StorageEdit::Enabled(value) => self.enabled = value,
            StorageEdit::Endpoint(value) => self.endpoint = value,
            StorageEdit::AccessKey(value) => self.access_key = value,
            StorageEdit::Secret(value) => self.secret = value,
            StorageEdit::Bucket(value) => self.bucket = value,
            StorageEdit::Region(value) => self.region = value,
            StorageEdit::ServingEndpoint(value) => self.serving_endpoint = value,
            StorageEdit::Acl(value) => self.acl = value,
            StorageEdit::ForcePathStyle(value) => self.force_path_style = value,
        }
    }

    /// The wire shape the whole-block commit sends
    pub fn to_config(&self) -> S3StorageConfig {
        S3StorageConfig {
            enabled: self.enabled,
            endpoint: self.endpoint.clone(),
            access_key: self.access_key.clone(),
            secret: self.secret.clone(),
            bucket: self.bucket.clone(),
            region: self.region.clone(),
            serving_endpoint: self.serving_endpoint.clone(),
            acl: self.acl.clone(),
            force_path_style: self.force_path_style,
        }
    }
}

/// A single named-field edit to the storage draft
#[derive(Debug, Clone, PartialEq)]
pub enum StorageEdit {
    Enabled(bool),
    Endpoint(String),
    AccessKey(String),
    Secret(String),
    Bucket(String),
    Region(String),
    ServingEndpoint(Option<String>),
    Acl(Option<String>),
    ForcePathStyle(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config() -> ServerConfig {
        ServerConfig {
            s3: S3StorageConfig {
                enabled: true,
                endpoint: "https://s3.example.com".to_string(),
                access_key: "AK".to_string(),
                secret: "SK".to_string(),
                bucket: "stream".to_string(),
                region: "eu-west-1".to_string(),
                serving_endpoint: None,
                acl: None,
                force_path_style: false,
            },
            ..Default::default()
        }
    }

    #[test]
    fn seed_and_round_trip() {
        let config = make_config();
        let draft = StorageDraft::seed(&config);
        assert_eq!(draft.to_config(), config.s3);
    }

    #[test]
    fn apply_changes_only_the_edited_field() {
        let before = StorageDraft::seed(&make_config());

        let mut draft = before.clone();
        draft.apply(StorageEdit::Bucket("other".to_string()));

        assert_eq!(draft.bucket, "other");
        assert_eq!(
            StorageDraft {
                bucket: before.bucket.clone(),
                ..draft
            },
            before
        );
    }
}
