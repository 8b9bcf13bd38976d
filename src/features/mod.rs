//! Feature Controllers
//!
//! One controller per settings page. Controllers own their page's draft
//! and status state, talk to the remote API, and expose everything the
//! rendering shell needs.

pub mod federation;
pub mod outbox;
pub mod storage;
