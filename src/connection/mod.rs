//! Connection Layer
//!
//! Locally persisted admin endpoint profiles.

mod profile;

pub use profile::*;
