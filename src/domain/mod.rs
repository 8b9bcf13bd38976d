//! Domain Models
//!
//! Typed views of the data owned by the remote server.

mod config;

pub use config::*;
