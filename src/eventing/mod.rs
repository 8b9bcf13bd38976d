//! Eventing
//!
//! Events flowing from background tasks back into the single-threaded
//! core loop.

mod app_event;

pub use app_event::*;
