//! Service Layer
//!
//! Abstraction over the remote admin API and the hub that feeds snapshot
//! loads into the core loop.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  ConfigHub                    │
//! │   ┌────────────────┐   snapshot versioning    │
//! │   │  HttpConfigApi │   + AppEvent channel     │
//! │   └────────────────┘                          │
//! └──────────────────────────────────────────────┘
//!                      │
//!                      ▼ AppEvent
//! ┌──────────────────────────────────────────────┐
//! │            Feature Controllers                │
//! │   (federation, storage, outbox pages)         │
//! └──────────────────────────────────────────────┘
//! ```

mod config_api;
mod http_api;
mod hub;

pub use config_api::*;
pub use http_api::*;
pub use hub::*;
