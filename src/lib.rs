//! Castadmin Core Library
//!
//! Application core for castadmin, a native admin console for
//! self-hosted live streaming servers. The rendering shell constructs the
//! page controllers, pumps `AppEvent`s from the hub's channel into them,
//! and renders from the state they expose.

pub mod connection;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod observability;
pub mod services;
pub mod state;
