//! Outbound Post Composer

mod controller;

pub use controller::*;
