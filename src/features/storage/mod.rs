//! Storage Settings Page

mod controller;

pub use controller::*;
