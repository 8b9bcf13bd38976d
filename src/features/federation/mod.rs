//! Federation Settings Page

mod controller;

pub use controller::*;
