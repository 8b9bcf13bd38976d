//! Application Constants
//!
//! Centralized timing and sizing constants shared across the page controllers.

use std::time::Duration;

/// How long a transient save status stays visible before auto-resetting
pub const STATUS_RESET_TIMEOUT: Duration = Duration::from_secs(3);

/// Request timeout for admin API calls
pub const API_TIMEOUT_SECS: u64 = 10;

/// Maximum length of an outbound post, in characters
pub const OUTBOX_MAX_LENGTH: usize = 500;
