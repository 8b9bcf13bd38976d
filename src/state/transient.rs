//! Transient Save Status
//!
//! Success/error feedback for a single persistence operation, cleared
//! automatically after a fixed display window. Every status carries a
//! generation counter; an expiry timer captures the generation it was
//! armed for, so a stale timer firing late cannot clear a newer status.

/// Outcome of one commit attempt. Absence (no status) is represented by
/// the slot holding `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    /// The server accepted the update
    Success,
    /// The update failed; the message is shown in the error banner
    Error(String),
}

impl SaveStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, SaveStatus::Success)
    }

    /// The error message, if this is an error status
    pub fn message(&self) -> Option<&str> {
        match self {
            SaveStatus::Error(message) => Some(message),
            SaveStatus::Success => None,
        }
    }
}

/// Holder for the transient status of one commit-reporting field
#[derive(Debug, Clone, Default)]
pub struct StatusSlot {
    current: Option<SaveStatus>,
    generation: u64,
}

impl StatusSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current status, superseding any pending expiry.
    /// Returns the generation the caller should arm the expiry timer with.
    pub fn set(&mut self, status: SaveStatus) -> u64 {
        self.generation += 1;
        self.current = Some(status);
        self.generation
    }

    /// Clear the status, but only if `generation` still matches the one
    /// that set it. A stale generation leaves a newer status untouched.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation == generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// The currently displayed status, if any
    pub fn current(&self) -> Option<&SaveStatus> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_by_default() {
        let slot = StatusSlot::new();
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn matching_generation_clears() {
        let mut slot = StatusSlot::new();
        let generation = slot.set(SaveStatus::Success);

        assert!(slot.expire(generation));
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn stale_generation_leaves_newer_status() {
        let mut slot = StatusSlot::new();
        let first = slot.set(SaveStatus::Success);
        let _second = slot.set(SaveStatus::Error("boom".to_string()));

        // The first timer fires late; the newer status must survive
        assert!(!slot.expire(first));
        assert_eq!(
            slot.current(),
            Some(&SaveStatus::Error("boom".to_string()))
        );
    }

    #[test]
    fn supersede_then_expire_current() {
        let mut slot = StatusSlot::new();
        slot.set(SaveStatus::Success);
        let current = slot.set(SaveStatus::Success);

        assert!(slot.expire(current));
        assert_eq!(slot.current(), None);
    }
}
