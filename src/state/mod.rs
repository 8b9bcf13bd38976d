//! State Layer
//!
//! Pure, synchronous state for the settings pages: editable drafts seeded
//! from the canonical snapshot, the confirmation gate for enabling
//! transitions, and transient save feedback. All remote I/O lives in the
//! feature controllers; nothing here touches the network.

mod draft;
mod federation;
mod gate;
mod storage;
mod transient;

pub use draft::*;
pub use federation::*;
pub use gate::*;
pub use storage::*;
pub use transient::*;
