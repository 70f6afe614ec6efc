//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod preview;
mod selection_tracker;

pub use preview::{Badge, PermissionLine, Preview, PreviewRestriction, PreviewSection, RAIL_INITIATIVE};
pub use selection_tracker::{
    BuildOutcome, IgnoreReason, SelectionSnapshot, SelectionTracker, ToggleOutcome,
};
