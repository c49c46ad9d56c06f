// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Timer-driven state machines layered on top of raw gesture events. They
//! never touch the media resource; the controller turns their outcomes into
//! playback store operations.

pub mod gesture;
pub mod overlays;
pub mod visibility;

// Re-export commonly used types for convenience
pub use gesture::DoubleTapDetector;
pub use overlays::{Overlay, OverlaySet};
pub use visibility::{DebouncedVisibility, Trigger};
