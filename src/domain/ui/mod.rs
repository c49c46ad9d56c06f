// SPDX-License-Identifier: MPL-2.0
//! UI domain types.

pub mod fullscreen;
pub mod newtypes;

pub use fullscreen::{FullscreenApi, FullscreenMode, FullscreenOutcome, FullscreenTarget, Orientation};
pub use newtypes::{DoubleTapWindow, DwellTime};
