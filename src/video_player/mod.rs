// SPDX-License-Identifier: MPL-2.0
//! Playback state for the video widget.
//!
//! This module holds the playback store (sole writer of the media resource
//! on the widget side) and the fallback position poller.

pub mod poller;
mod state;

pub use poller::{PositionPoller, PositionSync};
pub use state::{PlaybackAction, PlaybackStore};
