// SPDX-License-Identifier: MPL-2.0
//! `playback_overlay` is the interaction controller behind a video player's
//! overlay controls.
//!
//! It owns the playback state mirrored from a media element, the transient
//! overlays (center glyph, skip indicators) with their debounced hide
//! timers, touch double-tap detection, and fullscreen/orientation
//! coordination across browser API families. Rendering and decoding are left
//! to the host; the crate produces a [`ui::controls::ControlsView`] to draw.

#![doc(html_root_url = "https://docs.rs/playback_overlay/0.3.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod scenario;
pub mod ui;
pub mod video_player;

#[cfg(test)]
pub mod test_utils;
