// SPDX-License-Identifier: MPL-2.0
//! User interface state for the video widget.
//!
//! Rendering is left to the host. This module owns the UI-side state
//! machines and the render model the host draws from, following the
//! Elm-style "state down, messages up" pattern.
//!
//! - [`state`] - Overlay visibility scheduling and gesture disambiguation
//! - [`controls`] - Render model of the controls bar and overlays

pub mod controls;
pub mod state;
