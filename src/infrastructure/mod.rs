// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`simulated`]: in-memory media, screen and fullscreen, used by the
//!   scenario runner and tests
//! - `web` (feature `web`): `<video>` element, vendor fullscreen APIs and DOM
//!   events through `web-sys`

pub mod simulated;
#[cfg(feature = "web")]
pub mod web;

pub use simulated::{
    FullscreenResponse, SimulatedFullscreen, SimulatedMedia, SimulatedPlatform, SimulatedScreen,
};
