// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the controller remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`media`]: The playing media element (play/pause, position, volume)
//! - [`fullscreen`]: One fullscreen API family, selected once by probing
//! - [`platform`]: Environment queries (orientation, fullscreen element)
//!
//! # Design Notes
//!
//! - All traits use domain types only (no `web_sys` types)
//! - Methods are synchronous; asynchronous completions (play promise,
//!   fullscreen promise) come back to the controller as messages
//! - Traits are object-safe so adapters can be boxed at mount time

pub mod fullscreen;
pub mod media;
pub mod platform;

// Re-export main types for convenience
pub use fullscreen::FullscreenController;
pub use media::MediaResource;
pub use platform::PlatformEnvironment;
