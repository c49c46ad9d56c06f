// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns.

mod fullscreen;
mod media;

pub use fullscreen::FullscreenError;
pub use media::MediaError;
