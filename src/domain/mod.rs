// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`MediaError`](error::MediaError),
//!   [`FullscreenError`](error::FullscreenError))
//! - [`ui`]: UI value objects ([`DwellTime`](ui::DwellTime),
//!   [`DoubleTapWindow`](ui::DoubleTapWindow), [`FullscreenApi`](ui::FullscreenApi))
//! - [`video`]: Video playback types ([`PlaybackState`](video::PlaybackState),
//!   [`VolumeLevel`](video::VolumeLevel), [`SkipStep`](video::SkipStep))

pub mod error;
pub mod ui;
pub mod video;
