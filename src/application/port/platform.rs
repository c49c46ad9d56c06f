// SPDX-License-Identifier: MPL-2.0
//! Platform environment port.
//!
//! Replaces direct reads of the global `document`/`screen` objects so the
//! fullscreen coordinator can be driven deterministically in tests.

use crate::domain::ui::{FullscreenApi, Orientation};

/// Queries about the hosting platform.
pub trait PlatformEnvironment {
    /// Current screen orientation.
    fn orientation(&self) -> Orientation;

    /// True if the document currently has a fullscreen element.
    fn fullscreen_element_active(&self) -> bool;

    /// Fullscreen API families present on this platform, in any order.
    fn supported_fullscreen_apis(&self) -> Vec<FullscreenApi>;

    /// The API family the controller should use.
    fn preferred_fullscreen_api(&self) -> FullscreenApi {
        FullscreenApi::select(&self.supported_fullscreen_apis())
    }
}
