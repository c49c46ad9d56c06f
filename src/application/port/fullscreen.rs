// SPDX-License-Identifier: MPL-2.0
//! Fullscreen port definition.
//!
//! One implementation exists per API family ([`FullscreenApi`]). The family
//! is chosen once at mount time by probing the platform, never per call.

use crate::domain::error::FullscreenError;
use crate::domain::ui::{FullscreenApi, FullscreenOutcome, FullscreenTarget};

/// Port for entering and leaving fullscreen.
pub trait FullscreenController {
    /// API family this controller drives.
    fn api(&self) -> FullscreenApi;

    /// Requests fullscreen on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`FullscreenError::Unsupported`] if the API is missing and
    /// [`FullscreenError::Rejected`] if the platform refuses synchronously.
    fn request(&mut self, target: FullscreenTarget) -> Result<FullscreenOutcome, FullscreenError>;

    /// Leaves fullscreen.
    ///
    /// # Errors
    ///
    /// Returns [`FullscreenError::NotActive`] when nothing is fullscreen, or
    /// [`FullscreenError::Unsupported`] when no exit method exists.
    fn exit(&mut self) -> Result<(), FullscreenError>;

    /// Element requests should be addressed to.
    fn target(&self) -> FullscreenTarget {
        self.api().target()
    }

    /// True if the platform's native player owns playback while fullscreen.
    fn owns_playback(&self) -> bool {
        self.api().owns_playback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn FullscreenController) {}

    struct NoFullscreen;

    impl FullscreenController for NoFullscreen {
        fn api(&self) -> FullscreenApi {
            FullscreenApi::Unsupported
        }

        fn request(
            &mut self,
            _target: FullscreenTarget,
        ) -> Result<FullscreenOutcome, FullscreenError> {
            Err(FullscreenError::Unsupported)
        }

        fn exit(&mut self) -> Result<(), FullscreenError> {
            Err(FullscreenError::Unsupported)
        }
    }

    #[test]
    fn default_target_follows_api() {
        let controller = NoFullscreen;
        assert_eq!(controller.target(), FullscreenTarget::Container);
        assert!(!controller.owns_playback());
    }
}
