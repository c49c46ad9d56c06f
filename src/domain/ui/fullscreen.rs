// SPDX-License-Identifier: MPL-2.0
//! Fullscreen and orientation value types.
//!
//! Browsers expose fullscreen through several incompatible APIs. The family
//! available on a platform is probed once and represented by
//! [`FullscreenApi`].

/// Physical orientation of the device screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Classifies a platform orientation name such as `"landscape-primary"`.
    #[must_use]
    pub fn from_type_name(name: &str) -> Self {
        if name.contains("landscape") {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Classifies the legacy `window.orientation` angle (0, ±90, 180).
    #[must_use]
    pub fn from_angle(degrees: i32) -> Self {
        if degrees.rem_euclid(180) == 90 {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

/// Whether the widget is currently displayed fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullscreenMode {
    #[default]
    Windowed,
    Fullscreen,
}

impl FullscreenMode {
    #[must_use]
    pub fn is_fullscreen(self) -> bool {
        matches!(self, Self::Fullscreen)
    }
}

/// Element a fullscreen request is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenTarget {
    /// The whole widget container, so the custom overlays stay visible.
    Container,
    /// The media element alone (native player chrome takes over).
    MediaElement,
}

/// Synchronous result of a fullscreen request that was not refused outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenOutcome {
    /// The platform switched to fullscreen immediately.
    Entered,
    /// The request was accepted; completion arrives as a fullscreen-change
    /// notification or a rejection.
    Pending,
}

/// Fullscreen API family available on a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullscreenApi {
    /// `requestFullscreen` / `exitFullscreen`.
    Standard,
    /// `webkitRequestFullscreen` / `webkitExitFullscreen`.
    Webkit,
    /// `mozRequestFullScreen` / `mozCancelFullScreen`.
    Moz,
    /// `msRequestFullscreen` / `msExitFullscreen`.
    Ms,
    /// `webkitEnterFullscreen` on the video element only (iOS Safari).
    WebkitVideo,
    /// No fullscreen capability at all.
    Unsupported,
}

impl FullscreenApi {
    /// Container-level APIs in the order they are tried.
    pub const PRIORITY: [Self; 4] = [Self::Standard, Self::Webkit, Self::Moz, Self::Ms];

    /// Picks the API to use from the set the platform supports.
    ///
    /// Container-level APIs win in [`Self::PRIORITY`] order; the media-only
    /// iOS API is the fallback.
    ///
    /// # Example
    ///
    /// ```
    /// use playback_overlay::domain::ui::FullscreenApi;
    ///
    /// let api = FullscreenApi::select(&[FullscreenApi::Ms, FullscreenApi::Webkit]);
    /// assert_eq!(api, FullscreenApi::Webkit);
    /// assert_eq!(FullscreenApi::select(&[]), FullscreenApi::Unsupported);
    /// ```
    #[must_use]
    pub fn select(supported: &[Self]) -> Self {
        Self::PRIORITY
            .into_iter()
            .find(|api| supported.contains(api))
            .or_else(|| supported.contains(&Self::WebkitVideo).then_some(Self::WebkitVideo))
            .unwrap_or(Self::Unsupported)
    }

    /// Element that requests made through this API are addressed to.
    #[must_use]
    pub fn target(self) -> FullscreenTarget {
        match self {
            Self::WebkitVideo => FullscreenTarget::MediaElement,
            _ => FullscreenTarget::Container,
        }
    }

    /// True when the platform's native player runs playback on its own
    /// while fullscreen, so the mirrored paused flag cannot be trusted.
    #[must_use]
    pub fn owns_playback(self) -> bool {
        matches!(self, Self::WebkitVideo)
    }

    /// JavaScript method names for request and exit, if any.
    #[must_use]
    pub fn method_names(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Standard => Some(("requestFullscreen", "exitFullscreen")),
            Self::Webkit => Some(("webkitRequestFullscreen", "webkitExitFullscreen")),
            Self::Moz => Some(("mozRequestFullScreen", "mozCancelFullScreen")),
            Self::Ms => Some(("msRequestFullscreen", "msExitFullscreen")),
            Self::WebkitVideo => Some(("webkitEnterFullscreen", "webkitExitFullscreen")),
            Self::Unsupported => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_from_type_name() {
        assert_eq!(
            Orientation::from_type_name("landscape-primary"),
            Orientation::Landscape
        );
        assert_eq!(
            Orientation::from_type_name("portrait-secondary"),
            Orientation::Portrait
        );
    }

    #[test]
    fn orientation_from_angle() {
        assert_eq!(Orientation::from_angle(0), Orientation::Portrait);
        assert_eq!(Orientation::from_angle(180), Orientation::Portrait);
        assert_eq!(Orientation::from_angle(90), Orientation::Landscape);
        assert_eq!(Orientation::from_angle(-90), Orientation::Landscape);
    }

    #[test]
    fn select_prefers_standard_api() {
        let all = [
            FullscreenApi::WebkitVideo,
            FullscreenApi::Moz,
            FullscreenApi::Standard,
            FullscreenApi::Webkit,
        ];
        assert_eq!(FullscreenApi::select(&all), FullscreenApi::Standard);
    }

    #[test]
    fn select_falls_back_to_video_element_on_ios() {
        assert_eq!(
            FullscreenApi::select(&[FullscreenApi::WebkitVideo]),
            FullscreenApi::WebkitVideo
        );
        assert_eq!(
            FullscreenApi::WebkitVideo.target(),
            FullscreenTarget::MediaElement
        );
        assert!(FullscreenApi::WebkitVideo.owns_playback());
    }

    #[test]
    fn container_apis_target_container() {
        for api in FullscreenApi::PRIORITY {
            assert_eq!(api.target(), FullscreenTarget::Container);
            assert!(!api.owns_playback());
            assert!(api.method_names().is_some());
        }
        assert!(FullscreenApi::Unsupported.method_names().is_none());
    }
}
