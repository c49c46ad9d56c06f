// SPDX-License-Identifier: MPL-2.0
//! The three transient overlays of the video widget.

use super::visibility::{DebouncedVisibility, Trigger};
use crate::domain::ui::DwellTime;
use crate::domain::video::SkipDirection;
use std::time::Instant;

/// Identifies one transient overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    /// Play/pause glyph in the middle of the video.
    CenterGlyph,
    /// "+10 sec." indicator on the right.
    ForwardIndicator,
    /// "-10 sec." indicator on the left.
    BackwardIndicator,
}

impl Overlay {
    pub const ALL: [Self; 3] = [
        Self::CenterGlyph,
        Self::ForwardIndicator,
        Self::BackwardIndicator,
    ];

    /// Indicator shown for a skip in `direction`.
    #[must_use]
    pub fn for_skip(direction: SkipDirection) -> Self {
        match direction {
            SkipDirection::Forward => Self::ForwardIndicator,
            SkipDirection::Backward => Self::BackwardIndicator,
        }
    }
}

/// Independent visibility state for each [`Overlay`].
#[derive(Debug, Clone)]
pub struct OverlaySet {
    center: DebouncedVisibility,
    forward: DebouncedVisibility,
    backward: DebouncedVisibility,
}

impl OverlaySet {
    pub fn new(center_dwell: DwellTime, skip_dwell: DwellTime) -> Self {
        Self {
            center: DebouncedVisibility::new(center_dwell),
            forward: DebouncedVisibility::new(skip_dwell),
            backward: DebouncedVisibility::new(skip_dwell),
        }
    }

    fn get(&self, overlay: Overlay) -> &DebouncedVisibility {
        match overlay {
            Overlay::CenterGlyph => &self.center,
            Overlay::ForwardIndicator => &self.forward,
            Overlay::BackwardIndicator => &self.backward,
        }
    }

    fn get_mut(&mut self, overlay: Overlay) -> &mut DebouncedVisibility {
        match overlay {
            Overlay::CenterGlyph => &mut self.center,
            Overlay::ForwardIndicator => &mut self.forward,
            Overlay::BackwardIndicator => &mut self.backward,
        }
    }

    pub fn trigger(&mut self, overlay: Overlay, now: Instant) -> Trigger {
        self.get_mut(overlay).trigger(now)
    }

    pub fn is_visible(&self, overlay: Overlay) -> bool {
        self.get(overlay).is_visible()
    }

    /// Hides every overlay whose dwell has elapsed and returns those.
    pub fn poll(&mut self, now: Instant) -> Vec<Overlay> {
        Overlay::ALL
            .into_iter()
            .filter(|&overlay| self.get_mut(overlay).poll(now))
            .collect()
    }

    /// Earliest pending hide across all overlays.
    pub fn next_deadline(&self) -> Option<Instant> {
        Overlay::ALL
            .into_iter()
            .filter_map(|overlay| self.get(overlay).deadline())
            .min()
    }
}

impl Default for OverlaySet {
    fn default() -> Self {
        Self::new(DwellTime::center_glyph(), DwellTime::skip_indicator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn overlays_are_independent() {
        let t0 = Instant::now();
        let mut overlays = OverlaySet::default();

        overlays.trigger(Overlay::CenterGlyph, t0);
        overlays.trigger(Overlay::ForwardIndicator, t0 + ms(100));

        assert!(overlays.is_visible(Overlay::CenterGlyph));
        assert!(overlays.is_visible(Overlay::ForwardIndicator));
        assert!(!overlays.is_visible(Overlay::BackwardIndicator));

        assert_eq!(overlays.poll(t0 + ms(300)), vec![Overlay::CenterGlyph]);
        assert!(overlays.is_visible(Overlay::ForwardIndicator));
        assert_eq!(overlays.poll(t0 + ms(600)), vec![Overlay::ForwardIndicator]);
    }

    #[test]
    fn next_deadline_is_earliest_pending_hide() {
        let t0 = Instant::now();
        let mut overlays = OverlaySet::default();
        assert!(overlays.next_deadline().is_none());

        overlays.trigger(Overlay::BackwardIndicator, t0);
        overlays.trigger(Overlay::CenterGlyph, t0 + ms(100));
        assert_eq!(overlays.next_deadline(), Some(t0 + ms(400)));
    }

    #[test]
    fn skip_direction_maps_to_indicator() {
        assert_eq!(
            Overlay::for_skip(SkipDirection::Forward),
            Overlay::ForwardIndicator
        );
        assert_eq!(
            Overlay::for_skip(SkipDirection::Backward),
            Overlay::BackwardIndicator
        );
    }
}
