// SPDX-License-Identifier: MPL-2.0
//! Debounced auto-hide visibility.
//!
//! A [`DebouncedVisibility`] is shown by a trigger and hides itself once its
//! dwell time has elapsed since the *last* trigger. Re-triggering while
//! visible restarts the dwell from zero; there is never more than one pending
//! hide.
//!
//! Time is passed in explicitly so hosts can drive it from any timer source
//! and tests can use synthetic instants.

use crate::domain::ui::DwellTime;
use std::time::Instant;

/// Outcome of [`DebouncedVisibility::trigger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Was hidden, now visible.
    Shown,
    /// Was already visible; the pending hide was replaced.
    Extended,
}

/// Visibility flag with a single pending auto-hide deadline.
#[derive(Debug, Clone)]
pub struct DebouncedVisibility {
    dwell: DwellTime,
    visible: bool,
    hide_at: Option<Instant>,
}

impl DebouncedVisibility {
    pub fn new(dwell: DwellTime) -> Self {
        Self {
            dwell,
            visible: false,
            hide_at: None,
        }
    }

    pub fn dwell(&self) -> DwellTime {
        self.dwell
    }

    /// Shows the overlay and (re)schedules its hide at `now + dwell`.
    pub fn trigger(&mut self, now: Instant) -> Trigger {
        let outcome = if self.visible {
            Trigger::Extended
        } else {
            Trigger::Shown
        };
        self.visible = true;
        self.hide_at = Some(now + self.dwell.as_duration());
        outcome
    }

    /// Hides the overlay if its deadline has passed. Returns true if it just hid.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.visible = false;
                self.hide_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Pending hide deadline, if visible.
    pub fn deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    /// Hides immediately and drops the pending deadline.
    pub fn cancel(&mut self) {
        self.visible = false;
        self.hide_at = None;
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
    fn starts_hidden() {
        let flag = DebouncedVisibility::new(DwellTime::skip_indicator());
        assert!(!flag.is_visible());
        assert!(flag.deadline().is_none());
    }

    #[test]
    fn hides_after_dwell() {
        let t0 = Instant::now();
        let mut flag = DebouncedVisibility::new(DwellTime::new(500));

        assert_eq!(flag.trigger(t0), Trigger::Shown);
        assert!(!flag.poll(t0 + ms(499)));
        assert!(flag.is_visible());
        assert!(flag.poll(t0 + ms(500)));
        assert!(!flag.is_visible());
        assert!(flag.deadline().is_none());
    }

    #[test]
    fn retrigger_restarts_dwell() {
        let t0 = Instant::now();
        let mut flag = DebouncedVisibility::new(DwellTime::new(500));

        flag.trigger(t0);
        assert_eq!(flag.trigger(t0 + ms(400)), Trigger::Extended);
        assert_eq!(flag.deadline(), Some(t0 + ms(900)));

        // The original deadline no longer hides it
        assert!(!flag.poll(t0 + ms(500)));
        assert!(flag.is_visible());
        assert!(!flag.poll(t0 + ms(899)));
        assert!(flag.poll(t0 + ms(900)));
    }

    #[test]
    fn isolated_triggers_give_independent_cycles() {
        let t0 = Instant::now();
        let mut flag = DebouncedVisibility::new(DwellTime::new(500));

        assert_eq!(flag.trigger(t0), Trigger::Shown);
        assert!(flag.poll(t0 + ms(500)));

        assert_eq!(flag.trigger(t0 + ms(700)), Trigger::Shown);
        assert!(flag.poll(t0 + ms(1200)));
    }

    #[test]
    fn cancel_drops_pending_hide() {
        let t0 = Instant::now();
        let mut flag = DebouncedVisibility::new(DwellTime::center_glyph());
        flag.trigger(t0);
        flag.cancel();

        assert!(!flag.is_visible());
        assert!(!flag.poll(t0 + ms(300)));
    }
}
