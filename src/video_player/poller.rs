// SPDX-License-Identifier: MPL-2.0
//! Position synchronization strategy.
//!
//! Resources that deliver `timeupdate` keep the mirrored position current on
//! their own (push). For those that don't, the poller reads the position at
//! a fixed interval while playing and stops at the end of media.

use super::state::PlaybackStore;
use crate::application::port::MediaResource;
use crate::domain::video::PollInterval;
use std::time::Instant;

/// How the mirrored position follows the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionSync {
    /// `timeupdate` events arrive; nothing to poll.
    Push,
    /// No push events; read the position every interval.
    Poll(PollInterval),
}

impl PositionSync {
    /// Chooses the strategy once, from what the resource advertises.
    pub fn for_media(media: &impl MediaResource, interval: PollInterval) -> Self {
        if media.emits_time_updates() {
            Self::Push
        } else {
            Self::Poll(interval)
        }
    }
}

/// Fixed-interval position poller, active only in [`PositionSync::Poll`].
#[derive(Debug, Clone)]
pub struct PositionPoller {
    strategy: PositionSync,
    next_poll: Option<Instant>,
}

impl PositionPoller {
    pub fn new(strategy: PositionSync) -> Self {
        Self {
            strategy,
            next_poll: None,
        }
    }

    pub fn strategy(&self) -> PositionSync {
        self.strategy
    }

    /// Arms the poller. A running poller is re-armed from `now`.
    pub fn start(&mut self, now: Instant) {
        if let PositionSync::Poll(interval) = self.strategy {
            self.next_poll = Some(now + interval.as_duration());
        }
    }

    pub fn stop(&mut self) {
        self.next_poll = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_poll.is_some()
    }

    /// When the next poll is due.
    pub fn deadline(&self) -> Option<Instant> {
        self.next_poll
    }

    /// Polls the resource if due. Returns true if the mirror was refreshed.
    ///
    /// The poller disarms itself once playback is paused or the position has
    /// reached the duration.
    pub fn poll<M: MediaResource>(&mut self, now: Instant, store: &mut PlaybackStore<M>) -> bool {
        let (Some(due), PositionSync::Poll(interval)) = (self.next_poll, self.strategy) else {
            return false;
        };
        if now < due {
            return false;
        }

        if store.sync_position_from_media().is_none() {
            self.stop();
            return false;
        }

        let state = store.state();
        if state.is_paused || state.is_at_end() {
            self.stop();
        } else {
            self.next_poll = Some(now + interval.as_duration());
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::{SkipClampPolicy, VolumeLevel};
    use crate::infrastructure::simulated::SimulatedMedia;
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn playing_store(media: SimulatedMedia) -> PlaybackStore<SimulatedMedia> {
        let mut store = PlaybackStore::new(VolumeLevel::default(), SkipClampPolicy::Overshoot);
        store.bind(media);
        store.toggle_playback();
        store
    }

    #[test]
    fn strategy_follows_push_support() {
        let interval = PollInterval::default();
        assert_eq!(
            PositionSync::for_media(&SimulatedMedia::new(10.0), interval),
            PositionSync::Push
        );
        assert_eq!(
            PositionSync::for_media(&SimulatedMedia::new(10.0).with_push_events(false), interval),
            PositionSync::Poll(interval)
        );
    }

    #[test]
    fn push_strategy_never_arms() {
        let mut poller = PositionPoller::new(PositionSync::Push);
        poller.start(Instant::now());
        assert!(!poller.is_running());
        assert!(poller.deadline().is_none());
    }

    #[test]
    fn poll_refreshes_position_when_due() {
        let t0 = Instant::now();
        let mut store = playing_store(SimulatedMedia::new(60.0).with_push_events(false));
        let mut poller = PositionPoller::new(PositionSync::Poll(PollInterval::new(100)));
        poller.start(t0);

        store.media_mut().unwrap().advance(0.1);
        assert!(!poller.poll(t0 + ms(50), &mut store));
        assert!(poller.poll(t0 + ms(100), &mut store));
        assert_abs_diff_eq!(store.state().position_secs, 0.1);
        assert_eq!(poller.deadline(), Some(t0 + ms(200)));
    }

    #[test]
    fn poll_stops_at_end_of_media() {
        let t0 = Instant::now();
        let mut store = playing_store(SimulatedMedia::new(1.0).with_push_events(false));
        let mut poller = PositionPoller::new(PositionSync::Poll(PollInterval::new(100)));
        poller.start(t0);

        store.media_mut().unwrap().set_current_time(1.0);
        assert!(poller.poll(t0 + ms(100), &mut store));
        assert!(!poller.is_running());
    }

    #[test]
    fn poll_stops_when_paused() {
        let t0 = Instant::now();
        let mut store = playing_store(SimulatedMedia::new(60.0).with_push_events(false));
        let mut poller = PositionPoller::new(PositionSync::Poll(PollInterval::new(100)));
        poller.start(t0);

        store.toggle_playback();
        assert!(poller.poll(t0 + ms(100), &mut store));
        assert!(!poller.is_running());
    }
}
