// SPDX-License-Identifier: MPL-2.0
//! Async driver for the playback controller.
//!
//! Hosts push [`Message`]s into an unbounded channel; [`run`] applies them
//! and sleeps until the controller's next deadline in between, so overlay
//! hides and position polls fire on time without a fixed-rate tick.

use super::{Message, PlaybackController};
use crate::application::port::MediaResource;
use crate::ui::controls::ControlsView;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Sending half handed to hosts.
pub type MessageSender = mpsc::UnboundedSender<Message>;

/// Creates the message channel for [`run`].
pub fn channel() -> (MessageSender, mpsc::UnboundedReceiver<Message>) {
    mpsc::unbounded_channel()
}

/// Drives `controller` until every sender is dropped, then returns it.
///
/// `observer` receives the initial view and every view that changed.
pub async fn run<M, F>(
    mut controller: PlaybackController<M>,
    mut messages: mpsc::UnboundedReceiver<Message>,
    mut observer: F,
) -> PlaybackController<M>
where
    M: MediaResource,
    F: FnMut(&ControlsView),
{
    let mut last_view = controller.view();
    observer(&last_view);

    loop {
        let deadline = controller.next_deadline();
        tokio::select! {
            message = messages.recv() => {
                let Some(message) = message else {
                    tracing::debug!("message channel closed, stopping driver");
                    break;
                };
                controller.update(message, Instant::now().into_std());
            }
            () = sleep_until(deadline) => {
                controller.tick(Instant::now().into_std());
            }
        }

        let view = controller.view();
        if view != last_view {
            observer(&view);
            last_view = view;
        }
    }

    controller
}

async fn sleep_until(deadline: Option<std::time::Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControllerSettings;
    use crate::domain::ui::FullscreenApi;
    use crate::domain::video::SkipDirection;
    use crate::infrastructure::simulated::{
        FullscreenResponse, SimulatedFullscreen, SimulatedMedia, SimulatedPlatform,
        SimulatedScreen,
    };
    use crate::test_utils::assert_abs_diff_eq;
    use std::cell::RefCell;
    use std::time::Duration;

    fn mounted_controller() -> PlaybackController<SimulatedMedia> {
        let screen = SimulatedScreen::default();
        let platform = SimulatedPlatform::new(screen.clone(), vec![FullscreenApi::Standard]);
        let fullscreen =
            SimulatedFullscreen::new(FullscreenApi::Standard, screen, FullscreenResponse::Enter);
        let mut controller = PlaybackController::new(
            ControllerSettings::default(),
            Box::new(fullscreen),
            Box::new(platform),
        );
        controller.mount(SimulatedMedia::new(60.0));
        controller
    }

    #[tokio::test(start_paused = true)]
    async fn indicator_hides_after_last_trigger() {
        let t0 = Instant::now();
        let hides = RefCell::new(Vec::new());
        let (tx, rx) = channel();

        let script = async move {
            tx.send(Message::SkipDoubleClicked(SkipDirection::Forward))
                .unwrap();
            tokio::time::sleep(Duration::from_millis(400)).await;
            tx.send(Message::SkipDoubleClicked(SkipDirection::Forward))
                .unwrap();
            tokio::time::sleep(Duration::from_millis(1000)).await;
        };
        let observer = |view: &ControlsView| {
            if !view.forward_visible {
                hides.borrow_mut().push(Instant::now() - t0);
            }
        };

        let (controller, ()) = tokio::join!(run(mounted_controller(), rx, observer), script);

        let hides = hides.into_inner();
        // initial view, then the hide
        assert_eq!(hides.len(), 2);
        assert_eq!(hides[0], Duration::ZERO);
        assert!(hides[1] >= Duration::from_millis(900));
        assert!(hides[1] < Duration::from_millis(905));
        assert_abs_diff_eq!(controller.state().position_secs, 20.0);
    }

    #[tokio::test(start_paused = true)]
    async fn driver_stops_when_senders_drop() {
        let (tx, rx) = channel();
        tx.send(Message::TogglePlayback).unwrap();
        drop(tx);

        let controller = run(mounted_controller(), rx, |_| {}).await;
        assert!(!controller.state().is_paused);
    }
}
