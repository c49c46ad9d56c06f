// SPDX-License-Identifier: MPL-2.0
//! DOM event listeners forwarding to the controller's message channel.

use super::environment::{fullscreen_element_active, read_orientation};
use crate::app::subscription::MessageSender;
use crate::app::{MediaEvent, Message};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlVideoElement, Window};

type Listener = Closure<dyn FnMut(Event)>;

const FULLSCREEN_CHANGE_EVENTS: [&str; 4] = [
    "fullscreenchange",
    "webkitfullscreenchange",
    "mozfullscreenchange",
    "MSFullscreenChange",
];

/// Registered listeners; removed again on drop (widget unmount).
pub struct EventBridge {
    listeners: Vec<(EventTarget, &'static str, Listener)>,
}

impl EventBridge {
    pub fn attach(
        window: &Window,
        document: &Document,
        video: &HtmlVideoElement,
        sender: &MessageSender,
    ) -> Self {
        let mut bridge = Self {
            listeners: Vec::new(),
        };

        let media_events: [(&'static str, fn(&HtmlVideoElement) -> MediaEvent); 8] = [
            ("timeupdate", |v| MediaEvent::TimeUpdate(v.current_time())),
            ("loadedmetadata", |v| MediaEvent::LoadedMetadata(v.duration())),
            ("canplay", |v| MediaEvent::LoadedMetadata(v.duration())),
            ("emptied", |_| MediaEvent::SourceChanged),
            ("play", |_| MediaEvent::Play),
            ("pause", |_| MediaEvent::Pause),
            ("ended", |_| MediaEvent::Ended),
            ("webkitendfullscreen", |_| MediaEvent::EndFullscreen),
        ];
        for (name, event) in media_events {
            let video_handle = video.clone();
            bridge.listen(video, name, sender, move || {
                Message::Media(event(&video_handle))
            });
        }
        bridge.listen(video, "webkitbeginfullscreen", sender, || {
            Message::FullscreenChanged(true)
        });

        for name in FULLSCREEN_CHANGE_EVENTS {
            let document_handle = document.clone();
            bridge.listen(document, name, sender, move || {
                Message::FullscreenChanged(fullscreen_element_active(&document_handle))
            });
        }

        let window_handle = window.clone();
        bridge.listen(window, "orientationchange", sender, move || {
            Message::OrientationChanged(read_orientation(&window_handle))
        });

        bridge
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        name: &'static str,
        sender: &MessageSender,
        mut message: impl FnMut() -> Message + 'static,
    ) {
        let sender = sender.clone();
        let listener = Listener::new(move |_event: Event| {
            if sender.send(message()).is_err() {
                tracing::debug!(event = name, "controller gone, event dropped");
            }
        });
        if let Err(err) =
            target.add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
        {
            tracing::warn!(event = name, "failed to register listener: {err:?}");
            return;
        }
        self.listeners.push((target.clone(), name, listener));
    }
}

impl Drop for EventBridge {
    fn drop(&mut self) {
        for (target, name, listener) in self.listeners.drain(..) {
            let _ =
                target.remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref());
        }
    }
}
