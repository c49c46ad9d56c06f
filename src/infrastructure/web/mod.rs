// SPDX-License-Identifier: MPL-2.0
//! Browser adapters over `web-sys`.
//!
//! - [`HtmlMediaResource`]: the `<video>` element as a [`MediaResource`]
//! - [`BrowserFullscreen`]: vendor fullscreen methods called by name
//! - [`BrowserEnvironment`]: orientation and fullscreen status queries
//! - [`EventBridge`]: DOM events forwarded as controller messages
//!
//! [`MediaResource`]: crate::application::port::MediaResource

mod environment;
mod events;
mod fullscreen;
mod media;

pub use environment::BrowserEnvironment;
pub use events::EventBridge;
pub use fullscreen::BrowserFullscreen;
pub use media::HtmlMediaResource;

use crate::application::port::{FullscreenController, PlatformEnvironment};
use crate::app::subscription::MessageSender;

/// Probes the platform once and returns the controller for its preferred API.
pub fn probe_fullscreen(
    environment: &BrowserEnvironment,
    events: Option<MessageSender>,
) -> Box<dyn FullscreenController> {
    let api = environment.preferred_fullscreen_api();
    tracing::debug!(?api, "fullscreen api probed");
    Box::new(BrowserFullscreen::new(
        api,
        environment.document().clone(),
        environment.container().clone(),
        environment.video().clone(),
        events,
    ))
}
