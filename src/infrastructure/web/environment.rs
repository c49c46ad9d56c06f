// SPDX-License-Identifier: MPL-2.0
//! Browser environment queries.

use crate::application::port::PlatformEnvironment;
use crate::domain::ui::{FullscreenApi, FullscreenTarget, Orientation};
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlVideoElement, OrientationType, Window};

const FULLSCREEN_ELEMENT_PROPERTIES: [&str; 4] = [
    "fullscreenElement",
    "webkitFullscreenElement",
    "mozFullScreenElement",
    "msFullscreenElement",
];

/// [`PlatformEnvironment`] over the live `window`/`document`.
#[derive(Clone)]
pub struct BrowserEnvironment {
    window: Window,
    document: Document,
    container: Element,
    video: HtmlVideoElement,
}

impl BrowserEnvironment {
    /// Returns `None` outside a browser main thread.
    pub fn new(container: Element, video: HtmlVideoElement) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            container,
            video,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn video(&self) -> &HtmlVideoElement {
        &self.video
    }

    fn has_method(&self, api: FullscreenApi) -> bool {
        let Some((request, _)) = api.method_names() else {
            return false;
        };
        let element: &JsValue = match api.target() {
            FullscreenTarget::Container => self.container.as_ref(),
            FullscreenTarget::MediaElement => self.video.as_ref(),
        };
        Reflect::get(element, &JsValue::from_str(request))
            .is_ok_and(|method| method.is_instance_of::<Function>())
    }
}

impl PlatformEnvironment for BrowserEnvironment {
    fn orientation(&self) -> Orientation {
        read_orientation(&self.window)
    }

    fn fullscreen_element_active(&self) -> bool {
        fullscreen_element_active(&self.document)
            || Reflect::get(self.video.as_ref(), &JsValue::from_str("webkitDisplayingFullscreen"))
                .is_ok_and(|displaying| displaying.is_truthy())
    }

    fn supported_fullscreen_apis(&self) -> Vec<FullscreenApi> {
        FullscreenApi::PRIORITY
            .into_iter()
            .chain([FullscreenApi::WebkitVideo])
            .filter(|api| self.has_method(*api))
            .collect()
    }
}

/// True if any vendor variant of `document.fullscreenElement` is set.
pub(super) fn fullscreen_element_active(document: &Document) -> bool {
    FULLSCREEN_ELEMENT_PROPERTIES.iter().any(|property| {
        Reflect::get(document.as_ref(), &JsValue::from_str(property))
            .is_ok_and(|element| !element.is_null() && !element.is_undefined())
    })
}

/// Screen Orientation API first, legacy `window.orientation` angle second.
pub(super) fn read_orientation(window: &Window) -> Orientation {
    if let Some(kind) = window
        .screen()
        .ok()
        .and_then(|screen| screen.orientation().type_().ok())
    {
        return if matches!(
            kind,
            OrientationType::LandscapePrimary | OrientationType::LandscapeSecondary
        ) {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
    }

    Reflect::get(window.as_ref(), &JsValue::from_str("orientation"))
        .ok()
        .and_then(|angle| angle.as_f64())
        .map_or(Orientation::Portrait, |angle| {
            Orientation::from_angle(angle as i32)
        })
}
