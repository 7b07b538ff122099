//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use filegrid_core::DeviceProbe;
use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::config::MOBILE_BREAKPOINT_QUERY;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Check whether the browser exposes the legacy `window.orientation` property.
fn has_orientation() -> bool {
    window().is_some_and(|w| {
        js_sys::Reflect::has(&w, &JsValue::from_str("orientation")).unwrap_or(false)
    })
}

/// Get the user agent string, empty when unavailable.
fn user_agent() -> String {
    window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

/// Touch platforms either expose `window.orientation` or identify as IEMobile.
pub fn is_touch_platform(has_orientation: bool, user_agent: &str) -> bool {
    has_orientation || user_agent.contains("IEMobile")
}

// =============================================================================
// Device Probe
// =============================================================================

/// [`DeviceProbe`] backed by the live browser.
///
/// The breakpoint answer is a reactive signal, so layouts derived from
/// [`DeviceProbe::snapshot`] inside a memo recompute when the viewport
/// crosses it. Touch capability is sampled once at creation.
#[derive(Clone, Copy)]
pub struct BrowserDevice {
    mobile: Signal<bool>,
    touch: bool,
}

impl BrowserDevice {
    pub fn new() -> Self {
        Self {
            mobile: use_media_query(MOBILE_BREAKPOINT_QUERY),
            touch: is_touch_platform(has_orientation(), &user_agent()),
        }
    }
}

impl Default for BrowserDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceProbe for BrowserDevice {
    fn is_mobile_breakpoint(&self) -> bool {
        self.mobile.get()
    }

    fn is_touch_device(&self) -> bool {
        self.touch
    }
}
