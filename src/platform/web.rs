//! Browser host: window size, requestAnimationFrame, page feed

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::{FEED_ELEMENT_ID, feed_or_empty};
use crate::achievement::Achievement;
use crate::driver::FrameHandle;
use crate::sim::Viewport;

/// Current `innerWidth`/`innerHeight`, sanitized
pub fn viewport_from_window() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::default();
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::sanitized(dim(window.inner_width()), dim(window.inner_height()))
}

/// Schedule `f` for the next animation frame
pub fn request_frame(f: impl FnOnce(f64) + 'static) -> Option<FrameHandle> {
    let window = web_sys::window()?;
    let closure = Closure::once(f);
    let handle = window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
        .map(FrameHandle);
    closure.forget();
    handle
}

/// Cancel a scheduled frame
pub fn cancel_frame(handle: FrameHandle) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}

/// Achievement feed embedded in the page
pub fn feed_from_page() -> Vec<Achievement> {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FEED_ELEMENT_ID))
        .and_then(|el| el.text_content());
    feed_or_empty(json.as_deref())
}
