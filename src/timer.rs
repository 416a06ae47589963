//! `setTimeout` wrapper

use portal_core::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::dom::js_error;

/// Run `f` once after `delay_ms`; returns the browser's timer handle
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) -> Result<i32> {
    let window = web_sys::window().ok_or_else(|| Error::dom("no window available"))?;
    let callback = Closure::once_into_js(f);
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        .map_err(js_error)
}
