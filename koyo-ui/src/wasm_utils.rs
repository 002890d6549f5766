//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a Rust `Closure` must keep the closure
//! alive for as long as it is attached. `Closure::forget()` leaks it and
//! leaves the listener attached forever, so instead the closure lives in a
//! guard that removes the listener in `Drop`:
//!
//! ```ignore
//! // Listener is attached when the guard is created
//! let listener = EventListener::new(document.as_ref(), "keydown", callback);
//!
//! // ...and removed when the guard goes out of scope or is dropped
//! drop(listener);
//! ```
//!
//! With Dioxus, keep the guard in a `Signal<Option<_>>` and set it to `None`
//! to detach. When the owning component unmounts the signal is dropped,
//! which detaches the listener as well.

use wasm_bindgen_x::prelude::*;

/// An event listener that removes itself when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl EventListener {
    /// Attaches `callback` for `event_name` on `target`.
    pub fn new(
        target: &web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target: target.clone(),
            event_name,
            callback,
        }
    }

    /// Attaches a passive listener (for scroll and touch events).
    pub fn passive(
        target: &web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        let options = web_sys_x::AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_name,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok();

        Self {
            target: target.clone(),
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Read a string property of a JS event (e.g. `key`).
pub fn event_string(event: &JsValue, name: &str) -> Option<String> {
    js_sys_x::Reflect::get(event, &name.into())
        .ok()
        .and_then(|v| v.as_string())
}

/// Read a boolean property of a JS event (e.g. `shiftKey`).
pub fn event_flag(event: &JsValue, name: &str) -> bool {
    js_sys_x::Reflect::get(event, &name.into())
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Call `preventDefault()` on a JS event.
pub fn prevent_default(event: &JsValue) {
    if let Some(event) = event.dyn_ref::<web_sys_x::Event>() {
        event.prevent_default();
    }
}
