//! Address-bar plumbing.
//!
//! Ordinary navigation happens through plain `#/...` anchors, which the
//! browser turns into history entries and `hashchange` events on its own.
//! This module covers the rest: reading the hash, applying the effects the
//! router hands back, and wiring the change listener. History rewrites here
//! do not fire `hashchange`, so whoever applies an effect also owns updating
//! the page state.

use dioxus_logger::tracing;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::client::router::NavEffect;

/// The raw location hash, `#` included. Empty on the bare application URL.
pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

/// Rewrites the address bar as the router asked.
pub fn apply(effect: NavEffect) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        tracing::warn!("history unavailable, address bar left untouched");
        return;
    };

    let result = match effect {
        NavEffect::ReplaceUrl(url) => {
            history.replace_state_with_url(&JsValue::NULL, "", Some(url))
        }
        NavEffect::PushUrl(url) => history.push_state_with_url(&JsValue::NULL, "", Some(url)),
    };

    if result.is_err() {
        tracing::warn!("failed to rewrite address bar for {effect:?}");
    }
}

/// Hands every future hash change to `handler`. The listener stays attached
/// for the lifetime of the document.
pub fn on_hash_change(mut handler: impl FnMut(String) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        handler(current_hash());
    });

    if window
        .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!("failed to attach hashchange listener");
    }

    closure.forget();
}
