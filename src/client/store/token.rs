//! Token persistence in browser local storage.
//!
//! Storage can be absent or blocked (private windows, disabled cookies).
//! None of these operations fail the caller over it; a session that cannot
//! be persisted simply will not survive a reload.

use dioxus_logger::tracing;
use web_sys::Storage;

const TOKEN_STORAGE_KEY: &str = "paceline.session-token";

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// The token left behind by an earlier visit, if any.
pub fn load() -> Option<String> {
    storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
}

pub fn save(token: &str) {
    let Some(storage) = storage() else {
        tracing::warn!("local storage unavailable, session will not survive a reload");
        return;
    };

    if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
        tracing::warn!("failed to persist session token");
    }
}

pub fn delete() {
    let Some(storage) = storage() else {
        return;
    };

    if storage.remove_item(TOKEN_STORAGE_KEY).is_err() {
        tracing::warn!("failed to clear persisted session token");
    }
}
