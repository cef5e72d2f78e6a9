//! `localStorage` access. Every failure (private mode, quota, no window) reads as "no value".

use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_item(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn set_item(key: &str, value: &str) {
    match local_storage() {
        Some(storage) => {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("localStorage: cannot save '{}': {:?}", key, e);
            }
        }
        None => log::warn!("localStorage unavailable, '{}' not saved", key),
    }
}
