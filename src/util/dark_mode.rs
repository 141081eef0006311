//! Dark mode preference handling.
//!
//! The preference lives in `localStorage`; applying it sets the
//! `.dark-mode` class on the `<html>` element so the stylesheet's variable
//! overrides take effect. Requires a browser environment; on the server
//! everything is a no-op reporting light mode.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "support_plan_dark";

/// Load the stored preference (falling back to the system color scheme),
/// apply it to the document, and report the resulting mode.
pub fn init() -> bool {
    let enabled = stored_preference();
    set_document_class(enabled);
    enabled
}

/// Flip dark mode, persist the choice, and report the new mode.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    set_document_class(next);
    store_preference(next);
    next
}

#[cfg(feature = "hydrate")]
fn stored_preference() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
            return value == "true";
        }
    }

    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map_or(false, |query| query.matches())
}

#[cfg(feature = "hydrate")]
fn store_preference(enabled: bool) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, if enabled { "true" } else { "false" });
        }
    }
}

#[cfg(feature = "hydrate")]
fn set_document_class(enabled: bool) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = el.class_list();
        if enabled {
            let _ = class_list.add_1("dark-mode");
        } else {
            let _ = class_list.remove_1("dark-mode");
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn stored_preference() -> bool {
    false
}

#[cfg(not(feature = "hydrate"))]
fn store_preference(_enabled: bool) {}

#[cfg(not(feature = "hydrate"))]
fn set_document_class(_enabled: bool) {}
