//! Theme management for the site.
//!
//! Light/dark preference is kept in localStorage under `ae-theme`. With no
//! stored value the system `prefers-color-scheme` decides, and that choice is
//! stored. The theme is applied as the `dark` class on `<html>`.

use contracts::shared::preferences::{ThemeMode, THEME_STORAGE_KEY};
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::MouseEvent;

use crate::shared::{dom, storage};

const TOGGLE_ID: &str = "theme-toggle";

/// Load theme from localStorage.
fn load_theme_from_storage() -> Option<ThemeMode> {
    storage::get_item(THEME_STORAGE_KEY).map(|s| ThemeMode::from_stored(&s))
}

/// Save theme to localStorage.
fn save_theme_to_storage(theme: ThemeMode) {
    storage::set_item(THEME_STORAGE_KEY, theme.as_str());
}

fn system_theme() -> ThemeMode {
    ThemeMode::from_system(dom::media_matches("(prefers-color-scheme: dark)"))
}

/// Apply theme by toggling the `dark` class on the root element.
fn apply_theme(theme: ThemeMode) {
    if let Some(root) = dom::root_element() {
        dom::set_class(&root, "dark", theme.is_dark());
    }
    sync_toggle_button(theme);
}

/// Keep the toggle button's `aria-pressed` and label in sync.
fn sync_toggle_button(theme: ThemeMode) {
    if let Some(button) = dom::by_id(TOGGLE_ID) {
        dom::set_attr(&button, "aria-pressed", dom::bool_attr(theme.is_dark()));
        dom::set_attr(&button, "aria-label", &theme.toggle_label());
    }
}

/// Theme currently shown on the page.
pub fn current_theme() -> ThemeMode {
    let dark = dom::root_element()
        .map(|r| r.class_list().contains("dark"))
        .unwrap_or(false);
    theme_from_root_class(dark)
}

fn theme_from_root_class(has_dark_class: bool) -> ThemeMode {
    if has_dark_class {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

/// Flip between light and dark and persist the choice.
pub fn toggle_theme() -> ThemeMode {
    let next = current_theme().toggled();
    apply_theme(next);
    save_theme_to_storage(next);
    log::debug!("theme: switched to {}", next.as_str());
    next
}

/// `window.aeToggleTheme()`, called from inline handlers in the page markup.
#[wasm_bindgen(js_name = aeToggleTheme)]
pub fn ae_toggle_theme() {
    toggle_theme();
}

pub fn init_theme() {
    let theme = match load_theme_from_storage() {
        Some(theme) => theme,
        None => {
            let theme = system_theme();
            save_theme_to_storage(theme);
            theme
        }
    };
    apply_theme(theme);

    if let Some(button) = dom::by_id(TOGGLE_ID) {
        if !dom::has_inline_handler(&button, "onclick") {
            dom::listen(&button, "click", move |_: MouseEvent| {
                toggle_theme();
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_the_root_class() {
        assert_eq!(theme_from_root_class(false).toggled(), ThemeMode::Dark);
        assert_eq!(theme_from_root_class(true).toggled(), ThemeMode::Light);
        assert_eq!(
            theme_from_root_class(false).toggled().toggle_label(),
            "Toggle dark mode (currently on)"
        );
    }
}
