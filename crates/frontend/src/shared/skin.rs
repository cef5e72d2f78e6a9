//! Glass skin toggle.
//!
//! Cycles Off → Subtle → Standard → Bold → Off. The variant is projected onto
//! `<body data-skin data-glass-variant>` and persisted in localStorage.

use contracts::shared::events::{SkinChangedEvent, SKIN_CHANGED_EVENT};
use contracts::shared::preferences::{GlassVariant, GLASS_VARIANT_STORAGE_KEY, SKIN_STORAGE_KEY};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{HtmlElement, MouseEvent, Node};

use crate::shared::{dom, storage};

const TOGGLE_ID: &str = "glass-toggle";
const MOBILE_QUERY: &str = "(max-width: 768px)";
const SCROLL_SETTLE_MS: u32 = 150;

fn load_variant() -> GlassVariant {
    let skin = storage::get_item(SKIN_STORAGE_KEY).unwrap_or_default();
    if skin != "glass" {
        return GlassVariant::Off;
    }
    let variant = storage::get_item(GLASS_VARIANT_STORAGE_KEY).unwrap_or_default();
    GlassVariant::from_attributes(&skin, &variant)
}

fn save_variant(variant: GlassVariant) {
    storage::set_item(SKIN_STORAGE_KEY, variant.skin());
    storage::set_item(GLASS_VARIANT_STORAGE_KEY, variant.variant());
}

fn apply_variant(body: &HtmlElement, variant: GlassVariant) {
    if variant.is_on() {
        dom::set_attr(body, "data-skin", variant.skin());
        if variant.variant().is_empty() {
            let _ = body.remove_attribute("data-glass-variant");
        } else {
            dom::set_attr(body, "data-glass-variant", variant.variant());
        }
    } else {
        let _ = body.remove_attribute("data-skin");
        let _ = body.remove_attribute("data-glass-variant");
    }
}

/// Update `aria-pressed` and the leading text node of the toggle button.
fn sync_toggle_button(variant: GlassVariant) {
    let Some(button) = dom::by_id(TOGGLE_ID) else {
        return;
    };
    dom::set_attr(&button, "aria-pressed", dom::bool_attr(variant.is_on()));
    if let Some(text) = button.child_nodes().item(0) {
        if text.node_type() == Node::TEXT_NODE {
            text.set_text_content(Some(&variant.button_text()));
        }
    }
}

pub fn skin_changed_event(variant: GlassVariant) -> SkinChangedEvent {
    SkinChangedEvent {
        skin: if variant.is_on() {
            variant.skin().to_string()
        } else {
            "default".to_string()
        },
        variant: variant.variant().to_string(),
        label: variant.label().to_string(),
    }
}

/// Blur is expensive on phones; CSS drops it while `body.scrolling` is set.
fn init_scroll_hint(body: HtmlElement) {
    let Some(window) = dom::window() else {
        return;
    };
    let mut pending: Option<Timeout> = None;
    dom::listen(&window, "scroll", move |_: web_sys::Event| {
        dom::set_class(&body, "scrolling", true);
        if let Some(previous) = pending.take() {
            previous.cancel();
        }
        let body = body.clone();
        pending = Some(Timeout::new(SCROLL_SETTLE_MS, move || {
            dom::set_class(&body, "scrolling", false);
        }));
    });
}

/// Variant that follows the given body attributes in the cycle.
pub fn next_variant(skin: &str, variant: &str) -> GlassVariant {
    GlassVariant::from_attributes(skin, variant).next()
}

/// Advance the glass cycle, persist it and announce `skinChanged`.
pub fn toggle_skin() -> Option<GlassVariant> {
    let body = dom::body()?;
    // cycle state lives in the body attributes
    let skin = body.get_attribute("data-skin").unwrap_or_default();
    let variant = body.get_attribute("data-glass-variant").unwrap_or_default();
    let next = next_variant(&skin, &variant);

    apply_variant(&body, next);
    save_variant(next);
    sync_toggle_button(next);
    log::debug!("glass skin: {}", next.label());

    dom::dispatch_custom(SKIN_CHANGED_EVENT, &skin_changed_event(next));
    Some(next)
}

/// `window.aeToggleSkin()`, called from inline handlers in the page markup.
#[wasm_bindgen(js_name = aeToggleSkin)]
pub fn ae_toggle_skin() {
    toggle_skin();
}

pub fn init_skin() {
    let Some(body) = dom::body() else {
        return;
    };

    let stored = load_variant();
    apply_variant(&body, stored);
    sync_toggle_button(stored);
    log::debug!("glass skin: {}", stored.label());

    // pages with an inline onclick already call aeToggleSkin
    if let Some(button) = dom::by_id(TOGGLE_ID) {
        if !dom::has_inline_handler(&button, "onclick") {
            dom::listen(&button, "click", move |_: MouseEvent| {
                toggle_skin();
            });
        }
    }

    if dom::media_matches(MOBILE_QUERY) {
        init_scroll_hint(body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skin_changed_event() {
        assert_eq!(
            skin_changed_event(GlassVariant::Off),
            SkinChangedEvent {
                skin: "default".to_string(),
                variant: String::new(),
                label: "Off".to_string(),
            }
        );
        assert_eq!(skin_changed_event(GlassVariant::Bold).variant, "v-bold");
        assert_eq!(skin_changed_event(GlassVariant::Standard).skin, "glass");
    }

    #[test]
    fn test_toggle_follows_body_attributes() {
        assert_eq!(next_variant("", ""), GlassVariant::Subtle);
        assert_eq!(next_variant("glass", "v-subtle"), GlassVariant::Standard);
        assert_eq!(next_variant("glass", "v-bold"), GlassVariant::Off);
        // unknown attributes restart the cycle
        assert_eq!(next_variant("neon", "v-x"), GlassVariant::Subtle);
    }
}
