//! CTA click reporting through the page's `gtag`.

use contracts::shared::analytics::{AnalyticsEvent, CtaClick};
use js_sys::{Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::MouseEvent;

use crate::shared::dom;

/// `window.gtag`, if the analytics snippet is loaded.
fn gtag() -> Option<Function> {
    let window = dom::window()?;
    Reflect::get(&window, &JsValue::from_str("gtag"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Send one event. Silently skipped when `gtag` is not on the page.
pub fn send_event(event: &AnalyticsEvent) {
    let Some(gtag) = gtag() else {
        return;
    };
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let params = match event.params.serialize(&serializer) {
        Ok(p) => p,
        Err(e) => {
            log::warn!("analytics: cannot serialize '{}': {}", event.name, e);
            return;
        }
    };
    if let Err(e) = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(&event.name),
        &params,
    ) {
        log::warn!("analytics: gtag failed for '{}': {:?}", event.name, e);
    }
}

/// Report clicks on every `[data-cta]` element.
pub fn init_cta_tracking() {
    for element in dom::query_all("[data-cta]") {
        let source = element.clone();
        dom::listen(&element, "click", move |_: MouseEvent| {
            let click = CtaClick {
                label: source.get_attribute("data-cta").unwrap_or_default(),
                location: source.get_attribute("data-cta-location"),
                page_path: dom::location_pathname(),
            };
            send_event(&click.to_event());
        });
    }
}
