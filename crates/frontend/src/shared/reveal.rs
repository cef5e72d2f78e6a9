//! Scroll-triggered reveal animations.
//!
//! Elements with `.fade-in`, `.fade-in-up` or `.reveal` get `is-visible` the
//! first time they enter the viewport and are then no longer observed.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::shared::dom;

const REVEAL_SELECTOR: &str = ".fade-in, .fade-in-up, .reveal";
const THRESHOLD: f64 = 0.1;

pub fn init_scroll_animations() {
    let targets = dom::query_all(REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::set_class(&target, "is-visible", true);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&THRESHOLD.into());

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(o) => o,
            Err(e) => {
                // old browsers: show everything right away
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                for target in &targets {
                    dom::set_class(target, "is-visible", true);
                }
                return;
            }
        };
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
}
