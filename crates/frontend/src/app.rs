//! Page bootstrap: every enhancer is independent and a no-op when its
//! markup is missing, so the same bundle runs on every page.

use js_sys::{Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use crate::layout::header::{highlight_active_nav, init_mobile_menu, init_sticky_header};
use crate::layout::tabs::init_service_tabs;
use crate::shared::a11y::init_skip_links;
use crate::shared::accordion::init_accordions;
use crate::shared::analytics::init_cta_tracking;
use crate::shared::dom;
use crate::shared::reveal::init_scroll_animations;
use crate::shared::skin::{init_skin, toggle_skin};
use crate::shared::theme::{init_theme, toggle_theme};
use crate::usecases::u101_contact_form::init_form_validation;
use crate::usecases::u102_ai_assessment::init_assessment;

const CONTACT_FORM_ID: &str = "contactForm";

/// Globals the page markup calls from inline handlers
pub const THEME_TOGGLE_GLOBAL: &str = "aeToggleTheme";
pub const SKIN_TOGGLE_GLOBAL: &str = "aeToggleSkin";
/// `window.AfriEvolution`: manual (re)initialisation entry points
pub const SITE_API_GLOBAL: &str = "AfriEvolution";

/// Members of `window.AfriEvolution` taking no arguments
const SITE_API: [(&str, fn()); 6] = [
    ("init", init_site),
    ("initMobileMenu", init_mobile_menu),
    ("initScrollAnimations", init_scroll_animations),
    ("highlightActiveNav", highlight_active_nav),
    ("initAccordions", init_accordions),
    ("initCtaTracking", init_cta_tracking),
];

pub fn init_site() {
    // preferences first, so the page does not flash the wrong skin
    init_theme();
    init_skin();
    init_skip_links();

    init_mobile_menu();
    init_scroll_animations();
    highlight_active_nav();
    init_accordions();
    init_sticky_header();
    init_cta_tracking();

    init_service_tabs();
    init_form_validation(CONTACT_FORM_ID);
    init_assessment();

    log::info!("site scripts ready");
}

fn js_function(f: impl Fn() + 'static) -> JsValue {
    Closure::wrap(Box::new(f) as Box<dyn Fn()>).into_js_value()
}

fn set_global(target: &JsValue, name: &str, value: &JsValue) {
    if let Err(e) = Reflect::set(target, &JsValue::from_str(name), value) {
        log::warn!("cannot expose {}: {:?}", name, e);
    }
}

/// Expose the toggles and `AfriEvolution` on `window`.
pub fn install_globals() {
    let Some(window) = dom::window() else {
        return;
    };
    let window = JsValue::from(window);

    set_global(&window, THEME_TOGGLE_GLOBAL, &js_function(|| {
        toggle_theme();
    }));
    set_global(&window, SKIN_TOGGLE_GLOBAL, &js_function(|| {
        toggle_skin();
    }));

    let api = Object::new();
    for (name, f) in SITE_API {
        set_global(&api, name, &js_function(f));
    }
    let init_form = Closure::wrap(Box::new(|form_id: JsValue| {
        match form_id.as_string() {
            Some(id) => init_form_validation(&id),
            None => log::warn!("initFormValidation expects a form id"),
        }
    }) as Box<dyn Fn(JsValue)>);
    set_global(&api, "initFormValidation", &init_form.into_js_value());

    set_global(&window, SITE_API_GLOBAL, &api);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_form_id_matches_markup() {
        assert_eq!(CONTACT_FORM_ID, "contactForm");
    }

    #[test]
    fn test_site_api_names() {
        let names: Vec<&str> = SITE_API.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "init",
                "initMobileMenu",
                "initScrollAnimations",
                "highlightActiveNav",
                "initAccordions",
                "initCtaTracking",
            ]
        );
        assert_eq!(THEME_TOGGLE_GLOBAL, "aeToggleTheme");
        assert_eq!(SKIN_TOGGLE_GLOBAL, "aeToggleSkin");
    }
}
