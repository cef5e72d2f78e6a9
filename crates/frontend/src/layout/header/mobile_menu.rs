//! Mobile navigation drawer.
//!
//! `[data-toggle="mobile-menu"]` opens and closes `#mobile-menu`. The drawer
//! closes on a link click inside it, on Escape and on any click outside.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent, Node};

use crate::shared::dom;

/// Matches the CSS slide-out transition
const HIDE_AFTER_MS: u32 = 260;

struct MobileMenu {
    toggle: HtmlElement,
    menu: HtmlElement,
    menu_icon: Option<Element>,
    close_icon: Option<Element>,
    open: Cell<bool>,
}

impl MobileMenu {
    fn set_open(&self, open: bool) {
        self.open.set(open);

        if open {
            dom::set_class(&self.menu, "hidden", false);
            // force a reflow so the transition runs
            let _ = self.menu.offset_width();
            dom::set_class(&self.menu, "open", true);
        } else {
            dom::set_class(&self.menu, "open", false);
            let menu = self.menu.clone();
            Timeout::new(HIDE_AFTER_MS, move || dom::set_class(&menu, "hidden", true)).forget();
        }

        dom::set_attr(&self.toggle, "aria-expanded", dom::bool_attr(open));
        dom::set_attr(&self.menu, "aria-hidden", dom::bool_attr(!open));
        lock_scroll(open);

        if let Some(icon) = &self.menu_icon {
            dom::set_class(icon, "hidden", open);
        }
        if let Some(icon) = &self.close_icon {
            dom::set_class(icon, "hidden", !open);
        }
    }

    fn contains(&self, target: Option<&Node>) -> (bool, bool) {
        (self.menu.contains(target), self.toggle.contains(target))
    }
}

fn lock_scroll(lock: bool) {
    if let Some(body) = dom::body() {
        let _ = body
            .style()
            .set_property("overflow", if lock { "hidden" } else { "" });
    }
    if let Some(root) = dom::root_element() {
        let _ = root
            .style()
            .set_property("overscroll-behavior", if lock { "contain" } else { "" });
    }
}

fn event_node(ev: &MouseEvent) -> Option<Node> {
    ev.target().and_then(|t| t.dyn_into::<Node>().ok())
}

pub fn init_mobile_menu() {
    let toggle = dom::query("[data-toggle=\"mobile-menu\"]")
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    let menu = dom::by_id("mobile-menu").and_then(|e| e.dyn_into::<HtmlElement>().ok());
    let (Some(toggle), Some(menu)) = (toggle, menu) else {
        return;
    };

    let state = Rc::new(MobileMenu {
        menu_icon: toggle.query_selector(".menu-icon").ok().flatten(),
        close_icon: toggle.query_selector(".close-icon").ok().flatten(),
        open: Cell::new(menu.class_list().contains("open")),
        toggle,
        menu,
    });

    let s = Rc::clone(&state);
    dom::listen(&state.toggle, "click", move |_: MouseEvent| {
        s.set_open(!s.open.get());
    });

    let s = Rc::clone(&state);
    dom::listen(&state.menu, "click", move |ev: MouseEvent| {
        let on_link = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|e| e.closest("a").ok().flatten())
            .is_some();
        if on_link {
            s.set_open(false);
        }
    });

    let Some(document) = dom::document() else {
        return;
    };

    let s = Rc::clone(&state);
    dom::listen(&document, "keydown", move |ev: KeyboardEvent| {
        if ev.key() == "Escape" && s.open.get() {
            s.set_open(false);
            let _ = s.toggle.focus();
        }
    });

    let s = Rc::clone(&state);
    dom::listen(&document, "click", move |ev: MouseEvent| {
        if !s.open.get() {
            return;
        }
        let target = event_node(&ev);
        let (within_menu, on_toggle) = s.contains(target.as_ref());
        if !within_menu && !on_toggle {
            s.set_open(false);
        }
    });
}
