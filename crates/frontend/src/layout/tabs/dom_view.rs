//! DOM side of the services tab strip.
//!
//! Expected markup:
//! ```html
//! <div id="tablist">
//!   <button class="tab" data-tab="t0">…</button>
//!   …
//! </div>
//! <section class="panel" id="t0">…</section>
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use contracts::shared::events::{TabViewEvent, TAB_VIEW_EVENT};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent};

use super::controller::{TabController, TabView, TriggerState};
use super::navigator::TabNavigator;
use crate::shared::dom;

const TABLIST_SELECTOR: &str = "#tablist";
const TRIGGER_SELECTOR: &str = "#tablist .tab";
const PANEL_SELECTOR: &str = ".panel";

const ACTIVE_CLASSES: [&str; 3] = ["bg-surface-1", "text-primary", "font-semibold"];
const INACTIVE_CLASSES: [&str; 2] = ["text-subtle", "font-medium"];
const INACTIVE_REMOVED: [&str; 3] = ["bg-surface-1", "text-primary", "font-semibold"];
const ACTIVE_REMOVED: [&str; 3] = ["text-subtle", "text-bg/80", "font-medium"];

/// Writes controller state onto the page. Triggers are ordered like the
/// navigator ids; panels include every `.panel`, so stray ones stay hidden.
pub struct DomTabView {
    triggers: Vec<HtmlElement>,
    panels: Vec<Element>,
}

impl DomTabView {
    pub fn new(triggers: Vec<HtmlElement>, panels: Vec<Element>) -> Self {
        Self { triggers, panels }
    }
}

impl TabView for DomTabView {
    fn render(&mut self, ids: &[String], selected: usize) {
        for (index, trigger) in self.triggers.iter().enumerate() {
            let state = TriggerState::for_trigger(index, selected);
            dom::set_attr(trigger, "aria-selected", state.aria_selected);
            dom::set_attr(trigger, "tabindex", state.tabindex);
            if state.is_selected() {
                dom::add_classes(trigger, &ACTIVE_CLASSES);
                dom::remove_classes(trigger, &ACTIVE_REMOVED);
            } else {
                dom::remove_classes(trigger, &INACTIVE_REMOVED);
                dom::add_classes(trigger, &INACTIVE_CLASSES);
            }
        }

        let active = &ids[selected];
        for panel in &self.panels {
            dom::set_class(panel, "hidden", &panel.id() != active);
        }
    }

    fn replace_hash(&mut self, fragment: &str) {
        let Some(window) = dom::window() else {
            return;
        };
        let href = match window.location().href() {
            Ok(h) => h,
            Err(_) => return,
        };
        let url = match web_sys::Url::new(&href) {
            Ok(u) => u,
            Err(e) => {
                log::warn!("tabs: cannot parse location {}: {:?}", href, e);
                return;
            }
        };
        url.set_hash(fragment);
        let replaced = window
            .history()
            .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(&url.href())));
        if let Err(e) = replaced {
            log::warn!("tabs: cannot replace history entry with {}: {:?}", url.href(), e);
        }
    }

    fn focus_trigger(&mut self, index: usize) {
        if let Some(trigger) = self.triggers.get(index) {
            let _ = trigger.focus();
        }
    }

    fn notify(&mut self, event: &TabViewEvent) {
        dom::dispatch_custom(TAB_VIEW_EVENT, event);
    }
}

/// Wire the services tab strip if the page has one.
pub fn init_service_tabs() {
    let Some(tablist) = dom::query(TABLIST_SELECTOR) else {
        return;
    };

    let panels = dom::query_all(PANEL_SELECTOR);
    let mut ids = Vec::new();
    let mut triggers = Vec::new();
    for element in dom::query_all(TRIGGER_SELECTOR) {
        let Some(id) = element.get_attribute("data-tab") else {
            continue;
        };
        if !panels.iter().any(|p| p.id() == id) {
            log::warn!("tabs: trigger '{}' has no panel, skipping", id);
            continue;
        }
        let Ok(trigger) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        dom::set_attr(&trigger, "role", "tab");
        dom::set_attr(&trigger, "aria-controls", &id);
        ids.push(id);
        triggers.push(trigger);
    }
    dom::set_attr(&tablist, "role", "tablist");

    let navigator = match TabNavigator::new(ids) {
        Ok(n) => n,
        Err(e) => {
            log::warn!("tabs: {}", e);
            return;
        }
    };
    log::info!("tabs: {} tabs wired", navigator.len());

    let controller = Rc::new(RefCell::new(TabController::new(
        navigator,
        DomTabView::new(triggers.clone(), panels),
    )));
    controller.borrow_mut().init(&dom::location_hash());

    for (index, trigger) in triggers.iter().enumerate() {
        let c = Rc::clone(&controller);
        dom::listen(trigger, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            if let Ok(mut c) = c.try_borrow_mut() {
                let _ = c.click(index);
            }
        });

        // focus() issued by the controller re-enters here while it is borrowed
        let c = Rc::clone(&controller);
        dom::listen(trigger, "focusin", move |_: web_sys::Event| {
            if let Ok(mut c) = c.try_borrow_mut() {
                c.focus_entered(index);
            }
        });
    }

    let c = Rc::clone(&controller);
    dom::listen(&tablist, "keydown", move |ev: KeyboardEvent| {
        let Ok(mut c) = c.try_borrow_mut() else {
            return;
        };
        if c.key_down(&ev.key()) {
            ev.prevent_default();
        }
    });

    if let Some(window) = dom::window() {
        let c = Rc::clone(&controller);
        dom::listen(&window, "hashchange", move |_: web_sys::Event| {
            if let Ok(mut c) = c.try_borrow_mut() {
                c.hash_changed(&dom::location_hash());
            }
        });
    }
}
