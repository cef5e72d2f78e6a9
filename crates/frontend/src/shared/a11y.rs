//! Skip-to-content support.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::shared::dom;

const MAIN_ID: &str = "main";

fn focus_main() {
    let Some(main) = dom::by_id(MAIN_ID).and_then(|e| e.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    if !main.has_attribute("tabindex") {
        dom::set_attr(&main, "tabindex", "-1");
    }
    let _ = main.focus();
}

/// Focus `#main` on the next tick, after the browser has scrolled to it.
fn focus_main_later() {
    Timeout::new(0, focus_main).forget();
}

pub fn init_skip_links() {
    for link in dom::query_all("a[href=\"#main\"]") {
        dom::listen(&link, "click", |_: MouseEvent| focus_main_later());
    }
    if dom::location_hash() == "#main" {
        focus_main_later();
    }
}
