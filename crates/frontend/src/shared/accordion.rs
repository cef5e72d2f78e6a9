//! FAQ accordions: one `.accordion-content` open at a time.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::shared::dom;

const PLUS_ICON: &str = r#"<svg aria-hidden="true" focusable="false" xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-plus"><line x1="12" y1="5" x2="12" y2="19"></line><line x1="5" y1="12" x2="19" y2="12"></line></svg>"#;
const MINUS_ICON: &str = r#"<svg aria-hidden="true" focusable="false" xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-minus"><line x1="5" y1="12" x2="19" y2="12"></line></svg>"#;

fn set_icon(header: Option<Element>, svg: &str) {
    if let Some(icon) = header.and_then(|h| h.query_selector("span").ok().flatten()) {
        icon.set_inner_html(svg);
    }
}

fn set_max_height(content: &Element, value: &str) {
    if let Some(content) = content.dyn_ref::<HtmlElement>() {
        let _ = content.style().set_property("max-height", value);
    }
}

fn close(content: &Element) {
    dom::set_class(content, "active", false);
    set_max_height(content, "0");
    set_icon(content.previous_element_sibling(), PLUS_ICON);
}

fn open(header: &Element, content: &Element) {
    dom::set_class(content, "active", true);
    set_max_height(content, &format!("{}px", content.scroll_height()));
    set_icon(Some(header.clone()), MINUS_ICON);
}

pub fn init_accordions() {
    for header in dom::query_all(".accordion-header") {
        let target = header.clone();
        dom::listen(&header, "click", move |_: MouseEvent| {
            let Some(content) = target.next_element_sibling() else {
                return;
            };
            if content.class_list().contains("active") {
                close(&content);
            } else {
                for other in dom::query_all(".accordion-content.active") {
                    close(&other);
                }
                open(&target, &content);
            }
        });
    }
}
