use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::api;
use super::validation::{is_formspree_action, Field};
use crate::shared::dom;

const SUBMIT_ERROR: &str = "There was a problem submitting the form. Please try again.";

/// Current value of an `<input>` or `<textarea>`; `None` when the field is absent.
fn field_value(field: Field) -> Option<String> {
    let element = dom::by_id(field.input_id())?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|t| t.value())
}

fn show_error(field: Field, show: bool) {
    if let Some(error) = dom::by_id(&field.error_id()) {
        dom::set_class(&error, "hidden", !show);
    }
    if let Some(input) = dom::by_id(field.input_id()) {
        dom::set_attr(&input, "aria-invalid", dom::bool_attr(show));
        dom::set_class(&input, "border-danger", show);
    }
}

/// Validate every present field, marking errors. Absent fields are skipped.
fn validate() -> bool {
    let mut valid = true;
    for field in Field::all() {
        let Some(value) = field_value(field) else {
            continue;
        };
        let ok = field.is_valid(&value);
        show_error(field, !ok);
        valid &= ok;
    }
    valid
}

fn alert(message: &str) {
    if let Some(w) = dom::window() {
        let _ = w.alert_with_message(message);
    }
}

/// Attach validation and submission to the form with the given id.
pub fn init_form_validation(form_id: &str) {
    let Some(form) = dom::by_id(form_id).and_then(|e| e.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    let target = form.clone();
    dom::listen(&form, "submit", move |ev: Event| {
        ev.prevent_default();
        if !validate() || !is_formspree_action(&target.action()) {
            return;
        }

        let form = target.clone();
        spawn_local(async move {
            match api::submit_form(&form).await {
                Ok(()) => {
                    if let Some(message) = dom::by_id("form-message") {
                        dom::set_class(&message, "hidden", false);
                        dom::set_class(&message, "show", true);
                    }
                    form.reset();
                }
                Err(e) => {
                    log::error!("contact form: {}", e);
                    alert(SUBMIT_ERROR);
                }
            }
        });
    });
}
