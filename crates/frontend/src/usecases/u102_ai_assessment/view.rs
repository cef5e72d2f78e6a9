use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};

use super::model::{AnswerField, Assessment, Step};
use crate::shared::dom;

const ROOT_ID: &str = "assessment-root";
const OPEN_SELECTOR: &str = "[data-open-assessment]";

type Choices = &'static [(&'static str, &'static str)];

const BIZ_SIZES: Choices = &[
    ("solo", "Just me"),
    ("small", "2–10 people"),
    ("medium", "11–50 people"),
    ("large", "50+ people"),
];
const INDUSTRIES: Choices = &[
    ("retail", "Retail & e-commerce"),
    ("services", "Professional services"),
    ("hospitality", "Hospitality"),
    ("manufacturing", "Manufacturing"),
    ("other", "Other"),
];
const PAIN_POINTS: Choices = &[
    ("manual-work", "Too much manual work"),
    ("leads", "Not enough leads"),
    ("customer-service", "Slow customer service"),
    ("data", "Scattered data"),
];
const FAMILIARITY: Choices = &[
    ("none", "We don't use AI yet"),
    ("some", "We've experimented a little"),
    ("moderate", "We use a few AI tools"),
    ("expert", "AI is part of how we work"),
];

/// `<select>` bound to one answer field.
#[component]
fn AnswerSelect(
    label: &'static str,
    options: Choices,
    wizard: RwSignal<Assessment>,
    field: AnswerField,
) -> impl IntoView {
    view! {
        <label class="assessment-field">
            <span>{label}</span>
            <select
                prop:value=move || wizard.with(|w| field.get(&w.answers).to_string())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| field.set(&mut w.answers, value));
                }
            >
                <option value="">"Select…"</option>
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Wizard body. Created on every open, so closing always starts over.
#[component]
fn AssessmentDialog(open: RwSignal<bool>) -> impl IntoView {
    let wizard = RwSignal::new(Assessment::default());
    let error = RwSignal::new(None::<String>);

    let close = move |_: ev::MouseEvent| open.set(false);

    let next = move |_: ev::MouseEvent| {
        let result = wizard.try_update(|w| w.next()).unwrap_or(Ok(()));
        error.set(result.err().map(|e| e.to_string()));
    };
    let prev = move |_: ev::MouseEvent| {
        wizard.update(|w| w.prev());
        error.set(None);
    };
    let submit = move |_: ev::MouseEvent| {
        let result = wizard
            .try_update(|w| w.submit().map(|_| ()))
            .unwrap_or(Ok(()));
        error.set(result.err().map(|e| e.to_string()));
    };

    let step = move || wizard.with(|w| w.step);

    view! {
        <div class="modal-overlay" on:click=close>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="assessment-title"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="modal-header">
                    <h2 id="assessment-title" class="modal-title">
                        {move || wizard.with(|w| w.title())}
                    </h2>
                    <button class="modal__close" aria-label="Close" on:click=close>
                        "×"
                    </button>
                </div>
                <div class="modal-body">
                    <Show when=move || step() == Step::Profile>
                        <AnswerSelect
                            label="How big is your business?"
                            options=BIZ_SIZES
                            wizard=wizard
                            field=AnswerField::BizSize
                        />
                        <AnswerSelect
                            label="Which industry are you in?"
                            options=INDUSTRIES
                            wizard=wizard
                            field=AnswerField::Industry
                        />
                        <button class="btn btn-primary" on:click=next>"Next"</button>
                    </Show>
                    <Show when=move || step() == Step::Challenges>
                        <AnswerSelect
                            label="What slows you down most?"
                            options=PAIN_POINTS
                            wizard=wizard
                            field=AnswerField::PainPoint
                        />
                        <AnswerSelect
                            label="How familiar is your team with AI?"
                            options=FAMILIARITY
                            wizard=wizard
                            field=AnswerField::AiFamiliarity
                        />
                        <button class="btn btn-ghost" on:click=prev>"Back"</button>
                        <button class="btn btn-primary" on:click=submit>"See results"</button>
                    </Show>
                    <Show when=move || step() == Step::Result>
                        <p id="result-text">{move || wizard.with(|w| w.result_text())}</p>
                    </Show>
                    {move || error.get().map(|e| view! { <p class="form-error" role="alert">{e}</p> })}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn AssessmentModal(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <AssessmentDialog open=open />
        </Show>
    }
}

/// Mount the assessment into `#assessment-root` and hook its openers.
pub fn init_assessment() {
    let Some(root) = dom::by_id(ROOT_ID).and_then(|e| e.dyn_into::<HtmlElement>().ok()) else {
        return;
    };

    leptos::mount::mount_to(root, || {
        let open = RwSignal::new(false);

        for opener in dom::query_all(OPEN_SELECTOR) {
            dom::listen(&opener, "click", move |ev: MouseEvent| {
                ev.prevent_default();
                open.set(true);
            });
        }

        if let Some(window) = dom::window() {
            dom::listen(&window, "keydown", move |ev: KeyboardEvent| {
                if ev.key() == "Escape" && open.get_untracked() {
                    open.set(false);
                }
            });
        }

        view! { <AssessmentModal open=open /> }
    })
    .forget();
}
