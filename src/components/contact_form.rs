use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ScrollLogicalPosition};
use yew::prelude::*;

use super::toast_host::ToastContext;
use crate::config::SiteConfig;
use crate::dom;
use crate::state::form::{contact_fields, FieldKind, FieldSpec};
use crate::state::{FormAction, FormState, ToastKind};

const SUCCESS_TEXT: &str = "Thank you for your message! We'll get back to you within 24 hours.";
const ERROR_TEXT: &str = "Please fill in all required fields correctly.";

fn field_id(spec: &FieldSpec) -> String {
    format!("contact-{}", spec.name)
}

fn focus_field(spec: &FieldSpec) {
    let id = field_id(spec);
    let found = dom::document().map(|d| d.get_element_by_id(&id));
    match found {
        Ok(Some(el)) => {
            if let Some(html_el) = el.dyn_ref::<HtmlElement>() {
                let _ = html_el.focus();
            }
            dom::smooth_scroll(&el, ScrollLogicalPosition::Center);
        }
        Ok(None) => log::debug!("no element #{id} to focus"),
        Err(e) => log::warn!("cannot focus #{id}: {e}"),
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let toasts = use_context::<ToastContext>();
    let form = use_reducer(|| FormState::new(contact_fields()));

    let onsubmit = {
        let form = form.clone();
        let toasts = toasts.clone();
        let delay = config.form.submit_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.sending {
                return;
            }
            let first_invalid = form.first_invalid();
            form.dispatch(FormAction::Submit);
            let push = |kind, text: &str| {
                if let Some(t) = &toasts {
                    t.push.emit((kind, text.to_string()));
                }
            };
            match first_invalid {
                None => {
                    log::info!("contact form accepted, simulating send");
                    let form = form.clone();
                    let toasts = toasts.clone();
                    Timeout::new(delay, move || {
                        if let Some(t) = &toasts {
                            t.push.emit((ToastKind::Success, SUCCESS_TEXT.to_string()));
                        }
                        form.dispatch(FormAction::Finish);
                    })
                    .forget();
                }
                Some(i) => {
                    focus_field(&form.specs[i]);
                    push(ToastKind::Error, ERROR_TEXT);
                }
            }
        })
    };

    let fields = form.specs.iter().enumerate().map(|(i, spec)| {
        let state = &form.fields[i];
        let id = field_id(spec);
        let class = classes!("form-control", state.error.then_some("error"));
        let onblur = {
            let form = form.clone();
            Callback::from(move |_: FocusEvent| form.dispatch(FormAction::Blur(i)))
        };
        let control = match spec.kind {
            FieldKind::TextArea => {
                let oninput = {
                    let form = form.clone();
                    Callback::from(move |e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                        form.dispatch(FormAction::Input { index: i, value });
                    })
                };
                html! {
                    <textarea id={id.clone()} name={spec.name} rows="5" required={spec.required}
                        {class} value={state.value.clone()} {oninput} {onblur} />
                }
            }
            FieldKind::Select => {
                let onchange = {
                    let form = form.clone();
                    Callback::from(move |e: Event| {
                        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                        form.dispatch(FormAction::Input { index: i, value });
                    })
                };
                html! {
                    <select id={id.clone()} name={spec.name} required={spec.required} {class} {onchange} {onblur}>
                        <option value="" selected={state.value.is_empty()}>{"Choose a topic"}</option>
                        { for spec.options.iter().map(|opt| html! {
                            <option value={*opt} selected={state.value == *opt}>{ *opt }</option>
                        }) }
                    </select>
                }
            }
            FieldKind::Text | FieldKind::Email | FieldKind::Tel => {
                let oninput = {
                    let form = form.clone();
                    Callback::from(move |e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlInputElement>().value();
                        form.dispatch(FormAction::Input { index: i, value });
                    })
                };
                html! {
                    <input id={id.clone()} name={spec.name} type={spec.kind.input_type()} required={spec.required}
                        {class} value={state.value.clone()} {oninput} {onblur} />
                }
            }
        };
        html! {
            <div class="form-group">
                <label for={id}>{ spec.label }</label>
                { control }
            </div>
        }
    });

    let sending = form.sending;
    html! {
        <section id="contact" class="contact">
            <h2>{"Contact Us"}</h2>
            <form class="contact-form" novalidate={true} {onsubmit}>
                { for fields }
                <button type="submit" class="btn btn-primary" disabled={sending}
                    style={if sending { "opacity:0.6;" } else { "opacity:1;" }}>
                    { if sending { "Sending..." } else { "Send Message" } }
                </button>
            </form>
        </section>
    }
}
