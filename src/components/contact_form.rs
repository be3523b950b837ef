//! Contact form with blur and submit validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Messages are not delivered anywhere. A valid submission clears the inputs
//! and raises the `#formSuccess` banner, which hides itself after
//! `SUCCESS_BANNER_HIDE_MS`.

use leptos::prelude::*;

use crate::consts::SUCCESS_MESSAGE;
use crate::state::contact::{ContactField, ContactFormState, FieldStatus, SubmitOutcome};

/// Form carrying `layout` fields; all four when omitted.
#[component]
pub fn ContactForm(#[prop(optional)] layout: Option<&'static [ContactField]>) -> impl IntoView {
    let form = RwSignal::new(layout.map_or_else(ContactFormState::default, ContactFormState::with_layout));
    let fields: Vec<ContactField> = form.with_untracked(|f| f.fields().collect());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(outcome) = form.try_update(ContactFormState::submit) else {
            return;
        };
        match outcome {
            SubmitOutcome::Sent { banner_seq } => {
                leptos::logging::log!("contact form accepted");
                schedule_banner_hide(form, banner_seq);
            }
            SubmitOutcome::Rejected => {}
        }
    };

    view! {
        <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
            {fields.into_iter().map(|field| field_row(form, field)).collect_view()}
            <button type="submit" class="btn btn-primary">
                <i class="fas fa-paper-plane"></i>
                " Send Message"
            </button>
            <div id="formSuccess" class="form-success" class:show=move || form.with(ContactFormState::banner_visible)>
                <i class="fas fa-check-circle"></i>
                " "
                {SUCCESS_MESSAGE}
            </div>
        </form>
    }
}

fn field_row(form: RwSignal<ContactFormState>, field: ContactField) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).unwrap_or_default().to_owned());
    let border = move || form.with(|f| f.status(field).and_then(FieldStatus::border_color).unwrap_or_default());
    let error = move || form.with(|f| f.status(field).map(|s| s.error_text().to_owned()).unwrap_or_default());
    let on_blur = move |_| {
        form.update(|f| {
            f.blur(field);
        });
    };

    let input_type = if field == ContactField::Email { "email" } else { "text" };
    let control = match field {
        ContactField::Message => view! {
            <textarea
                id=field.input_id()
                name=field.input_id()
                rows="5"
                placeholder="Your message"
                prop:value=value
                style:border-color=border
                on:input=move |ev| form.update(|f| f.set_value(field, event_target_value(&ev)))
                on:blur=on_blur
            ></textarea>
        }
        .into_any(),
        ContactField::Name | ContactField::Email | ContactField::Subject => view! {
            <input
                id=field.input_id()
                name=field.input_id()
                type=input_type
                placeholder=field.label()
                prop:value=value
                style:border-color=border
                on:input=move |ev| form.update(|f| f.set_value(field, event_target_value(&ev)))
                on:blur=on_blur
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-group">
            <label for=field.input_id()>{field.label()}</label>
            {control}
            <span id=field.error_id() class="error-message">{error}</span>
        </div>
    }
}

#[cfg(feature = "csr")]
fn schedule_banner_hide(form: RwSignal<ContactFormState>, banner_seq: u64) {
    use crate::consts::SUCCESS_BANNER_HIDE_MS;

    gloo_timers::callback::Timeout::new(SUCCESS_BANNER_HIDE_MS, move || {
        let _ = form.try_update(|f| f.hide_banner(banner_seq));
    })
    .forget();
}

#[cfg(not(feature = "csr"))]
fn schedule_banner_hide(_form: RwSignal<ContactFormState>, _banner_seq: u64) {}
