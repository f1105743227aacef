use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::funnel::lead_form::{clear_field_error, ApplicationForm, FieldErrors};
use crate::web::analytics::dial;

const SUBMIT_DELAY_MS: u32 = 2000;

#[derive(Clone, PartialEq)]
struct DocumentContent {
    brand: &'static str,
    form_number: &'static str,
    date: String,
    title: &'static str,
    subtitle: &'static str,
    department: &'static str,
    instructions: &'static str,
}

fn mock_content() -> DocumentContent {
    DocumentContent {
        brand: "Auto Insurance Savings",
        form_number: "FORM-INS-2024-001",
        date: Local::now().format("%B %-d, %Y").to_string(),
        title: "AUTO INSURANCE RATE COMPARISON APPLICATION",
        subtitle: "Official Rate Comparison Request Form",
        department: "Insurance Comparison Services Division",
        instructions: "Please complete all required fields to receive your rate comparison. All information is confidential and secure.",
    }
}

struct Field {
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    required: bool,
}

const FIELDS: [Field; 6] = [
    Field { name: "fullName", label: "Full Legal Name", input_type: "text", required: true },
    Field { name: "zipCode", label: "ZIP Code", input_type: "text", required: true },
    Field { name: "phoneNumber", label: "Phone Number", input_type: "tel", required: true },
    Field { name: "email", label: "Email Address", input_type: "email", required: true },
    Field { name: "vehicleYear", label: "Vehicle Year", input_type: "text", required: false },
    Field { name: "currentProvider", label: "Current Provider", input_type: "text", required: false },
];

fn field_value<'a>(form: &'a ApplicationForm, name: &str) -> &'a str {
    match name {
        "fullName" => &form.full_name,
        "zipCode" => &form.zip_code,
        "phoneNumber" => &form.phone_number,
        "email" => &form.email,
        "vehicleYear" => &form.vehicle_year,
        "currentProvider" => &form.current_provider,
        _ => "",
    }
}

/// Document-styled application form.
#[function_component]
pub fn Apply() -> Html {
    let content = use_state(|| None::<DocumentContent>);
    let form = use_state(ApplicationForm::default);
    let errors = use_state(FieldErrors::new);
    let is_submitting = use_state(|| false);
    let show_results = use_state(|| false);
    let phone = config::get_call_line().display;

    {
        let content = content.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    TimeoutFuture::new(config::MOCK_FETCH_DELAY_MS).await;
                    content.set(Some(mock_content()));
                });
                || ()
            },
            (),
        );
    }

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let show_results = show_results.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = form.validate();
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());
            is_submitting.set(true);
            let is_submitting = is_submitting.clone();
            let show_results = show_results.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                is_submitting.set(false);
                show_results.set(true);
            });
        })
    };

    let on_call = Callback::from(move |_: MouseEvent| dial(&config::tel_href(phone)));

    let Some(content) = (*content).clone() else {
        return html! {
            <div class="loading-screen document">
                <div class="spinner"></div>
                <p>{"Loading form..."}</p>
            </div>
        };
    };

    let body = if *show_results {
        html! {
            <div class="document-results">
                <h2>{"APPLICATION RECEIVED"}</h2>
                <p>{"A licensed agent is ready to review your rate comparison now."}</p>
                <button class="document-call" onclick={on_call.clone()}>
                    {config::call_label(phone)}
                </button>
            </div>
        }
    } else {
        html! {
            <form class="document-form" onsubmit={on_submit}>
                { for FIELDS.iter().map(|field| {
                    let name = field.name;
                    let oninput = {
                        let form = form.clone();
                        let errors = errors.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            let mut next = (*form).clone();
                            next.set(name, input.value());
                            form.set(next);
                            let mut next_errors = (*errors).clone();
                            if clear_field_error(&mut next_errors, name) {
                                errors.set(next_errors);
                            }
                        })
                    };
                    let error = errors.get(name).copied();
                    html! {
                        <div class="document-field">
                            <label for={name}>
                                {field.label}
                                if field.required { <span class="required">{" *"}</span> }
                            </label>
                            <input
                                id={name}
                                type={field.input_type}
                                value={field_value(&form, name).to_string()}
                                {oninput}
                                class={classes!(error.is_some().then(|| "error"))}
                            />
                            if let Some(message) = error {
                                <p class="field-error">{message}</p>
                            }
                        </div>
                    }
                }) }
                <button type="submit" class="document-submit" disabled={*is_submitting}>
                    { if *is_submitting { "Processing..." } else { "SUBMIT APPLICATION" } }
                </button>
            </form>
        }
    };

    html! {
        <div class="document-page">
            <header class="document-header">
                <img src="/assets/agent.png" alt="Agent" class="document-logo" />
                <div>
                    <p class="document-brand">{content.brand}</p>
                    <p class="document-meta">{format!("{} · {}", content.form_number, content.date)}</p>
                </div>
            </header>
            <section class="document-title">
                <h1>{content.title}</h1>
                <h2>{content.subtitle}</h2>
                <p class="document-department">{content.department}</p>
                <p class="document-instructions">{content.instructions}</p>
            </section>
            {body}
            <aside class="document-cta">
                <p>{"Or speak with a licensed agent to complete your application"}</p>
                <button class="document-call" onclick={on_call}>
                    {config::call_label(phone)}
                </button>
            </aside>
        </div>
    }
}
