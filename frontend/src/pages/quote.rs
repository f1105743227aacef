use gloo_timers::future::TimeoutFuture;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::faq::FaqList;
use crate::config;
use crate::funnel::lead_form::{clear_field_error, FieldErrors, QuoteDraft};
use crate::funnel::events::LeadEvent;
use crate::funnel::utm::UtmParams;
use crate::web::analytics::{current_utm, track};
use crate::web::storage;

const PAGE: &str = "insurance_lander";

const FAQS: [(&str, &str); 8] = [
    ("How long does it take to compare options?", "The process typically takes 2-3 minutes. You'll enter your ZIP code and basic information, then see available options."),
    ("Is this service really free?", "Yes, comparing options is completely free. There are no hidden fees or charges."),
    ("Will I be contacted by multiple agents?", "No. We'll connect you with one licensed agent who can help you compare options and answer questions."),
    ("What information do I need to get started?", "You'll need your ZIP code to start. Additional information like vehicle details and driving history helps provide more accurate quotes."),
    ("Are rates guaranteed?", "Rates vary based on many factors. We show you available options, and final rates are determined by the insurance provider after reviewing your information."),
    ("Is this available in all states?", "Not all states are available. Enter your ZIP code to see if options are available in your area."),
    ("Can I purchase insurance online?", "Yes, you can continue online or speak with a licensed agent over the phone to complete your purchase."),
    ("How do I know if I'm getting a good rate?", "We show you options from multiple providers so you can compare. Rates depend on many factors including your location, driving history, and coverage needs."),
];

const AGE_RANGES: [&str; 6] = ["18-24", "25-34", "35-44", "45-54", "55-64", "65+"];
const OWNERSHIP: [(&str, &str); 3] = [("own", "Own"), ("lease", "Lease"), ("finance", "Finance")];

fn scroll_to_form() {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("lead-form"));
    if let Some(target) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// ZIP-first lead form with a locally persisted draft.
#[function_component]
pub fn Quote() -> Html {
    let draft = use_state(QuoteDraft::default);
    let errors = use_state(FieldErrors::new);
    let is_submitting = use_state(|| false);
    let show_results = use_state(|| false);
    let utm = use_state(UtmParams::default);
    let phone = config::get_quote_line().display;

    // capture campaign params and restore an unfinished draft
    {
        let draft = draft.clone();
        let utm = utm.clone();
        use_effect_with_deps(
            move |_| {
                let params = current_utm();
                track(&LeadEvent::PageView { page: PAGE, utm: &params });
                utm.set(params);

                match storage::load_draft() {
                    Ok(Some(saved)) => {
                        info!("Restored quote draft");
                        draft.set(saved);
                    }
                    Ok(None) => {}
                    Err(e) => error!("Failed to load form data: {}", e),
                }
                || ()
            },
            (),
        );
    }

    {
        use_effect_with_deps(
            move |draft: &QuoteDraft| {
                if let Err(e) = storage::save_draft(draft) {
                    error!("Failed to save form data: {}", e);
                }
                || ()
            },
            (*draft).clone(),
        );
    }

    let set_field = {
        let draft = draft.clone();
        let errors = errors.clone();
        move |field: &'static str, value: String| {
            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);
            let mut next_errors = (*errors).clone();
            if clear_field_error(&mut next_errors, field) {
                errors.set(next_errors);
            }
        }
    };

    let on_zip = {
        let set_field = set_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_field("zip", input.value());
        })
    };
    let on_age = {
        let set_field = set_field.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_field("ageRange", select.value());
        })
    };
    let on_ownership = {
        let set_field = set_field.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_field("vehicleOwnership", select.value());
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let show_results = show_results.clone();
        let utm = utm.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = draft.validate();
            if !found.is_empty() {
                let fields = found.keys().copied().collect();
                track(&LeadEvent::FormValidationError { fields });
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());
            track(&LeadEvent::FormSubmit { draft: &draft, utm: &utm });

            is_submitting.set(true);
            let is_submitting = is_submitting.clone();
            let show_results = show_results.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::MOCK_SUBMIT_DELAY_MS).await;
                is_submitting.set(false);
                show_results.set(true);
                if let Err(e) = storage::clear_draft() {
                    error!("Failed to clear form data: {}", e);
                }
            });
        })
    };

    let on_call = {
        let utm = utm.clone();
        Callback::from(move |_: MouseEvent| {
            track(&LeadEvent::CallClick { source: "cta_button", utm: &utm });
        })
    };

    let form_start = |source: &'static str| {
        Callback::from(move |_: MouseEvent| {
            scroll_to_form();
            track(&LeadEvent::FormStart { source });
        })
    };

    let on_continue_online = {
        let utm = utm.clone();
        Callback::from(move |_: MouseEvent| {
            track(&LeadEvent::ContinueOnline { utm: &utm });
            info!("Online flow is not available yet, staying on results");
        })
    };

    let on_faq_open = Callback::from(|index: usize| {
        track(&LeadEvent::FaqOpen { index });
    });

    let zip_error = errors.get("zip").copied();

    html! {
        <div class="insurance-lander">
            <div class="sticky-cta-bar">
                <a href={config::tel_href(phone)} class="cta-button primary" onclick={on_call.clone()}>
                    {"Call Now"}
                </a>
                <button class="cta-button secondary" onclick={form_start("mobile_cta")}>
                    {"Get Quote"}
                </button>
            </div>

            <section class="lander-hero">
                <h1 class="hero-title">{"Compare Auto Insurance Options in Your Area"}</h1>
                <p class="hero-subtitle">
                    {"See rates from top providers. No spam, no hassle, just options that may save you money."}
                </p>
                <div class="hero-ctas">
                    <a href={config::tel_href(phone)} class="cta-primary" onclick={on_call.clone()}>
                        <span>{"Call Now"}</span>
                        <span class="microcopy">{"Call in 10 seconds"}</span>
                    </a>
                    <button class="cta-secondary" onclick={form_start("hero_cta")}>
                        {"Check My Rate Online"}
                    </button>
                </div>
            </section>

            <section id="lead-form" class="form-section">
                <h2 class="section-title">{"Get Started in Seconds"}</h2>
                <p class="section-subtitle">{"Enter your ZIP code to see available options"}</p>
                if *show_results {
                    <div class="results-card">
                        <h3>{"Options Available!"}</h3>
                        <p>{"We found insurance options for your area. Choose how you'd like to proceed:"}</p>
                        <a href={config::tel_href(phone)} class="cta-button primary" onclick={on_call}>
                            <div class="cta-label">{"Call Now"}</div>
                            <div class="cta-sublabel">{"Speak with a licensed agent"}</div>
                        </a>
                        <button class="cta-secondary large" onclick={on_continue_online}>
                            {"Continue Online"}
                        </button>
                    </div>
                } else {
                    <form class="lead-form" onsubmit={on_submit}>
                        <div class="form-field">
                            <label for="zip">{"ZIP Code *"}</label>
                            <input
                                id="zip"
                                type="text"
                                inputmode="numeric"
                                maxlength="5"
                                placeholder="12345"
                                value={draft.zip.clone()}
                                oninput={on_zip}
                                class={classes!(zip_error.is_some().then(|| "error"))}
                            />
                            if let Some(message) = zip_error {
                                <p class="field-error">{message}</p>
                            }
                        </div>
                        <div class="form-field">
                            <label for="ageRange">{"Age Range (Optional)"}</label>
                            <select id="ageRange" onchange={on_age}>
                                <option value="" selected={draft.age_range.is_empty()}>{"Select age range"}</option>
                                { for AGE_RANGES.iter().map(|range| html! {
                                    <option value={*range} selected={draft.age_range == *range}>{*range}</option>
                                }) }
                            </select>
                        </div>
                        <div class="form-field">
                            <label for="vehicleOwnership">{"Vehicle Ownership (Optional)"}</label>
                            <select id="vehicleOwnership" onchange={on_ownership}>
                                <option value="" selected={draft.vehicle_ownership.is_empty()}>{"Select ownership"}</option>
                                { for OWNERSHIP.iter().map(|(value, label)| html! {
                                    <option value={*value} selected={draft.vehicle_ownership == *value}>{*label}</option>
                                }) }
                            </select>
                        </div>
                        <button type="submit" class="submit-button" disabled={*is_submitting}>
                            { if *is_submitting { "Checking options..." } else { "See My Options" } }
                        </button>
                    </form>
                }
            </section>

            <section class="faq-section">
                <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                <FaqList items={FAQS.to_vec()} on_open={on_faq_open} />
            </section>

            <footer class="lander-footer">
                <p>
                    {"This site connects you with licensed insurance agents who may assist you with quotes and coverage options."}
                </p>
            </footer>
        </div>
    }
}
