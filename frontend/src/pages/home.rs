use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct Variant {
    route: Route,
    title: &'static str,
    hook: &'static str,
}

fn variants() -> Vec<Variant> {
    vec![
        Variant { route: Route::Questions, title: "Quick Qualifier", hook: "Three questions, then a direct line to an agent" },
        Variant { route: Route::Qualify, title: "Chat With Emily", hook: "Chat-style eligibility check" },
        Variant { route: Route::Story, title: "Driver Stories", hook: "Real savings, told by drivers" },
        Variant { route: Route::Savings, title: "Savings Calculator", hook: "Five questions to estimate your savings" },
        Variant { route: Route::Split, title: "Split Savings Calculator", hook: "Watch your savings grow with every answer" },
        Variant { route: Route::Compare, title: "Compare Rates", hook: "Side-by-side carrier comparison" },
        Variant { route: Route::Quote, title: "Get a Quote", hook: "Tell us your ZIP and we'll match you" },
        Variant { route: Route::Apply, title: "Rate Comparison Application", hook: "Complete the application form" },
    ]
}

#[function_component]
pub fn Home() -> Html {
    html! {
        <div class="home-page">
            <section class="hero">
                <h1>{"Save $500+ On Auto Insurance"}</h1>
                <p class="hero-subtitle">
                    {"Drivers are switching to lower rates in minutes. Pick how you'd like to check."}
                </p>
            </section>
            <section class="variants-grid">
                { for variants().into_iter().map(|v| html! {
                    <Link<Route> to={v.route} classes="variant-card">
                        <h3>{v.title}</h3>
                        <p>{v.hook}</p>
                    </Link<Route>>
                }) }
            </section>
            <footer class="home-footer">
                <Link<Route> to={Route::Terms} classes="footer-link">{"Terms & Conditions"}</Link<Route>>
                <Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy Policy"}</Link<Route>>
            </footer>
        </div>
    }
}

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="forward-link">{"Back to home"}</Link<Route>>
        </div>
    }
}
