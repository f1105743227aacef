use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::count_up::use_count_up;
use crate::config;
use crate::funnel::savings::CountUp;

#[derive(Clone, PartialEq)]
struct CarrierRow {
    label: &'static str,
    typical: &'static str,
    matched: &'static str,
}

#[derive(Clone, PartialEq)]
struct CompareContent {
    headline: &'static str,
    subheadline: &'static str,
    rows: Vec<CarrierRow>,
    drivers_helped: u32,
}

fn mock_content() -> CompareContent {
    CompareContent {
        headline: "Your Current Plan vs. What Drivers Are Switching To",
        subheadline: "Same coverage, lower monthly payment",
        rows: vec![
            CarrierRow { label: "Monthly premium", typical: "$212", matched: "$97" },
            CarrierRow { label: "Collision deductible", typical: "$1,000", matched: "$500" },
            CarrierRow { label: "Roadside assistance", typical: "Extra", matched: "Included" },
            CarrierRow { label: "Accident forgiveness", typical: "No", matched: "Yes" },
            CarrierRow { label: "Time to switch", typical: "Days", matched: "2 minutes" },
        ],
        drivers_helped: 25000,
    }
}

/// Static comparison table. Content arrives after a simulated fetch.
#[function_component]
pub fn Compare() -> Html {
    let content = use_state(|| None::<CompareContent>);

    {
        let content = content.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    TimeoutFuture::new(config::MOCK_FETCH_DELAY_MS).await;
                    info!("Compare content loaded");
                    content.set(Some(mock_content()));
                });
                || ()
            },
            (),
        );
    }

    match &*content {
        None => html! {
            <div class="loading-screen">
                <div class="spinner"></div>
                <p>{"Loading..."}</p>
            </div>
        },
        Some(content) => html! {
            <div class="compare-page">
                <section class="compare-hero">
                    <h1>{content.headline}</h1>
                    <p>{content.subheadline}</p>
                </section>
                <table class="compare-table">
                    <thead>
                        <tr>
                            <th></th>
                            <th>{"Typical plan"}</th>
                            <th class="highlight">{"Matched plan"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for content.rows.iter().map(|row| html! {
                            <tr>
                                <td>{row.label}</td>
                                <td>{row.typical}</td>
                                <td class="highlight">{row.matched}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
                <DriversHelped target={content.drivers_helped} />
                <CallToAction phone={config::get_call_line().display} />
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct DriversHelpedProps {
    target: u32,
}

#[function_component(DriversHelped)]
fn drivers_helped(props: &DriversHelpedProps) -> Html {
    let shown = use_count_up(CountUp::standard(props.target), true);
    html! {
        <div class="stat-counter">
            <span class="stat-value">{format!("{}+", shown)}</span>
            <span class="stat-label">{"drivers matched this month"}</span>
        </div>
    }
}
