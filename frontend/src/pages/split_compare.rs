use yew::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::count_up::use_count_up;
use crate::components::question_flow::use_question_flow;
use crate::config;
use crate::funnel::flows;
use crate::funnel::savings::CountUp;
use crate::funnel::split::{format_inr, running_total, split_questions, SplitSummary};

/// Current premium on the left, the estimate on the right, questions underneath.
/// The estimate is recomputed and re-animated on every answer.
#[function_component]
pub fn SplitCompare() -> Html {
    let questions = use_memo(|_| split_questions(), ());
    let flow_config = use_memo(|_| flows::split(&split_questions()), ());
    let flow = use_question_flow(&flow_config);
    let state = flow.sequencer.state();

    let total = running_total(&questions, &state.answers);
    let shown = use_count_up(
        CountUp::new(total, config::SPLIT_COUNT_UP_FRAMES, config::SPLIT_COUNT_UP_DURATION_MS),
        true,
    );
    let live = SplitSummary { current_cost: config::SPLIT_CURRENT_COST, savings: shown };
    let percent = live.savings_percent();

    let question_card = match flow.sequencer.current_question() {
        Some(question) => {
            let chosen = flow.sequencer.answer_for(question.key);
            html! {
                <div class="split-question">
                    <div class="split-question-head">
                        <h3>{question.message}</h3>
                        <span>{format!("{}/{}", flow.sequencer.question_number(), flow.sequencer.question_count())}</span>
                    </div>
                    <div class="split-progress-track">
                        <div class="split-progress-fill" style={format!("width: {}%", flow.sequencer.progress_percent())}></div>
                    </div>
                    <div class="split-options">
                        { for question.options.iter().map(|option| {
                            let option = *option;
                            let key = question.key;
                            let on_answer = flow.on_answer.clone();
                            html! {
                                <button
                                    class={classes!("split-option", (chosen == Some(option)).then(|| "selected"))}
                                    onclick={Callback::from(move |_: MouseEvent| on_answer.emit((key, option)))}
                                >
                                    {option}
                                </button>
                            }
                        }) }
                    </div>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <div class={classes!("split-page", flow_config.theme)}>
            <header class="split-header">
                <h1>{flow_config.brand}</h1>
                <span>{format!("Question {} of {}", flow.sequencer.question_number(), flow.sequencer.question_count())}</span>
            </header>
            <div class="split-grid">
                <section class="split-side current">
                    <h2>{"Current Costs"}</h2>
                    <p class="split-subtitle">{"Your annual insurance"}</p>
                    <p class="split-amount">{format!("₹{}", format_inr(live.current_cost))}</p>
                    <p>{"per year"}</p>
                    <div class="split-row">
                        <span>{"Monthly Premium"}</span>
                        <span>{format!("₹{}", format_inr(live.current_monthly()))}</span>
                    </div>
                    <div class="split-row">
                        <span>{"Current Provider"}</span>
                        <span>{"Existing Plan"}</span>
                    </div>
                </section>
                <section class="split-side savings">
                    <h2>{"Potential Savings"}</h2>
                    <p class="split-subtitle">{"With our benefits"}</p>
                    <p class="split-amount">{format!("₹{}", format_inr(shown))}</p>
                    <p>
                        { if percent > 0 { format!("{}% savings", percent) } else { "Start answering to see savings".to_string() } }
                    </p>
                    <div class="split-row">
                        <span>{"New Monthly Cost"}</span>
                        <span>{format!("₹{}", format_inr(live.new_monthly()))}</span>
                    </div>
                    <div class="split-row">
                        <span>{"Annual Savings"}</span>
                        <span>{format!("₹{}", format_inr(shown))}</span>
                    </div>
                </section>
            </div>
            if state.revealed {
                <div class="split-reveal">
                    <h2>{flow_config.final_message}</h2>
                    <p>{"You could save up to"}</p>
                    <p class="split-total">{format!("₹{}", format_inr(total))}</p>
                    <p>{"per year on your auto insurance!"}</p>
                    <CallToAction phone={flow_config.phone_number()} countdown_seconds={flow_config.countdown_seconds} />
                </div>
            } else {
                {question_card}
            }
        </div>
    }
}
