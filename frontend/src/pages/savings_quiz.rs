use yew::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::count_up::use_count_up;
use crate::components::question_flow::use_question_flow;
use crate::config;
use crate::funnel::flows::FlowConfig;
use crate::funnel::savings::{savings_questions, total_savings, CountUp, SavingsOption, SavingsTier};
use crate::funnel::sequencer::Question;
use crate::funnel::tags::AttributionTags;

fn quiz_flow() -> FlowConfig {
    let questions = savings_questions()
        .iter()
        .map(|q| Question {
            key: q.question,
            title: "Savings Calculator",
            message: q.question,
            options: q.options.iter().map(|o| o.text).collect(),
        })
        .collect();

    FlowConfig {
        id: "savings",
        brand: "Auto Savings Calculator",
        theme: "theme-savings",
        welcome: None,
        questions,
        tag_rules: Vec::new(),
        step_delay_ms: config::QUIZ_STEP_DELAY_MS,
        reveal_delay_ms: config::QUIZ_STEP_DELAY_MS,
        countdown_seconds: config::COUNTDOWN_SECONDS,
        phone: config::get_call_line(),
        switch_number: false,
        final_message: "",
    }
}

#[derive(Properties, PartialEq)]
struct SavingsResultProps {
    total: u32,
    tags: AttributionTags,
}

#[function_component(SavingsResult)]
fn savings_result(props: &SavingsResultProps) -> Html {
    let shown = use_count_up(CountUp::standard(props.total), true);
    let tier = SavingsTier::for_total(props.total);

    html! {
        <div class="savings-result">
            <div class={classes!("tier-badge", tier.css_class())}>
                <span>{tier.emoji()}</span>
            </div>
            <h1>{format!("You're a {} Saver!", tier.label())}</h1>
            <div class="savings-amount">
                <span>{format!("${}", shown)}</span>
                <span class="plus">{"+"}</span>
            </div>
            <p>{"Estimated yearly savings based on your answers"}</p>
            <CallToAction
                phone={config::get_call_line().display}
                tags={props.tags.clone()}
            />
        </div>
    }
}

#[function_component]
pub fn SavingsQuiz() -> Html {
    let config = use_memo(|_| quiz_flow(), ());
    let flow = use_question_flow(&config);
    let questions = use_memo(|_| savings_questions(), ());
    let state = flow.sequencer.state();

    if state.revealed {
        let picked: Vec<SavingsOption> = questions
            .iter()
            .filter_map(|q| {
                let answer = flow.sequencer.answer_for(q.question)?;
                q.options.iter().find(|o| o.text == answer).copied()
            })
            .collect();
        let total = total_savings(&picked);
        return html! {
            <div class={classes!("quiz-page", config.theme)}>
                <SavingsResult total={total} tags={AttributionTags::new()} />
            </div>
        };
    }

    let Some(question) = flow.sequencer.current_question() else {
        return html! {};
    };
    let number = flow.sequencer.question_number();
    let progress = flow.sequencer.progress_percent();
    let chosen = flow.sequencer.answer_for(question.key);

    html! {
        <div class={classes!("quiz-page", config.theme)}>
            <div class="quiz-progress">
                <span>{format!("Question {} of {}", number, flow.sequencer.question_count())}</span>
                <div class="quiz-progress-track">
                    <div class="quiz-progress-fill" style={format!("width: {}%", progress)}></div>
                </div>
            </div>
            <div class="quiz-card">
                <h2>{question.message}</h2>
                <div class="quiz-options">
                    { for question.options.iter().map(|option| {
                        let option = *option;
                        let key = question.key;
                        let on_answer = flow.on_answer.clone();
                        html! {
                            <button
                                class={classes!("quiz-option", (chosen == Some(option)).then(|| "selected"))}
                                onclick={Callback::from(move |_: MouseEvent| on_answer.emit((key, option)))}
                            >
                                {option}
                            </button>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
