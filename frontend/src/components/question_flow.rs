use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::funnel::flows::FlowConfig;
use crate::funnel::sequencer::{StepSequencer, Transition};
use crate::funnel::tags::derive_tags;

#[derive(Clone)]
pub struct FlowHandle {
    pub sequencer: StepSequencer,
    pub on_start: Callback<MouseEvent>,
    pub on_answer: Callback<(&'static str, &'static str)>,
}

/// Drives a [`StepSequencer`] from the view, scheduling staged transitions on timers
/// that are cleared if the page goes away first.
#[hook]
pub fn use_question_flow(config: &FlowConfig) -> FlowHandle {
    let sequencer = use_mut_ref({
        let config = config.clone();
        move || config.sequencer()
    });
    let pending: Rc<RefCell<Vec<Timeout>>> = use_mut_ref(Vec::new);
    let rerender = use_force_update();

    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    pending.borrow_mut().clear();
                }
            },
            (),
        );
    }

    let on_start = {
        let sequencer = sequencer.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: MouseEvent| {
            sequencer.borrow_mut().start();
            rerender.force_update();
        })
    };

    let on_answer = {
        let sequencer = sequencer.clone();
        let pending = pending.clone();
        let rerender = rerender.clone();
        let flow_id = config.id;
        Callback::from(move |(key, value): (&'static str, &'static str)| {
            let transition = sequencer.borrow_mut().answer(key, value);
            let Some(transition) = transition else {
                return;
            };
            if let Transition::Reveal { .. } = transition {
                info!("Flow {} answered, revealing call button", flow_id);
            }
            // show the picked option while the delay runs
            rerender.force_update();
            let sequencer = sequencer.clone();
            let rerender = rerender.clone();
            let timeout = Timeout::new(transition.delay_ms(), move || {
                sequencer.borrow_mut().commit(transition);
                rerender.force_update();
            });
            pending.borrow_mut().push(timeout);
        })
    };

    let snapshot = sequencer.borrow().clone();
    FlowHandle {
        sequencer: snapshot,
        on_start,
        on_answer,
    }
}

#[derive(Properties, PartialEq)]
pub struct QuestionFlowProps {
    pub config: FlowConfig,
}

/// Welcome → questions → call button, as configured.
#[function_component(QuestionFlow)]
pub fn question_flow(props: &QuestionFlowProps) -> Html {
    let config = &props.config;
    let flow = use_question_flow(config);
    let state = flow.sequencer.state();

    let header = html! {
        <div class="flow-header">
            <img src="/assets/agent.png" alt="Agent" class="flow-avatar" />
            <div>
                <p class="flow-brand">{config.brand}</p>
                <p class="flow-status">{"online"}</p>
            </div>
        </div>
    };

    let body = if state.revealed {
        let tags = derive_tags(&config.tag_rules, &state.answers);
        html! {
            <div class="flow-reveal">
                <h2>{config.final_message}</h2>
                <CallToAction
                    phone={config.phone_number()}
                    tags={tags}
                    countdown_seconds={config.countdown_seconds}
                />
            </div>
        }
    } else if !state.started {
        match &config.welcome {
            Some(welcome) => html! {
                <div class="flow-card welcome">
                    <span class="wave">{"👋"}</span>
                    <h1>{welcome.title}</h1>
                    <p>{welcome.message}</p>
                    <button class="flow-start" onclick={flow.on_start.clone()}>
                        {welcome.button}
                    </button>
                </div>
            },
            None => html! {},
        }
    } else {
        match flow.sequencer.current_question() {
            Some(question) => {
                let chosen = flow.sequencer.answer_for(question.key);
                let show_progress = config.welcome.is_some();
                html! {
                    <>
                        if show_progress {
                            <div class="flow-progress">
                                <div class="flow-progress-labels">
                                    <span>{format!("Question {} of {}", flow.sequencer.question_number(), flow.sequencer.question_count())}</span>
                                    <span>{format!("{}%", flow.sequencer.progress_percent())}</span>
                                </div>
                                <div class="flow-progress-track">
                                    <div class="flow-progress-fill" style={format!("width: {}%", flow.sequencer.progress_percent())}></div>
                                </div>
                            </div>
                        }
                        <div class="flow-card question">
                            <h3>{question.title}</h3>
                            <p>{question.message}</p>
                            <div class="flow-options">
                                { for question.options.iter().map(|option| {
                                    let option = *option;
                                    let key = question.key;
                                    let on_answer = flow.on_answer.clone();
                                    let selected = chosen == Some(option);
                                    html! {
                                        <button
                                            class={classes!("flow-option", selected.then(|| "selected"))}
                                            onclick={Callback::from(move |_: MouseEvent| on_answer.emit((key, option)))}
                                        >
                                            {option}
                                        </button>
                                    }
                                }) }
                            </div>
                        </div>
                    </>
                }
            }
            None => html! {},
        }
    };

    html! {
        <div class={classes!("flow-page", config.theme)}>
            {header}
            <main class="flow-main">
                {body}
            </main>
        </div>
    }
}
