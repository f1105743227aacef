use log::info;
use yew::prelude::*;

use crate::components::question_flow::QuestionFlow;
use crate::funnel::flows;

#[function_component]
pub fn QuestionLanding() -> Html {
    let config = use_memo(|_| flows::question_landing(), ());
    html! { <QuestionFlow config={(*config).clone()} /> }
}

#[function_component]
pub fn Qualify() -> Html {
    let config = use_memo(|_| flows::qualify(), ());

    use_effect_with_deps(
        |_| {
            info!("Qualifier chat opened");
            || ()
        },
        (),
    );

    html! { <QuestionFlow config={(*config).clone()} /> }
}

#[function_component]
pub fn StoryLanding() -> Html {
    let config = use_memo(|_| flows::story(), ());
    html! {
        <>
            <section class="story-hero">
                <img src="/assets/story.jpg" alt="Driver reviewing her insurance bill" class="story-image" />
                <blockquote>
                    {"“I had no idea I was overpaying until I made one call.”"}
                </blockquote>
            </section>
            <QuestionFlow config={(*config).clone()} />
        </>
    }
}
