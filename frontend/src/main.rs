use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod funnel {
    pub mod countdown;
    pub mod events;
    pub mod flows;
    pub mod lead_form;
    pub mod savings;
    pub mod sequencer;
    pub mod sink;
    pub mod split;
    pub mod tags;
    pub mod utm;
}
mod web {
    pub mod analytics;
    pub mod ringba;
    pub mod storage;
}
mod components {
    pub mod call_to_action;
    pub mod count_up;
    pub mod countdown;
    pub mod faq;
    pub mod question_flow;
}
mod pages {
    pub mod apply;
    pub mod compare;
    pub mod home;
    pub mod landing;
    pub mod quote;
    pub mod savings_quiz;
    pub mod split_compare;
    pub mod termsprivacy;
}

use components::call_to_action::SinkHandle;
use pages::{
    apply::Apply,
    compare::Compare,
    home::{Home, NotFound},
    landing::{Qualify, QuestionLanding, StoryLanding},
    quote::Quote,
    savings_quiz::SavingsQuiz,
    split_compare::SplitCompare,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/questions")]
    Questions,
    #[at("/engsfdq")]
    Qualify,
    #[at("/story")]
    Story,
    #[at("/savings")]
    Savings,
    #[at("/split")]
    Split,
    #[at("/compare")]
    Compare,
    #[at("/quote")]
    Quote,
    #[at("/apply")]
    Apply,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Questions => {
            info!("Rendering Questions page");
            html! { <QuestionLanding /> }
        },
        Route::Qualify => {
            info!("Rendering Qualify page");
            html! { <Qualify /> }
        },
        Route::Story => {
            info!("Rendering Story page");
            html! { <StoryLanding /> }
        },
        Route::Savings => {
            info!("Rendering Savings quiz page");
            html! { <SavingsQuiz /> }
        },
        Route::Split => {
            info!("Rendering Split calculator page");
            html! { <SplitCompare /> }
        },
        Route::Compare => {
            info!("Rendering Compare page");
            html! { <Compare /> }
        },
        Route::Quote => {
            info!("Rendering Quote page");
            html! { <Quote /> }
        },
        Route::Apply => {
            info!("Rendering Apply page");
            html! { <Apply /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let sink = use_memo(|_| SinkHandle::ringba(), ());

    html! {
        <ContextProvider<SinkHandle> context={(*sink).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SinkHandle>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
