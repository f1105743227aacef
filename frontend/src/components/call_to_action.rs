use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::components::countdown::CountdownText;
use crate::config;
use crate::funnel::sink::{AttributionSink, NullSink, RetryPolicy};
use crate::funnel::tags::AttributionTags;
use crate::web::ringba::{self, RingbaSink};

/// Attribution sink shared through context. Compared by identity.
#[derive(Clone)]
pub struct SinkHandle(pub Rc<dyn AttributionSink>);

impl SinkHandle {
    pub fn ringba() -> Self {
        SinkHandle(Rc::new(RingbaSink::new(RetryPolicy::default())))
    }
}

impl PartialEq for SinkHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The sink provided by `App`. Outside a provider tags go nowhere.
#[hook]
pub fn use_sink() -> SinkHandle {
    use_context::<SinkHandle>().unwrap_or_else(|| SinkHandle(Rc::new(NullSink)))
}

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
    pub phone: &'static str,
    #[prop_or_default]
    pub tags: AttributionTags,
    #[prop_or(config::COUNTDOWN_SECONDS)]
    pub countdown_seconds: u32,
    #[prop_or_default]
    pub on_call: Callback<()>,
}

/// Call button with urgency clock. Mirrors tags when shown and again on every click.
#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
    let sink = use_sink();

    {
        let sink = sink.clone();
        use_effect_with_deps(
            move |tags: &AttributionTags| {
                sink.0.record(tags);
                || ()
            },
            props.tags.clone(),
        );
    }

    let onclick = {
        let sink = sink.clone();
        let tags = props.tags.clone();
        let on_call = props.on_call.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Call clicked, pushing {} tags again", tags.len());
            sink.0.resend(&tags);
            ringba::log_queue();
            on_call.emit(());
        })
    };

    html! {
        <div class="cta-block">
            <div class="cta-notice">
                <p>
                    {"Tap on the button below to make a quick call & that's it. You'll be qualified on the call by a licensed agent in minutes 👇"}
                </p>
            </div>
            <a href={config::tel_href(props.phone)} class="cta-call-button" {onclick}>
                <span>{config::call_label(props.phone)}</span>
                <div class="shimmer"></div>
            </a>
            <p class="cta-hold-note">
                {"Due to high call volume, your official agent is waiting for only "}
                <b>{"3 minutes"}</b>
                {", then your spot will not be reserved."}
            </p>
            <CountdownText seconds={props.countdown_seconds} />
        </div>
    }
}
