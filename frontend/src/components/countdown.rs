use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::funnel::countdown::Countdown;

pub enum CountdownAction {
    Tick,
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountdownAction::Tick => Rc::new(self.tick()),
        }
    }
}

/// Ticks once a second while `active`, stops at zero.
#[hook]
pub fn use_countdown(seconds: u32, active: bool) -> Countdown {
    let countdown = use_reducer(|| Countdown::new(seconds));

    {
        let countdown = countdown.clone();
        let expired = countdown.is_expired();
        use_effect_with_deps(
            move |(active, expired)| {
                let interval = (*active && !*expired).then(|| {
                    let dispatcher = countdown.dispatcher();
                    Interval::new(1000, move || dispatcher.dispatch(CountdownAction::Tick))
                });
                // dropping the interval clears it
                move || drop(interval)
            },
            (active, expired),
        );
    }

    *countdown
}

#[derive(Properties, PartialEq)]
pub struct CountdownTextProps {
    pub seconds: u32,
    #[prop_or(true)]
    pub active: bool,
}

#[function_component(CountdownText)]
pub fn countdown_text(props: &CountdownTextProps) -> Html {
    let countdown = use_countdown(props.seconds, props.active);

    html! {
        <p class={classes!("countdown", countdown.is_expired().then(|| "expired"))}>
            {countdown.formatted()}
        </p>
    }
}
