use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::funnel::savings::CountUp;

#[derive(Clone, Copy, PartialEq)]
struct CountUpState {
    anim: CountUp,
    frame: u32,
}

enum CountUpAction {
    Restart(CountUp),
    Frame,
}

impl Reducible for CountUpState {
    type Action = CountUpAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountUpAction::Restart(anim) if anim != self.anim => Rc::new(CountUpState { anim, frame: 0 }),
            CountUpAction::Restart(_) => self,
            CountUpAction::Frame if !self.anim.is_done(self.frame) => Rc::new(CountUpState {
                frame: self.frame + 1,
                ..*self
            }),
            CountUpAction::Frame => self,
        }
    }
}

/// Animated value climbing from 0 to `anim.target` once `active`.
/// A new target starts the climb over from zero.
#[hook]
pub fn use_count_up(anim: CountUp, active: bool) -> u32 {
    let state = use_reducer(|| CountUpState { anim, frame: 0 });

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |anim: &CountUp| {
                dispatcher.dispatch(CountUpAction::Restart(*anim));
                || ()
            },
            anim,
        );
    }

    {
        let state = state.clone();
        let done = state.anim.is_done(state.frame);
        use_effect_with_deps(
            move |(active, done)| {
                let interval = (*active && !*done).then(|| {
                    let dispatcher = state.dispatcher();
                    Interval::new(state.anim.frame_interval_ms(), move || {
                        dispatcher.dispatch(CountUpAction::Frame)
                    })
                });
                move || drop(interval)
            },
            (active, done),
        );
    }

    state.anim.value_at(state.frame)
}
