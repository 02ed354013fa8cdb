use yew::prelude::*;

use super::listeners::use_interval;
use super::now_millis;
use crate::festival::{FestivalPhase, FestivalWindow};

const TICK_MS: i32 = 1_000;

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub window: FestivalWindow,
}

#[function_component(FestivalCountdown)]
pub fn festival_countdown(props: &CountdownProps) -> Html {
    let festival = props.window;
    let phase = use_state_eq(|| festival.phase(now_millis()));

    {
        let phase = phase.clone();
        use_interval(TICK_MS, move || phase.set(festival.phase(now_millis())));
    }

    match *phase {
        FestivalPhase::Upcoming(countdown) => {
            let boxes = [
                ("days", countdown.days),
                ("hours", countdown.hours),
                ("minutes", countdown.minutes),
                ("seconds", countdown.seconds),
            ];

            html! {
                <div class="countdown-row" aria-label="Time until the festival starts">
                    { for boxes.iter().map(|(label, value)| html! {
                        <div class={classes!("countdown-box", format!("countdown-box--{label}"))}>
                            <span class="countdown-value">{format!("{value:02}")}</span>
                            <span class="countdown-label">{*label}</span>
                        </div>
                    }) }
                </div>
            }
        }
        FestivalPhase::Live => html! {
            <div class="countdown-row countdown-row--live">{"LIVE NOW"}</div>
        },
        FestivalPhase::Ended => Html::default(),
    }
}
