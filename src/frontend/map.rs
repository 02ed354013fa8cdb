use serde_json::json;
use std::rc::Rc;
use yew::prelude::*;

use super::listeners::use_window_listener;
use super::{viewport_width, JumpInButton};
use crate::config::SiteConfig;
use crate::telemetry::{log_event, LogLevel};
use crate::viewport::ViewportState;

const DECORATOR_LEFT_IMAGE: &str = "/assets/maps/left-decorator.svg";
const DECORATOR_RIGHT_IMAGE: &str = "/assets/maps/right-decorator.svg";

impl Reducible for ViewportState {
    type Action = f64;

    fn reduce(self: Rc<Self>, width: f64) -> Rc<Self> {
        let next = self.on_resize(width);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MapProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(MapSection)]
pub fn map_section(props: &MapProps) -> Html {
    let breakpoint = props.config.map_breakpoint;
    let viewport = use_reducer(move || ViewportState::new(viewport_width(), breakpoint));

    {
        let viewport = viewport.dispatcher();
        use_window_listener("resize", move |_| viewport.dispatch(viewport_width()));
    }

    let class = viewport.class();
    use_effect_with(class, |class| {
        log_event(
            LogLevel::Debug,
            "viewport_classified",
            json!({ "class": class.as_str() }),
        );
    });

    html! {
        <section class="map" id="map">
            <div class="map__header">
                <img class="map__decorator" src={DECORATOR_LEFT_IMAGE} alt="Decorator" />
                <div class="map__title-wrapper">
                    <h2 class="map__title">{"FIND YOUR WAY"}</h2>
                    <p class="map__description">
                        {"Navigate Decentraland’s Music Festival with ease: see where every performance and experience is happening."}
                    </p>
                </div>
                <img class="map__decorator" src={DECORATOR_RIGHT_IMAGE} alt="Decorator" />
            </div>
            <div class="map__content">
                <img class="map__image" src={class.map_image()} alt="Map" />
            </div>
            <JumpInButton href={props.config.jump_position.url()} />
        </section>
    }
}
