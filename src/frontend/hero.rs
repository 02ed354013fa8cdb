use std::rc::Rc;
use yew::prelude::*;

use super::countdown::FestivalCountdown;
use super::listeners::use_window_listener;
use super::{scroll_offset, JumpInButton};
use crate::config::SiteConfig;
use crate::motion::{
    character_style, entrance_style, ParallaxState, ARROW_ENTRANCE, BOTTOM_ENTRANCE,
    CAPTION_ENTRANCE, DATE_BADGE_ENTRANCE, LOGO_ENTRANCE,
};

const BLUR_ONE_IMAGE: &str = "/assets/hero/blur.webp";
const BLUR_TWO_IMAGE: &str = "/assets/hero/blur-2.webp";
const CHARACTER_IMAGE: &str = "/assets/hero/lightstick.webp";
const LOGO_IMAGE: &str = "/assets/music-festival/dmf25-logo.png";
const DATE_ARROW_IMAGE: &str = "/assets/hero/date-arrow.svg";
const SEPARATOR_LEFT_IMAGE: &str = "/assets/hero/cyan-arrow-left.webp";
const SEPARATOR_RIGHT_IMAGE: &str = "/assets/hero/cyan-arrow-right.svg";

impl Reducible for ParallaxState {
    type Action = f64;

    fn reduce(self: Rc<Self>, offset: f64) -> Rc<Self> {
        Rc::new(self.on_scroll(offset))
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub config: Rc<SiteConfig>,
    pub reduced_motion: bool,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let factor = props.config.parallax_factor;
    let parallax = use_reducer(move || ParallaxState::new(factor).on_scroll(scroll_offset()));

    {
        let parallax = parallax.dispatcher();
        use_window_listener("scroll", move |_| parallax.dispatch(scroll_offset()));
    }

    let reduced_motion = props.reduced_motion;
    let badge = props.config.festival.badge();
    let backdrop_mask = format!(
        "-webkit-mask-image: url({BLUR_ONE_IMAGE}); mask-image: url({BLUR_ONE_IMAGE});"
    );

    html! {
        <section class="hero">
            <div class="hero__backdrop-masked" style={backdrop_mask} aria-hidden="true" />
            <img class="hero__blur hero__blur--one" src={BLUR_ONE_IMAGE} alt="" aria-hidden="true" />
            <img class="hero__blur hero__blur--two" src={BLUR_TWO_IMAGE} alt="" aria-hidden="true" />
            <img
                class="hero__character"
                src={CHARACTER_IMAGE}
                alt="Festival Character"
                style={character_style(&parallax, reduced_motion)}
            />
            <div class="hero__container">
                <div class="hero__row">
                    <div class="hero__left">
                        <div class="hero__logo" style={entrance_style(&LOGO_ENTRANCE, reduced_motion)}>
                            <img class="hero__logo-image" src={LOGO_IMAGE} alt="Decentraland Music Festival" />
                            <h2 class="hero__tagline">
                                {"WHERE THE STREAM "}<br />{" HITS THE MAIN STAGE"}
                            </h2>
                            <p class="hero__description">
                                {"A four-day festival where fans and streamers redefine “going live.”"}
                            </p>
                        </div>

                        <div class="hero__bottom" style={entrance_style(&BOTTOM_ENTRANCE, reduced_motion)}>
                            <JumpInButton href={props.config.jump_position.url()} />
                            <div class="hero__features">
                                <span class="hero__feature">{"FREE TO ENTER"}</span>
                                <img class="hero__separator" src={SEPARATOR_LEFT_IMAGE} alt="" />
                                <span class="hero__feature">{"NO HEADSET NEEDED"}</span>
                                <img class="hero__separator" src={SEPARATOR_RIGHT_IMAGE} alt="" />
                                <span class="hero__feature">{"NEW FAN EXPERIENCES"}</span>
                            </div>
                        </div>
                    </div>

                    <div class="hero__right">
                        <div class="countdown-container">
                            <div class="date-badge" style={entrance_style(&DATE_BADGE_ENTRANCE, reduced_motion)}>
                                <div class="date-badge__arrow" style={entrance_style(&ARROW_ENTRANCE, reduced_motion)}>
                                    <img src={DATE_ARROW_IMAGE} alt="arrow" />
                                </div>
                                <div class="date-badge__box">{badge.range}</div>
                                <div class="date-badge__box">{badge.year}</div>
                            </div>
                            <FestivalCountdown window={props.config.festival} />
                            <p class="date-caption" style={entrance_style(&CAPTION_ENTRANCE, reduced_motion)}>
                                {"HOSTED BY DECENTRALAND, THE SOCIAL VIRTUAL WORLD"}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
