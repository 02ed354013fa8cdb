mod countdown;
mod hero;
mod installations;
mod listeners;
mod map;
mod modal;

use serde_json::json;
use std::rc::Rc;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::error::FestivalError;
use crate::installations::Catalog;
use crate::telemetry::{self, log_event, LogLevel};

use hero::Hero;
use installations::InstallationsSection;
use map::MapSection;

const MOUNT_POINT_ID: &str = "app";

fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0)
}

fn scroll_offset() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

fn open_in_new_context(url: &str) {
    let opened = window().map(|w| w.open_with_url_and_target(url, "_blank"));

    match opened {
        Some(Ok(_)) => log_event(LogLevel::Info, "jump_in_opened", json!({ "url": url })),
        Some(Err(error)) => log_event(
            LogLevel::Warn,
            "jump_in_failed",
            json!({ "url": url, "error": FestivalError::from(error).to_string() }),
        ),
        None => log_event(LogLevel::Warn, "jump_in_failed", json!({ "url": url })),
    }
}

#[derive(Properties, PartialEq)]
struct JumpInButtonProps {
    href: AttrValue,
    #[prop_or_default]
    style: Option<AttrValue>,
}

#[function_component(JumpInButton)]
fn jump_in_button(props: &JumpInButtonProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |_: MouseEvent| {
            log_event(LogLevel::Info, "jump_in_opened", json!({ "url": href.as_str() }));
        })
    };

    html! {
        <a
            class="jump-in-button"
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            style={props.style.clone()}
            onclick={onclick}
        >
            <span>{"JUMP IN NOW"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
    pub catalog: Rc<Catalog>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let reduced_motion = use_memo((), |_| prefers_reduced_motion());

    html! {
        <main class="festival-page">
            <Hero config={props.config.clone()} reduced_motion={*reduced_motion} />
            <InstallationsSection config={props.config.clone()} catalog={props.catalog.clone()} />
            <MapSection config={props.config.clone()} />
        </main>
    }
}

fn start() -> Result<(), FestivalError> {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_POINT_ID))
        .ok_or(FestivalError::MissingMountPoint)?;

    let config = SiteConfig::from_lookup(|name| root.get_attribute(name));
    telemetry::set_level(config.log_level);
    for attribute in &config.ignored_overrides {
        log_event(
            LogLevel::Warn,
            "config_override_ignored",
            json!({ "attribute": attribute }),
        );
    }

    let catalog = Catalog::embedded()?;
    log_event(
        LogLevel::Info,
        "catalog_loaded",
        json!({ "installations": catalog.len() }),
    );
    log_event(
        LogLevel::Info,
        "startup",
        json!({
            "festival_start": config.festival.start.to_string(),
            "festival_end": config.festival.end.to_string(),
            "map_breakpoint": config.map_breakpoint,
            "parallax_factor": config.parallax_factor,
        }),
    );

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            config: Rc::new(config),
            catalog: Rc::new(catalog),
        },
    )
    .render();

    Ok(())
}

pub fn run() {
    telemetry::init();

    if let Err(error) = start() {
        log_event(
            LogLevel::Error,
            "startup_failed",
            json!({ "error": error.to_string() }),
        );
    }
}
