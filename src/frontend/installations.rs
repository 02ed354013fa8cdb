use serde_json::json;
use std::rc::Rc;
use web_sys::{HtmlInputElement, InputEvent, MouseEvent};
use yew::prelude::*;

use super::modal::Modal;
use super::{open_in_new_context, JumpInButton};
use crate::config::SiteConfig;
use crate::gallery::{GalleryAction, GalleryState, InstallationDetail};
use crate::installations::{Catalog, Installation};
use crate::telemetry::{log_event, LogLevel};

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if matches!(action, GalleryAction::Close) && !self.is_open() {
            return self;
        }
        Rc::new((*self).clone().apply(action))
    }
}

#[derive(Properties, PartialEq)]
struct GridItemProps {
    installation: Installation,
    on_select: Callback<Installation>,
}

#[function_component(GridItem)]
fn grid_item(props: &GridItemProps) -> Html {
    let onclick = {
        let installation = props.installation.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(installation.clone()))
    };

    html! {
        <button type="button" class="installations__grid-item" onclick={onclick}>
            <img src={props.installation.image.clone()} alt={props.installation.name.clone()} loading="lazy" />
            <h6>{props.installation.name.clone()}</h6>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct DetailProps {
    installation: Installation,
    on_close: Callback<()>,
}

#[function_component(InstallationDetailCard)]
fn installation_detail_card(props: &DetailProps) -> Html {
    let detail = InstallationDetail::new(&props.installation);

    let on_jump = {
        let url = detail.jump_url();
        Callback::from(move |_: MouseEvent| open_in_new_context(&url))
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="artist-modal">
            <div class="top">
                <img src={detail.image.to_string()} alt={detail.name.to_string()} />
                <h2>{detail.name.to_string()}</h2>
            </div>
            <div class="middle">
                <p>{detail.description.to_string()}</p>
                if let Some(link) = detail.link {
                    <a href={link.to_string()} target="_blank" rel="noopener noreferrer" aria-label="Open installation link">
                        <span aria-hidden="true">{"🔗"}</span>
                    </a>
                }
            </div>
            <hr />
            <div class="bottom">
                <div>
                    <h6>{"Studio"}</h6>
                    <p>{detail.studio.to_string()}</p>
                </div>
                <div>
                    <h6>{"Decentraland coordinates"}</h6>
                    <p>{detail.coordinates_label()}</p>
                </div>
            </div>
            <hr />
            <div class="actions">
                <button type="button" class="actions__jump" onclick={on_jump}>
                    <span aria-hidden="true">{"↗"}</span>{" Jump in"}
                </button>
                <button type="button" class="actions__close" onclick={on_close}>
                    <span aria-hidden="true">{"✕"}</span>{" Close"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InstallationsProps {
    pub config: Rc<SiteConfig>,
    pub catalog: Rc<Catalog>,
}

#[function_component(InstallationsSection)]
pub fn installations_section(props: &InstallationsProps) -> Html {
    let search_term = use_state(String::new);
    let gallery = use_reducer(GalleryState::default);

    let on_search = {
        let search_term = search_term.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            search_term.set(input.value());
        })
    };

    let on_select = {
        let gallery = gallery.dispatcher();
        Callback::from(move |installation: Installation| {
            log_event(
                LogLevel::Info,
                "installation_selected",
                json!({ "id": installation.id, "name": installation.name }),
            );
            gallery.dispatch(GalleryAction::Select(installation));
        })
    };

    let on_close = {
        let gallery = gallery.dispatcher();
        Callback::from(move |_: ()| {
            log_event(LogLevel::Debug, "modal_closed", json!({}));
            gallery.dispatch(GalleryAction::Close);
        })
    };

    let entries = props.catalog.matching(search_term.as_str());
    let has_results = entries.clone().next().is_some();

    html! {
        <section class="installations" id="installations">
            <div class="installations__inner-container">
                <h2>{"Explore the Festival"}</h2>
                <div class="installations__filters">
                    <div>
                        {"Step inside creator-built venues, Party Pads, and interactive builds inspired by internet and stream culture."}
                    </div>
                    <div class="installations__filters__search">
                        <input
                            type="text"
                            placeholder="Search..."
                            value={(*search_term).clone()}
                            oninput={on_search}
                            aria-label="Search installations"
                        />
                    </div>
                </div>

                <div class="installations__grid">
                    { for entries.map(|installation| html! {
                        <GridItem
                            key={installation.id}
                            installation={installation.clone()}
                            on_select={on_select.clone()}
                        />
                    }) }
                </div>
                if !has_results {
                    <div class="installations__no-results">
                        <h2>{format!("No installations found for '{}'", *search_term)}</h2>
                        <p>{"Try searching for a different keyword or browse all the installations."}</p>
                    </div>
                }
            </div>
            <JumpInButton
                href={props.config.jump_position.url()}
                style={AttrValue::from("margin-top: 42px;")}
            />
            <Modal is_open={gallery.is_open()} on_close={on_close.clone()}>
                if let Some(installation) = gallery.active() {
                    <InstallationDetailCard installation={installation.clone()} on_close={on_close.clone()} />
                }
            </Modal>
        </section>
    }
}
