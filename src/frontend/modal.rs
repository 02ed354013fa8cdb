use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::listeners::{report_attach_failure, WindowListener};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay that renders its children only while open.
///
/// Closes on the backdrop or the Escape key; the key subscription exists
/// only while the overlay is showing.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.is_open, move |is_open| {
            let listener = if *is_open {
                WindowListener::attach("keydown", move |event: Event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .map(|key| key.key() == "Escape")
                        .unwrap_or(false);
                    if is_escape {
                        on_close.emit(());
                    }
                })
                .map_err(|error| report_attach_failure("keydown", &error))
                .ok()
            } else {
                None
            };
            move || drop(listener)
        });
    }

    if !props.is_open {
        return Html::default();
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal-panel" role="dialog" aria-modal="true" onclick={keep_open}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
