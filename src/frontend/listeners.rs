use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{AddEventListenerOptions, Event, Window};
use yew::prelude::*;

use crate::error::FestivalError;
use crate::telemetry::{log_event, LogLevel};

fn current_window() -> Result<Window, FestivalError> {
    web_sys::window().ok_or_else(|| FestivalError::Dom("no window".to_string()))
}

/// A window event subscription that unsubscribes when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn attach<F>(event: &'static str, handler: F) -> Result<Self, FestivalError>
    where
        F: FnMut(Event) + 'static,
    {
        let window = current_window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// A repeating timer that is cleared when dropped.
pub struct Interval {
    window: Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start<F>(period_ms: i32, tick: F) -> Result<Self, FestivalError>
    where
        F: FnMut() + 'static,
    {
        let window = current_window()?;
        let callback = Closure::<dyn FnMut()>::new(tick);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms,
        )?;

        Ok(Self {
            window,
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.handle);
    }
}

pub(super) fn report_attach_failure(source: &str, error: &FestivalError) {
    log_event(
        LogLevel::Warn,
        "listener_attach_failed",
        json!({ "source": source, "error": error.to_string() }),
    );
}

/// Subscribes to a window event for as long as the component is mounted.
#[hook]
pub fn use_window_listener<F>(event: &'static str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    use_effect_with((), move |_| {
        let listener = WindowListener::attach(event, handler)
            .map_err(|error| report_attach_failure(event, &error))
            .ok();
        move || drop(listener)
    });
}

/// Calls `tick` every `period_ms` while the component is mounted.
#[hook]
pub fn use_interval<F>(period_ms: i32, tick: F)
where
    F: FnMut() + 'static,
{
    use_effect_with((), move |_| {
        let interval = Interval::start(period_ms, tick)
            .map_err(|error| report_attach_failure("interval", &error))
            .ok();
        move || drop(interval)
    });
}
