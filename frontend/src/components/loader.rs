use std::rc::Rc;

use gloo_timers::callback::Timeout;
use portfolio_shared::Settings;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;
use yew::prelude::*;

use crate::{components::header::BRAND_ZH, i18n::current as t};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Shown,
    Fading,
    Gone,
}

/// Full-screen splash kept until the window `load` event, then faded out.
#[function_component(Loader)]
pub fn loader() -> Html {
    let settings = use_context::<Rc<Settings>>().unwrap_or_default();
    let phase = use_state(|| Phase::Shown);

    {
        let phase = phase.clone();
        let (hold, fade) = (settings.loader_hold_ms, settings.loader_fade_ms);
        use_effect_with((), move |_| {
            let timers: Rc<std::cell::RefCell<Vec<Timeout>>> = Rc::default();

            let start = {
                let timers = timers.clone();
                move || {
                    let fading = phase.clone();
                    let hold_timer = Timeout::new(hold, move || {
                        fading.set(Phase::Fading);
                        Timeout::new(fade, move || fading.set(Phase::Gone)).forget();
                    });
                    timers.borrow_mut().push(hold_timer);
                }
            };

            let window = window();
            let document_loaded = window
                .as_ref()
                .and_then(|win| win.document())
                .is_some_and(|doc| doc.ready_state() == "complete");

            // load 事件可能在挂载前就已触发
            let listener = match &window {
                Some(win) if !document_loaded => {
                    let closure = Closure::once(start);
                    if win
                        .add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())
                        .is_err()
                    {
                        tracing::warn!("failed to listen for window load");
                    }
                    Some(closure)
                },
                _ => {
                    start();
                    None
                },
            };

            move || {
                if let (Some(win), Some(closure)) = (window, listener) {
                    let _ = win
                        .remove_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
                }
                timers.borrow_mut().clear();
            }
        });
    }

    if *phase == Phase::Gone {
        return html! {};
    }

    let style = format!(
        "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
         background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); \
         display: flex; justify-content: center; align-items: center; z-index: 10000; \
         transition: opacity {}ms ease; opacity: {};",
        settings.loader_fade_ms,
        if *phase == Phase::Fading { 0 } else { 1 },
    );

    html! {
        <div class="loader" style={style} aria-label={t::LOADING}>
            <div style="color: white; font-size: 2rem; font-weight: 600;">{ BRAND_ZH }</div>
        </div>
    }
}
