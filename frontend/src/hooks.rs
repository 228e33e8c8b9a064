//! Page-wide effect hooks. Each one attaches its listeners after the first
//! render and detaches them on unmount.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use portfolio_shared::{
    effects::{self, HoverStyle, HOVER_CARD_SELECTOR, REVEAL_SELECTOR},
    scroll,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};
use yew::prelude::*;

use crate::utils::{self, query_html_element, query_html_elements, set_style};

/// Attach `handler` to window `scroll`; the returned closure detaches it.
fn listen_scroll(handler: impl Fn() + 'static) -> impl FnOnce() {
    let window = window();
    let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn()>);

    if let Some(window) = &window {
        if let Err(err) =
            window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        {
            tracing::warn!("failed to listen for scroll: {err:?}");
        }
    }

    move || {
        if let Some(window) = window {
            let _ = window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
        drop(closure);
    }
}

/// A value derived from `window.scrollY`. The component re-renders only
/// when the derived value changes, not on every scroll event.
#[hook]
pub fn use_scroll_derived<T, F>(derive: F) -> T
where
    T: Clone + PartialEq + 'static,
    F: Fn(f64) -> T + 'static,
{
    let derive = Rc::new(derive);
    let value = {
        let derive = derive.clone();
        use_state_eq(move || derive(utils::scroll_y()))
    };

    {
        let value = value.clone();
        use_effect_with((), move |_| listen_scroll(move || value.set(derive(utils::scroll_y()))));
    }

    (*value).clone()
}

/// Add `visible` to every reveal target once it scrolls into view and fill
/// skill bars to their `data-width`.
#[hook]
pub fn use_reveal_on_scroll(threshold: f64, root_margin: String, skill_delay_ms: u32) {
    use_effect_with((), move |_| {
        // 进度条先归零，等进入视口再展开
        for bar in query_html_elements(".skill-progress") {
            if bar.has_attribute("data-width") {
                set_style(&bar, "width", "0%");
            }
        }

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1("visible");
                if target.class_list().contains("skill-progress") {
                    animate_skill_bar(target, skill_delay_ms);
                }
            }
        })
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&threshold.into());
        options.set_root_margin(&root_margin);

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => {
                for element in query_html_elements(REVEAL_SELECTOR) {
                    observer.observe(&element);
                }
                Some(observer)
            },
            Err(err) => {
                tracing::warn!("IntersectionObserver unavailable: {err:?}");
                None
            },
        };

        move || {
            if let Some(observer) = observer {
                observer.disconnect();
            }
            drop(callback);
        }
    });
}

fn animate_skill_bar(bar: Element, delay_ms: u32) {
    let Some(width) = bar.get_attribute("data-width") else {
        return;
    };
    let Some(width) = effects::skill_width(&width) else {
        tracing::debug!("ignoring skill bar with data-width={width:?}");
        return;
    };
    let Ok(bar) = bar.dyn_into::<HtmlElement>() else {
        return;
    };
    Timeout::new(delay_ms, move || set_style(&bar, "width", &width)).forget();
}

/// Translate the hero against the scroll direction. Writes the style
/// straight from the listener, so the page itself never re-renders.
#[hook]
pub fn use_parallax(rate: f64) {
    use_effect_with((), move |_| {
        let hero = query_html_element(".hero");
        listen_scroll(move || {
            if let Some(hero) = &hero {
                let offset = effects::parallax_offset(utils::scroll_y(), rate);
                set_style(hero, "transform", &effects::translate_y(offset));
            }
        })
    });
}

/// Lift cards while hovered.
#[hook]
pub fn use_card_hovers() {
    use_effect_with((), move |_| {
        let mut listeners = Vec::new();

        for card in query_html_elements(HOVER_CARD_SELECTOR) {
            for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
                let target = card.clone();
                let closure = Closure::wrap(Box::new(move |_: MouseEvent| {
                    let style = HoverStyle::for_hover(hovered);
                    set_style(&target, "transform", style.transform);
                    set_style(&target, "box-shadow", style.box_shadow);
                }) as Box<dyn Fn(MouseEvent)>);
                if card
                    .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                    .is_ok()
                {
                    listeners.push((card.clone(), event, closure));
                }
            }
        }

        move || {
            for (card, event, closure) in listeners {
                let _ =
                    card.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
        }
    });
}

/// Retype the hero name one character at a time. `on_done` fires once the
/// last character is written, or once the text was replaced from outside.
#[hook]
pub fn use_typing_animation(start_delay_ms: u32, interval_ms: u32, on_done: Callback<()>) {
    use_effect_with((), move |_| {
        let pending = query_html_element(".hero .name").map(|name| {
            let text = name.text_content().unwrap_or_default();
            let frames: Rc<Vec<String>> =
                Rc::new(effects::typing_frames(&text).map(str::to_string).collect());
            name.set_text_content(Some(""));
            Timeout::new(start_delay_ms, move || {
                type_next(name, frames, 0, interval_ms, on_done);
            })
        });

        move || drop(pending)
    });
}

fn type_next(
    element: HtmlElement,
    frames: Rc<Vec<String>>,
    index: usize,
    interval_ms: u32,
    on_done: Callback<()>,
) {
    let expected = match index {
        0 => "",
        _ => frames[index - 1].as_str(),
    };
    // 文本被语言切换改写过，以改写后的内容为准
    if element.text_content().unwrap_or_default() != expected {
        on_done.emit(());
        return;
    }
    let Some(frame) = frames.get(index) else {
        on_done.emit(());
        return;
    };
    element.set_text_content(Some(frame));
    Timeout::new(interval_ms, move || {
        type_next(element, frames, index + 1, interval_ms, on_done);
    })
    .forget();
}

/// Route clicks on any `a[href^="#"]` to a smooth scroll that stops
/// `navbar_offset` pixels above the target.
#[hook]
pub fn use_smooth_anchor_scroll(navbar_offset: f64) {
    use_effect_with((), move |_| {
        let document = window().and_then(|win| win.document());
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            let Some(anchor) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| target.closest("a[href^=\"#\"]").ok().flatten())
            else {
                return;
            };
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if let Some(offset_top) = utils::anchor_offset_top(&href) {
                event.prevent_default();
                utils::smooth_scroll_to(scroll::anchor_scroll_top(offset_top, navbar_offset));
            }
        }) as Box<dyn Fn(MouseEvent)>);

        if let Some(document) = &document {
            if let Err(err) =
                document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            {
                tracing::warn!("failed to listen for anchor clicks: {err:?}");
            }
        }

        move || {
            if let Some(document) = document {
                let _ = document
                    .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            }
            drop(closure);
        }
    });
}

