use std::rc::Rc;

use portfolio_shared::{
    scroll::{self, SectionBox},
    Settings,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, MouseEvent, Node};
use yew::prelude::*;

use crate::{config::PAGE_NAV_ID, hooks::use_scroll_derived, i18n::current as t, utils};

/// (section id, icon class, 中文, English)
const ITEMS: [(&str, &str, &str, &str); 5] = [
    ("home", "fas fa-home", "首頁", "Home"),
    ("about", "fas fa-user", "關於我", "About"),
    ("experience", "fas fa-briefcase", "經歷", "Experience"),
    ("skills", "fas fa-code", "技能", "Skills"),
    ("contact", "fas fa-envelope", "聯絡我", "Contact"),
];

fn section_under_probe(scroll_y: f64, offset: f64) -> Option<String> {
    let sections = utils::query_html_elements("section[id]");
    let ids: Vec<String> = sections.iter().map(|section| section.id()).collect();
    let boxes: Vec<SectionBox<'_>> = sections
        .iter()
        .zip(&ids)
        .map(|(section, id)| SectionBox {
            id: id.as_str(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect();
    scroll::active_section(&boxes, scroll_y, offset).map(str::to_string)
}

/// Floating section navigation with the current section highlighted.
#[function_component(PageNav)]
pub fn page_nav() -> Html {
    let settings = use_context::<Rc<Settings>>().unwrap_or_default();
    let open = use_state(|| false);
    let active = use_state_eq(|| None::<String>);
    let container = use_node_ref();
    let offset = settings.page_nav_offset;
    let probed = use_scroll_derived(move |scroll_y| section_under_probe(scroll_y, offset));

    // 点击导航外部时收起
    {
        let open = open.clone();
        let container = container.clone();
        use_effect_with((), move |_| {
            let document = window().and_then(|win| win.document());
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
                let inside = container
                    .get()
                    .is_some_and(|nav| nav.contains(target.as_ref()));
                if !inside {
                    open.set(false);
                }
            }) as Box<dyn Fn(MouseEvent)>);

            if let Some(document) = &document {
                let _ = document
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        closure.as_ref().unchecked_ref(),
                    );
                }
                drop(closure);
            }
        });
    }

    // 探针不在任何区块内时保留上一次的高亮
    {
        let active = active.clone();
        use_effect_with(probed, move |probed| {
            if probed.is_some() {
                active.set(probed.clone());
            }
            || ()
        });
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    html! {
        <div id={PAGE_NAV_ID} class={classes!("page-nav", (*open).then_some("active"))} ref={container}>
            <button class="page-nav-toggle" onclick={toggle} aria-label={t::TOGGLE_PAGE_NAV}>
                <i class="fas fa-bars"></i>
            </button>
            <div class="page-nav-menu">
                { for ITEMS.iter().map(|(id, icon, zh, en)| {
                    let href = format!("#{id}");
                    let is_active = active
                        .as_deref()
                        .is_some_and(|current| scroll::nav_item_targets(&href, current));
                    html! {
                        <a
                            href={href}
                            class={classes!("page-nav-item", is_active.then_some("active"))}
                            data-zh={*zh}
                            data-en={*en}
                            onclick={close.clone()}
                        >
                            <i class={*icon}></i>
                            <span>{ *zh }</span>
                        </a>
                    }
                }) }
            </div>
        </div>
    }
}
