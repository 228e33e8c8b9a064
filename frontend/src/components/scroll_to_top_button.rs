use std::rc::Rc;

use portfolio_shared::{scroll, Settings};
use yew::prelude::*;

use crate::{config::BACK_TO_TOP_ID, hooks::use_scroll_derived, i18n::current as t, utils};

#[function_component(ScrollToTopButton)]
pub fn scroll_to_top_button() -> Html {
    let settings = use_context::<Rc<Settings>>().unwrap_or_default();
    let threshold = settings.back_to_top_threshold;
    // 滚动超过阈值显示按钮
    let visible = use_scroll_derived(move |scroll_y| scroll::back_to_top_visible(scroll_y, threshold));

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        utils::smooth_scroll_to(0.0);
    });

    html! {
        <button
            id={BACK_TO_TOP_ID}
            class={classes!("back-to-top", visible.then_some("visible"))}
            onclick={onclick}
            aria-label={t::SCROLL_TO_TOP}
            title={t::SCROLL_TO_TOP}
        >
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="24"
                height="24"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <polyline points="18 15 12 9 6 15"></polyline>
            </svg>
        </button>
    }
}
