use std::rc::Rc;

use portfolio_shared::{scroll, Lang, Settings};
use yew::prelude::*;

use crate::{
    config::LANG_TOGGLE_ID,
    hooks::use_scroll_derived,
    i18n::current as t,
    language_context::use_language,
};

/// Brand shown in the navbar logo.
pub const BRAND_ZH: &str = "羅筠笙";
pub const BRAND_EN: &str = "Yun-Sheng Lo";

const NAV_LINKS: [(&str, &str, &str); 5] = [
    ("#home", "首頁", "Home"),
    ("#about", "關於我", "About"),
    ("#experience", "經歷", "Experience"),
    ("#skills", "技能", "Skills"),
    ("#contact", "聯絡我", "Contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let settings = use_context::<Rc<Settings>>().unwrap_or_default();
    let language = use_language();
    let mobile_menu_open = use_state(|| false);
    let threshold = settings.navbar_scrolled_threshold;
    let scrolled = use_scroll_derived(move |scroll_y| scroll::navbar_scrolled(scroll_y, threshold));

    // 导航栏每次提交后通知一次，待定的品牌名在此时补写
    {
        let language = language.clone();
        use_effect(move || {
            language.content_ready();
            || ()
        });
    }

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(!*mobile_menu_open))
    };

    let close_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(false))
    };

    let on_toggle_language = {
        let language = language.clone();
        Callback::from(move |_: MouseEvent| language.toggle())
    };

    html! {
        <nav class={classes!("navbar", scrolled.then_some("scrolled"))}>
            <div class="nav-container">
                <div class="nav-logo">
                    <a href="#home">
                        <h2 data-zh={BRAND_ZH} data-en={BRAND_EN}>{ BRAND_ZH }</h2>
                    </a>
                </div>

                <ul class={classes!("nav-menu", (*mobile_menu_open).then_some("active"))}>
                    { for NAV_LINKS.iter().map(|(href, zh, en)| html! {
                        <li class="nav-item">
                            <a
                                href={*href}
                                class="nav-link"
                                data-zh={*zh}
                                data-en={*en}
                                onclick={close_mobile_menu.clone()}
                            >
                                { *zh }
                            </a>
                        </li>
                    }) }
                    if *mobile_menu_open {
                        <li class="nav-item language-switcher mobile">
                            <button
                                class="lang-btn"
                                onclick={on_toggle_language.clone()}
                                aria-label={t::TOGGLE_LANGUAGE}
                            >
                                { language.lang.toggled().switch_label() }
                            </button>
                        </li>
                    }
                </ul>

                <div class="language-switcher">
                    // 文本之后由同步器维护，这里只给初始值
                    <button
                        id={LANG_TOGGLE_ID}
                        class="lang-btn"
                        onclick={on_toggle_language}
                        aria-label={t::TOGGLE_LANGUAGE}
                    >
                        { Lang::default().toggled().switch_label() }
                    </button>
                </div>

                <div
                    class={classes!("hamburger", (*mobile_menu_open).then_some("active"))}
                    onclick={toggle_mobile_menu}
                    aria-label={t::TOGGLE_MENU}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}
