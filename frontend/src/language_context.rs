//! Language state shared through the component tree.
//!
//! The [`LanguageSynchronizer`] owns the page text; this context only
//! exposes the active language to components that render language-aware
//! values (toasts, the mobile switcher) and routes the two inputs the
//! synchronizer needs: the toggle click and the content-ready signal.

use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Timeout;
use portfolio_shared::{Lang, LanguageSynchronizer, Settings};
use yew::prelude::*;

use crate::web_dom::WebDom;

#[derive(Clone, PartialEq)]
pub struct LanguageHandle {
    pub lang: Lang,
    toggle: Callback<()>,
    content_ready: Callback<()>,
}

impl LanguageHandle {
    pub fn toggle(&self) {
        self.toggle.emit(());
    }

    /// Signal that a component has finished writing to the page, so the
    /// brand can be reasserted if a toggle left it pending.
    pub fn content_ready(&self) {
        self.content_ready.emit(());
    }

    pub fn content_ready_callback(&self) -> Callback<()> {
        self.content_ready.clone()
    }
}

#[hook]
pub fn use_language() -> LanguageHandle {
    use_context::<LanguageHandle>().unwrap_or_else(|| LanguageHandle {
        lang: Lang::default(),
        toggle: Callback::from(|_| ()),
        content_ready: Callback::from(|_| ()),
    })
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let settings = use_context::<Rc<Settings>>().unwrap_or_default();
    let synchronizer: Rc<RefCell<LanguageSynchronizer>> =
        use_mut_ref(LanguageSynchronizer::default);
    let lang = use_state(Lang::default);

    let content_ready = {
        let synchronizer = synchronizer.clone();
        use_callback((), move |_: (), _| {
            let Some(dom) = WebDom::current() else {
                return;
            };
            synchronizer.borrow_mut().notify_content_ready(&dom);
        })
    };

    let toggle = {
        let synchronizer = synchronizer.clone();
        let lang = lang.clone();
        let content_ready = content_ready.clone();
        use_callback(settings.brand_reassert_delay_ms, move |_: (), delay| {
            let Some(dom) = WebDom::current() else {
                tracing::error!("no document to translate");
                return;
            };
            let next = synchronizer.borrow_mut().toggle_language(&dom);
            lang.set(next);

            // 兜底：没有组件发出 content-ready 时，定时补发一次
            if let Some(delay) = *delay {
                let content_ready = content_ready.clone();
                Timeout::new(delay, move || content_ready.emit(())).forget();
            }
        })
    };

    // 语言状态变更引起的重渲染提交之后，页面内容即为就绪
    {
        let content_ready = content_ready.clone();
        use_effect_with(*lang, move |_| {
            content_ready.emit(());
            || ()
        });
    }

    let handle = LanguageHandle {
        lang: *lang,
        toggle,
        content_ready,
    };

    html! {
        <ContextProvider<LanguageHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<LanguageHandle>>
    }
}
