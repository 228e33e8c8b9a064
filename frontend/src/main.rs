//! Browser entry point of the bilingual portfolio page.

mod components;
mod config;
pub mod hooks;
mod i18n;
mod language_context;
mod logging;
mod pages;
mod utils;
mod web_dom;

use std::rc::Rc;

use portfolio_shared::Settings;
use yew::prelude::*;

use crate::{
    components::{
        footer::Footer, header::Header, loader::Loader, page_nav::PageNav,
        scroll_to_top_button::ScrollToTopButton, toast::ToastProvider,
    },
    language_context::LanguageProvider,
    pages::HomePage,
};

#[derive(Properties, PartialEq)]
struct AppProps {
    settings: Rc<Settings>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<Settings>> context={props.settings.clone()}>
            <ToastProvider>
                <LanguageProvider>
                    <Loader />
                    <Header />
                    <HomePage />
                    <Footer />
                    <PageNav />
                    <ScrollToTopButton />
                </LanguageProvider>
            </ToastProvider>
        </ContextProvider<Rc<Settings>>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    // 日志级别来自设置，所以先读设置再初始化日志
    let loaded = config::load_settings();
    let settings = match &loaded {
        Ok(Some(settings)) => settings.clone(),
        _ => Settings::default(),
    };
    logging::init(&settings.log_level);
    if let Err(err) = loaded {
        tracing::warn!("ignoring malformed site settings: {err:#}");
    }

    yew::Renderer::<App>::with_props(AppProps {
        settings: Rc::new(settings),
    })
    .render();
}
