use std::rc::Rc;

use portfolio_shared::{
    overrides::{portfolio_table, section_ids, OverrideSection, OverrideTable},
    Settings,
};
use yew::prelude::*;

use crate::{
    components::contact_form::ContactForm,
    config::asset_path,
    hooks::{
        use_card_hovers, use_parallax, use_reveal_on_scroll, use_smooth_anchor_scroll,
        use_typing_animation,
    },
    language_context::use_language,
};

/// Chinese text of the entry at (`key`, `selector`, `nth`); the page is
/// first painted in Chinese and the synchronizer takes it from there.
fn initial_text(
    section: &OverrideSection,
    key: &str,
    selector: Option<&str>,
    nth: usize,
) -> &'static str {
    section
        .entries_for(key)
        .find(|entry| match (entry.target, selector) {
            (None, None) => true,
            (Some(target), Some(selector)) => target.selector == selector && target.nth == nth,
            _ => false,
        })
        .map(|entry| entry.text.zh)
        .unwrap_or_default()
}

fn section_of<'a>(table: &'a OverrideTable, id: &str) -> Option<&'a OverrideSection> {
    let section = table.section(id);
    if section.is_none() {
        tracing::warn!("override table has no `{id}` section");
    }
    section
}

const HIGHLIGHT_ICONS: [(&str, &str); 3] = [
    ("machine-learning", "fas fa-brain"),
    ("instructor", "fas fa-person-skiing"),
    ("learning", "fas fa-book-open"),
];

/// (slot, 中文日期, English date)
const TIMELINE_DATES: [(&str, &str, &str); 3] = [
    ("snowboard", "2024 冬季", "Winter 2024"),
    ("ntu", "2023 - 現在", "2023 - Present"),
    ("ncku", "2018 - 2023", "2018 - 2023"),
];

const SKILL_WIDTHS: [(&str, &[u8]); 3] = [
    ("languages", &[90, 85, 75]),
    ("tools", &[80, 85, 80, 70, 75]),
    ("soft", &[90, 90, 85, 85]),
];

fn lookup<T: Copy + Default>(pairs: &[(&str, T)], key: &str) -> T {
    pairs
        .iter()
        .find(|(slot, _)| *slot == key)
        .map(|(_, value)| *value)
        .unwrap_or_default()
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let settings = use_context::<Rc<Settings>>().unwrap_or_default();
    let language = use_language();
    let table = use_memo((), |_| portfolio_table());

    use_smooth_anchor_scroll(settings.navbar_offset);
    use_reveal_on_scroll(
        settings.reveal_threshold,
        settings.reveal_root_margin.clone(),
        settings.skill_bar_delay_ms,
    );
    use_parallax(settings.parallax_rate);
    use_card_hovers();
    use_typing_animation(
        settings.typing_start_delay_ms,
        settings.typing_interval_ms,
        language.content_ready_callback(),
    );

    html! {
        <main>
            { render_hero() }
            { render_about(&table) }
            { render_experience(&table) }
            { render_skills(&table) }
            { render_contact() }
        </main>
    }
}

fn render_hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-container">
                <div class="hero-content fade-in">
                    <h1 class="hero-title">
                        <span data-zh="你好，我是" data-en="Hi, I'm">{ "你好，我是" }</span>
                        <span class="name" data-zh="羅筠笙" data-en="Yun-Sheng Lo">{ "羅筠笙" }</span>
                    </h1>
                    <p
                        class="hero-subtitle"
                        data-zh="臺大工科海洋所碩士生 · 機器學習 · 滑雪教練"
                        data-en="NTU ESOE Graduate Student · Machine Learning · Snowboard Instructor"
                    >
                        { "臺大工科海洋所碩士生 · 機器學習 · 滑雪教練" }
                    </p>
                    <div class="hero-buttons">
                        <a href="#contact" class="btn btn-primary" data-zh="聯絡我" data-en="Contact Me">
                            { "聯絡我" }
                        </a>
                        <a href="#about" class="btn btn-secondary" data-zh="了解更多" data-en="Learn More">
                            { "了解更多" }
                        </a>
                    </div>
                </div>
                <div class="hero-image slide-in-right">
                    <img src={asset_path("images/profile.jpg")} alt="Yun-Sheng Lo" />
                </div>
            </div>
        </section>
    }
}

fn section_title(zh: &'static str, en: &'static str) -> Html {
    html! {
        <h2 class="section-title fade-in" data-zh={zh} data-en={en}>{ zh }</h2>
    }
}

fn render_about(table: &OverrideTable) -> Html {
    let paragraphs = section_of(table, section_ids::ABOUT).map(|about| {
        about
            .slots()
            .into_iter()
            .map(|slot| {
                html! {
                    <p data-i18n-slot={slot.key}>{ initial_text(about, slot.key, None, 0) }</p>
                }
            })
            .collect::<Html>()
    });

    let highlights = section_of(table, section_ids::HIGHLIGHTS).map(|section| {
        section
            .slots()
            .into_iter()
            .map(|slot| {
                html! {
                    <div class="highlight fade-in" data-i18n-slot={slot.key}>
                        <i class={lookup(&HIGHLIGHT_ICONS, slot.key)}></i>
                        <h4>{ initial_text(section, slot.key, Some("h4"), 0) }</h4>
                        <p>{ initial_text(section, slot.key, Some("p"), 0) }</p>
                    </div>
                }
            })
            .collect::<Html>()
    });

    html! {
        <section id="about" class="about">
            <div class="container">
                { section_title("關於我", "About Me") }
                <div class="about-content">
                    <div class="about-text slide-in-left">
                        { paragraphs.unwrap_or_default() }
                    </div>
                    <div class="about-highlights">
                        { highlights.unwrap_or_default() }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn render_experience(table: &OverrideTable) -> Html {
    let items = section_of(table, section_ids::TIMELINE).map(|section| {
        section
            .slots()
            .into_iter()
            .map(|slot| {
                let (_, date_zh, date_en) = TIMELINE_DATES
                    .iter()
                    .find(|(key, ..)| *key == slot.key)
                    .copied()
                    .unwrap_or_default();
                let subtitle = initial_text(section, slot.key, Some("h4"), 0);
                html! {
                    <div class="timeline-item fade-in">
                        <div class="timeline-date" data-zh={date_zh} data-en={date_en}>{ date_zh }</div>
                        <div class="timeline-content" data-i18n-slot={slot.key}>
                            <h3>{ initial_text(section, slot.key, Some("h3"), 0) }</h3>
                            if !subtitle.is_empty() {
                                <h4>{ subtitle }</h4>
                            }
                            <p class="timeline-description">
                                { initial_text(section, slot.key, Some(".timeline-description"), 0) }
                            </p>
                        </div>
                    </div>
                }
            })
            .collect::<Html>()
    });

    html! {
        <section id="experience" class="experience">
            <div class="container">
                { section_title("經歷", "Experience") }
                <div class="timeline">
                    { items.unwrap_or_default() }
                </div>
            </div>
        </section>
    }
}

fn render_skills(table: &OverrideTable) -> Html {
    let categories = section_of(table, section_ids::SKILLS).map(|section| {
        section
            .slots()
            .into_iter()
            .map(|slot| {
                let widths: &[u8] = lookup(&SKILL_WIDTHS, slot.key);
                let items = section
                    .entries_for(slot.key)
                    .filter_map(|entry| entry.target.filter(|target| target.selector == ".skill-item span"))
                    .map(|target| {
                        let width = widths.get(target.nth).copied().unwrap_or(0);
                        html! {
                            <div class="skill-item">
                                <span>{ initial_text(section, slot.key, Some(target.selector), target.nth) }</span>
                                <div class="skill-bar">
                                    <div class="skill-progress" data-width={width.to_string()}></div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Html>();
                html! {
                    <div class="skill-category fade-in" data-i18n-slot={slot.key}>
                        <h3>{ initial_text(section, slot.key, Some("h3"), 0) }</h3>
                        <div class="skill-items">{ items }</div>
                    </div>
                }
            })
            .collect::<Html>()
    });

    html! {
        <section id="skills" class="skills">
            <div class="container">
                { section_title("技能", "Skills") }
                <div class="skills-grid">
                    { categories.unwrap_or_default() }
                </div>
            </div>
        </section>
    }
}

fn render_contact() -> Html {
    html! {
        <section id="contact" class="contact">
            <div class="container">
                { section_title("聯絡我", "Contact Me") }
                <div class="contact-content">
                    <div class="contact-info slide-in-left">
                        <h3 data-zh="保持聯繫" data-en="Get In Touch">{ "保持聯繫" }</h3>
                        <p
                            data-zh="歡迎與我聯絡，討論合作機會或任何問題。"
                            data-en="Feel free to reach out to discuss opportunities or any questions."
                        >
                            { "歡迎與我聯絡，討論合作機會或任何問題。" }
                        </p>
                        <div class="contact-item">
                            <i class="fas fa-map-marker-alt"></i>
                            <span data-zh="臺北，臺灣" data-en="Taipei, Taiwan">{ "臺北，臺灣" }</span>
                        </div>
                    </div>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}
