//! Language switching over a full portfolio page, in legacy positional
//! markup and in keyed, reordered markup.

#[cfg(test)]
mod tests {
    use portfolio_shared::{
        memory::{ElementSpec, MemoryDom, NodeId},
        overrides::{portfolio_table, section_ids, OverrideSection, SLOT_ATTRIBUTE},
        ContentDom, Lang, LanguageSynchronizer,
    };

    const BRAND_ZH: &str = "羅筠笙";
    const BRAND_EN: &str = "Yun-Sheng Lo";

    /// Create the node an override target selector points at, inside `block`.
    fn target_node(dom: &MemoryDom, block: NodeId, selector: &str, text: &str) {
        match selector {
            ".skill-item span" => {
                let item = dom.append(block, ElementSpec::new("div").class("skill-item"));
                dom.append(item, ElementSpec::new("span").text(text));
            },
            ".timeline-description" => {
                dom.append(block, ElementSpec::new("p").class("timeline-description").text(text));
            },
            tag => {
                dom.append(block, ElementSpec::new(tag).text(text));
            },
        }
    }

    /// Render a section's blocks with their Chinese text, optionally keyed
    /// and in reverse order.
    fn render_section(dom: &MemoryDom, section: &OverrideSection, keyed: bool, reversed: bool) {
        let (parent, block_spec) = match section.container {
            ".about-text p" => {
                let wrapper = dom.append(dom.root(), ElementSpec::new("div").class("about-text"));
                (wrapper, ElementSpec::new("p"))
            },
            container => {
                let class = container.trim_start_matches('.');
                (dom.root(), ElementSpec::new("div").class(class))
            },
        };

        let mut slots = section.slots();
        if reversed {
            slots.reverse();
        }
        for slot in slots {
            let mut spec = block_spec.clone();
            if keyed {
                spec = spec.attr(SLOT_ATTRIBUTE, slot.key);
            }
            let whole_text = section
                .entries_for(slot.key)
                .find(|entry| entry.target.is_none())
                .map(|entry| entry.text.zh)
                .unwrap_or_default();
            let block = dom.append(parent, spec.text(whole_text));
            for entry in section.entries_for(slot.key) {
                if let Some(target) = entry.target {
                    target_node(dom, block, target.selector, entry.text.zh);
                }
            }
        }
    }

    struct Page {
        dom: MemoryDom,
        toggle: NodeId,
        brand: NodeId,
        half_annotated: NodeId,
        nav_label: NodeId,
        footer: NodeId,
    }

    fn portfolio_page(keyed: bool) -> Page {
        let dom = MemoryDom::new();
        let table = portfolio_table();

        let navbar = dom.append(dom.root(), ElementSpec::new("nav").class("navbar"));
        let logo = dom.append(navbar, ElementSpec::new("div").class("nav-logo"));
        let brand = dom.append(logo, ElementSpec::new("h2").bilingual(BRAND_ZH, BRAND_EN));
        let menu = dom.append(navbar, ElementSpec::new("ul").class("nav-menu"));
        for (zh, en) in [("關於", "About"), ("經歷", "Experience"), ("聯絡", "Contact")] {
            let item = dom.append(menu, ElementSpec::new("li"));
            dom.append(item, ElementSpec::new("a").class("nav-link").bilingual(zh, en));
        }
        let toggle = dom.append(
            navbar,
            ElementSpec::new("button").id("langToggle").class("lang-btn").text("EN"),
        );

        for section in table.sections() {
            render_section(&dom, section, keyed, keyed);
        }

        let half_annotated = dom.append(
            dom.root(),
            ElementSpec::new("p").attr("data-zh", "只有中文").text("靜態文字"),
        );

        let page_nav = dom.append(dom.root(), ElementSpec::new("div").id("pageNav"));
        let nav_menu = dom.append(page_nav, ElementSpec::new("div").class("page-nav-menu"));
        let nav_item = dom.append(
            nav_menu,
            ElementSpec::new("a")
                .class("page-nav-item")
                .attr("href", "#skills")
                .attr("data-zh", "技能")
                .attr("data-en", "Skills"),
        );
        dom.append(nav_item, ElementSpec::new("i").class("fas"));
        let nav_label = dom.append(nav_item, ElementSpec::new("span").text("技能"));

        let footer_block = dom.append(dom.root(), ElementSpec::new("footer").class("footer"));
        let footer = dom.append(footer_block, ElementSpec::new("p").text(table.footer().zh));

        Page {
            dom,
            toggle,
            brand,
            half_annotated,
            nav_label,
            footer,
        }
    }

    #[test]
    fn single_greeting_scenario() {
        let dom = MemoryDom::new();
        let span = dom.append(dom.root(), ElementSpec::new("span").bilingual("你好", "Hello"));
        let sync = LanguageSynchronizer::default();

        sync.update_language_content(&dom, Lang::En);
        assert_eq!(dom.text(&span), "Hello");
        sync.update_language_content(&dom, Lang::Zh);
        assert_eq!(dom.text(&span), "你好");
    }

    #[test]
    fn update_is_idempotent() {
        for keyed in [false, true] {
            let page = portfolio_page(keyed);
            let sync = LanguageSynchronizer::default();

            sync.update_language_content(&page.dom, Lang::En);
            let once = page.dom.snapshot();
            sync.update_language_content(&page.dom, Lang::En);
            assert_eq!(page.dom.snapshot(), once, "keyed = {keyed}");
        }
    }

    #[test]
    fn round_trip_restores_every_node() {
        for keyed in [false, true] {
            let page = portfolio_page(keyed);
            let original = page.dom.snapshot();
            let sync = LanguageSynchronizer::default();

            let report = sync.update_language_content(&page.dom, Lang::Zh);
            assert!(report.skipped_sections.is_empty(), "keyed = {keyed}: {report:?}");
            assert_eq!(page.dom.snapshot(), original, "keyed = {keyed}");

            sync.update_language_content(&page.dom, Lang::En);
            assert_ne!(page.dom.snapshot(), original);
            assert_eq!(page.dom.text(&page.footer), "© 2025 Yun-Sheng Lo. All rights reserved.");
            assert_eq!(page.dom.text(&page.nav_label), "Skills");

            sync.update_language_content(&page.dom, Lang::Zh);
            assert_eq!(page.dom.snapshot(), original, "keyed = {keyed}");
        }
    }

    #[test]
    fn every_override_entry_is_written_in_english() {
        for keyed in [false, true] {
            let page = portfolio_page(keyed);
            let sync = LanguageSynchronizer::default();
            let report = sync.update_language_content(&page.dom, Lang::En);

            let expected: usize = portfolio_table()
                .sections()
                .iter()
                .map(|section| section.entries.len())
                .sum();
            assert_eq!(report.override_writes, expected, "keyed = {keyed}");

            let titles: Vec<String> = page
                .dom
                .query_all(".skill-category h3")
                .iter()
                .map(|node| page.dom.text(node))
                .collect();
            let mut expected_titles =
                vec!["Programming Languages", "Technical Frameworks & Tools", "Soft Skills"];
            if keyed {
                expected_titles.reverse();
            }
            assert_eq!(titles, expected_titles);
        }
    }

    #[test]
    fn half_annotated_node_is_never_touched() {
        let page = portfolio_page(false);
        let mut sync = LanguageSynchronizer::default();
        for _ in 0..3 {
            sync.toggle_language(&page.dom);
            assert_eq!(page.dom.text(&page.half_annotated), "靜態文字");
        }
    }

    #[test]
    fn short_highlight_section_is_skipped() {
        let dom = MemoryDom::new();
        for title in ["甲", "乙"] {
            let card = dom.append(dom.root(), ElementSpec::new("div").class("highlight"));
            dom.append(card, ElementSpec::new("h4").text(title));
            dom.append(card, ElementSpec::new("p").text(title));
        }
        let before = dom.snapshot();
        let sync = LanguageSynchronizer::default();

        let report = sync.update_language_content(&dom, Lang::En);
        assert!(report.skipped_sections.contains(&section_ids::HIGHLIGHTS));
        assert_eq!(report.total_writes(), 0);
        assert_eq!(dom.snapshot(), before);
    }

    #[test]
    fn toggle_flow_labels_control_and_reasserts_brand() {
        let page = portfolio_page(true);
        let mut sync = LanguageSynchronizer::default();
        assert_eq!(sync.current(), Lang::Zh);

        assert_eq!(sync.toggle_language(&page.dom), Lang::En);
        assert_eq!(page.dom.text(&page.toggle), Lang::Zh.switch_label());
        assert_eq!(page.dom.text(&page.brand), BRAND_EN);

        page.dom.set_text(&page.brand, "something else");
        assert!(sync.notify_content_ready(&page.dom));
        assert_eq!(page.dom.text(&page.brand), BRAND_EN);

        assert_eq!(sync.toggle_language(&page.dom), Lang::Zh);
        assert_eq!(page.dom.text(&page.toggle), Lang::En.switch_label());
        assert_eq!(page.dom.text(&page.brand), BRAND_ZH);
        assert!(sync.notify_content_ready(&page.dom));
        assert!(!sync.notify_content_ready(&page.dom));
    }
}
