//! Bilingual content synchronizer.
//!
//! Every pass re-derives all text from the static sources (language
//! attributes and the [`OverrideTable`]), so applying a language is
//! idempotent and switching back and forth restores the original text
//! exactly. Missing nodes are never errors; the step that needed them just
//! writes nothing.

use crate::{
    dom::ContentDom,
    lang::Lang,
    overrides::{portfolio_table, OverrideEntry, OverrideSection, OverrideTable, SLOT_ATTRIBUTE},
};

/// Elements translated by the generic attribute pass.
pub const TRANSLATABLE_SELECTOR: &str = "[data-zh][data-en]";
/// The language toggle control.
pub const TOGGLE_SELECTOR: &str = "#langToggle";
/// The site brand text in the navbar.
pub const BRAND_SELECTOR: &str = ".nav-logo h2";
/// Page-navigation items; their inner `span` holds the label.
pub const PAGE_NAV_ITEM_SELECTOR: &str = ".page-nav-item";
/// The footer copyright paragraph.
pub const FOOTER_SELECTOR: &str = ".footer p";

/// What one update pass wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Nodes written by the generic attribute pass.
    pub generic_writes: usize,
    /// Nodes written from the override table.
    pub override_writes: usize,
    /// Override sections whose blocks were not on the page.
    pub skipped_sections: Vec<&'static str>,
    /// Page-navigation labels written.
    pub page_nav_writes: usize,
    /// Whether the footer paragraph was written.
    pub footer_updated: bool,
    /// Whether the brand text was written.
    pub brand_updated: bool,
}

impl SyncReport {
    /// Total number of text writes.
    pub fn total_writes(&self) -> usize {
        self.generic_writes
            + self.override_writes
            + self.page_nav_writes
            + usize::from(self.footer_updated)
            + usize::from(self.brand_updated)
    }
}

/// Owns the current language and rewrites page text to match it.
#[derive(Debug, Clone)]
pub struct LanguageSynchronizer {
    current: Lang,
    table: OverrideTable,
    brand_reassert_pending: bool,
}

impl Default for LanguageSynchronizer {
    fn default() -> Self {
        Self::new(portfolio_table())
    }
}

/// The node's text for `lang`, only when it carries both language
/// attributes. An empty attribute is still text to apply.
fn bilingual_text<D: ContentDom>(dom: &D, node: &D::Node, lang: Lang) -> Option<String> {
    let annotated = Lang::ALL
        .iter()
        .all(|variant| dom.has_attribute(node, variant.attribute()));
    if !annotated {
        return None;
    }
    dom.attribute(node, lang.attribute())
}

fn write_entry<D: ContentDom>(dom: &D, block: &D::Node, entry: &OverrideEntry, lang: Lang) -> bool {
    let node = match entry.target {
        None => Some(block.clone()),
        Some(target) => dom
            .query_within(block, target.selector)
            .into_iter()
            .nth(target.nth),
    };
    match node {
        Some(node) => {
            dom.set_text(&node, entry.text.get(lang));
            true
        },
        None => false,
    }
}

fn apply_section<D: ContentDom>(
    dom: &D,
    section: &OverrideSection,
    lang: Lang,
    report: &mut SyncReport,
) {
    let blocks = dom.query_all(section.container);
    let keyed = blocks
        .iter()
        .any(|block| dom.has_attribute(block, SLOT_ATTRIBUTE));

    let mut writes = 0;
    if keyed {
        for entry in &section.entries {
            let block = blocks.iter().find(|block| {
                dom.attribute(block, SLOT_ATTRIBUTE).as_deref() == Some(entry.slot.key)
            });
            if let Some(block) = block {
                writes += usize::from(write_entry(dom, block, entry, lang));
            }
        }
    } else if blocks.len() >= section.required_blocks() {
        for entry in &section.entries {
            writes += usize::from(write_entry(dom, &blocks[entry.slot.index], entry, lang));
        }
    } else {
        tracing::debug!(
            section = section.id,
            found = blocks.len(),
            required = section.required_blocks(),
            "override section not on this page"
        );
        report.skipped_sections.push(section.id);
        return;
    }
    report.override_writes += writes;
}

fn write_brand<D: ContentDom>(dom: &D, lang: Lang) -> Option<String> {
    let brand = dom.query_first(BRAND_SELECTOR)?;
    let text = bilingual_text(dom, &brand, lang)?;
    dom.set_text(&brand, &text);
    Some(text)
}

impl LanguageSynchronizer {
    /// A synchronizer showing Chinese, using `table` for override content.
    pub fn new(table: OverrideTable) -> Self {
        Self {
            current: Lang::Zh,
            table,
            brand_reassert_pending: false,
        }
    }

    /// The language currently on screen.
    pub fn current(&self) -> Lang {
        self.current
    }

    /// Whether a toggle is still waiting for a content-ready signal.
    pub fn reassert_pending(&self) -> bool {
        self.brand_reassert_pending
    }

    /// Switch to the other language and rewrite the page.
    ///
    /// The toggle control is relabelled with the language a further click
    /// would switch to, and a brand re-assertion is left pending until
    /// [`Self::notify_content_ready`] is called.
    pub fn toggle_language<D: ContentDom>(&mut self, dom: &D) -> Lang {
        self.current = self.current.toggled();
        let report = self.update_language_content(dom, self.current);

        if let Some(toggle) = dom.query_first(TOGGLE_SELECTOR) {
            dom.set_text(&toggle, self.current.toggled().switch_label());
        }
        self.brand_reassert_pending = true;

        tracing::debug!(
            lang = %self.current,
            writes = report.total_writes(),
            skipped = ?report.skipped_sections,
            "language toggled"
        );
        self.current
    }

    /// Rewrite every translatable node for `target`.
    pub fn update_language_content<D: ContentDom>(&self, dom: &D, target: Lang) -> SyncReport {
        let mut report = SyncReport::default();

        // Page-nav items keep an icon next to their label, so only their
        // span is rewritten below.
        let nav_items = dom.query_all(PAGE_NAV_ITEM_SELECTOR);
        for node in dom.query_all(TRANSLATABLE_SELECTOR) {
            if nav_items.contains(&node) {
                continue;
            }
            if let Some(text) = bilingual_text(dom, &node, target) {
                dom.set_text(&node, &text);
                report.generic_writes += 1;
            }
        }

        for section in self.table.sections() {
            apply_section(dom, section, target, &mut report);
        }

        for item in &nav_items {
            let Some(text) = bilingual_text(dom, item, target) else {
                continue;
            };
            if let Some(label) = dom.query_first_within(item, "span") {
                dom.set_text(&label, &text);
                report.page_nav_writes += 1;
            }
        }

        if let Some(footer) = dom.query_first(FOOTER_SELECTOR) {
            let annotated = Lang::ALL
                .iter()
                .all(|variant| dom.has_attribute(&footer, variant.attribute()));
            let text = if annotated {
                bilingual_text(dom, &footer, target)
            } else {
                Some(self.table.footer().get(target).to_string())
            };
            if let Some(text) = text {
                dom.set_text(&footer, &text);
                report.footer_updated = true;
            }
        }

        if let Some(text) = write_brand(dom, target) {
            tracing::info!("nav logo updated to: {text}");
            report.brand_updated = true;
        }

        report
    }

    /// Signal that late page mutations have finished.
    ///
    /// Performs the re-assertion left pending by the last toggle, using the
    /// current language, and returns `true`. Returns `false` when nothing
    /// was pending, so repeated signals are harmless.
    pub fn notify_content_ready<D: ContentDom>(&mut self, dom: &D) -> bool {
        if !self.brand_reassert_pending {
            return false;
        }
        self.brand_reassert_pending = false;

        let before = dom.query_first(BRAND_SELECTOR).map(|brand| dom.text(&brand));
        if let Some(text) = write_brand(dom, self.current) {
            if before.as_deref() == Some(text.as_str()) {
                tracing::info!("nav logo force updated to: {text}");
            } else {
                // 说明有其他代码在语言切换之后改写了 logo
                tracing::warn!(
                    expected = %text,
                    found = ?before,
                    "nav logo changed after the language pass, re-asserted"
                );
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        lang::Bilingual,
        memory::{ElementSpec, MemoryDom, NodeId},
        overrides::section_ids,
    };

    fn highlight(dom: &MemoryDom, title: &str, body: &str) {
        let card = dom.append(dom.root(), ElementSpec::new("div").class("highlight"));
        dom.append(card, ElementSpec::new("h4").text(title));
        dom.append(card, ElementSpec::new("p").text(body));
    }

    #[test]
    fn greeting_switches_and_restores() {
        let dom = MemoryDom::new();
        let span = dom.append(dom.root(), ElementSpec::new("span").bilingual("你好", "Hello"));
        let sync = LanguageSynchronizer::default();

        sync.update_language_content(&dom, Lang::En);
        assert_eq!(dom.text(&span), "Hello");
        sync.update_language_content(&dom, Lang::Zh);
        assert_eq!(dom.text(&span), "你好");
    }

    #[test]
    fn half_annotated_node_is_left_alone_but_empty_variant_applies() {
        let dom = MemoryDom::new();
        let only_zh = dom.append(
            dom.root(),
            ElementSpec::new("p").attr("data-zh", "只有中文").text("原始文字"),
        );
        let empty_en = dom.append(
            dom.root(),
            ElementSpec::new("p").attr("data-zh", "中文").attr("data-en", "").text("中文"),
        );
        let sync = LanguageSynchronizer::default();

        for lang in [Lang::En, Lang::Zh, Lang::En] {
            sync.update_language_content(&dom, lang);
            assert_eq!(dom.text(&only_zh), "原始文字");
        }
        assert_eq!(dom.text(&empty_en), "");
        sync.update_language_content(&dom, Lang::Zh);
        assert_eq!(dom.text(&empty_en), "中文");
    }

    #[test]
    fn undersized_legacy_section_writes_nothing() {
        let dom = MemoryDom::new();
        highlight(&dom, "原始一", "内容一");
        highlight(&dom, "原始二", "内容二");
        let sync = LanguageSynchronizer::default();

        let report = sync.update_language_content(&dom, Lang::En);
        assert!(report.skipped_sections.contains(&section_ids::HIGHLIGHTS));
        assert_eq!(report.override_writes, 0);
        assert_eq!(dom.snapshot(), vec!["原始一内容一", "原始一", "内容一", "原始二内容二", "原始二", "内容二"]);
    }

    #[test]
    fn legacy_section_resolves_by_position() {
        let dom = MemoryDom::new();
        for _ in 0..3 {
            highlight(&dom, "", "");
        }
        let sync = LanguageSynchronizer::default();

        let report = sync.update_language_content(&dom, Lang::En);
        assert_eq!(report.override_writes, 6);
        let titles: Vec<String> = dom
            .query_all(".highlight h4")
            .iter()
            .map(|node| dom.text(node))
            .collect();
        assert_eq!(titles, vec!["Machine Learning", "Snowboard Instructor", "Continuous Learning"]);
    }

    #[test]
    fn missing_target_skips_only_its_own_entry() {
        let dom = MemoryDom::new();
        highlight(&dom, "", "");
        let bare = dom.append(dom.root(), ElementSpec::new("div").class("highlight"));
        dom.append(bare, ElementSpec::new("h4"));
        highlight(&dom, "", "");
        let sync = LanguageSynchronizer::default();

        let report = sync.update_language_content(&dom, Lang::En);
        assert!(report.skipped_sections.is_empty());
        assert_eq!(report.override_writes, 5);
        let titles: Vec<String> = dom
            .query_all(".highlight h4")
            .iter()
            .map(|node| dom.text(node))
            .collect();
        assert_eq!(titles, vec!["Machine Learning", "Snowboard Instructor", "Continuous Learning"]);
        let bodies: Vec<String> = dom
            .query_all(".highlight p")
            .iter()
            .map(|node| dom.text(node))
            .collect();
        assert_eq!(
            bodies,
            vec![
                "Specialized in image recognition and deep learning, passionate about solving complex technical problems",
                "Maintain enthusiasm for new technologies and continuously improve professional skills",
            ]
        );
    }

    #[test]
    fn keyed_blocks_follow_their_key_not_their_position() {
        let dom = MemoryDom::new();
        let mut cards = Vec::new();
        for key in ["learning", "machine-learning"] {
            let card = dom.append(
                dom.root(),
                ElementSpec::new("div").class("highlight").attr(SLOT_ATTRIBUTE, key),
            );
            dom.append(card, ElementSpec::new("h4"));
            cards.push(card);
        }
        let sync = LanguageSynchronizer::default();

        let report = sync.update_language_content(&dom, Lang::En);
        assert!(!report.skipped_sections.contains(&section_ids::HIGHLIGHTS));
        assert_eq!(report.override_writes, 2);
        let title = |card: NodeId| dom.text(&dom.query_first_within(&card, "h4").expect("title"));
        assert_eq!(title(cards[0]), "Continuous Learning");
        assert_eq!(title(cards[1]), "Machine Learning");
    }

    #[test]
    fn page_nav_rewrites_label_and_keeps_icon() {
        let dom = MemoryDom::new();
        let item = dom.append(
            dom.root(),
            ElementSpec::new("a")
                .class("page-nav-item")
                .attr("href", "#about")
                .attr("data-zh", "關於")
                .attr("data-en", "About"),
        );
        let icon = dom.append(item, ElementSpec::new("i").class("fas"));
        let label = dom.append(item, ElementSpec::new("span").text("關於"));
        let sync = LanguageSynchronizer::default();

        let report = sync.update_language_content(&dom, Lang::En);
        assert_eq!(report.page_nav_writes, 1);
        assert_eq!(report.generic_writes, 0);
        assert_eq!(dom.text(&label), "About");
        assert_eq!(dom.query_first_within(&item, "i"), Some(icon));
    }

    #[test]
    fn footer_prefers_attributes_then_table() {
        let dom = MemoryDom::new();
        let footer = dom.append(dom.root(), ElementSpec::new("footer").class("footer"));
        let line = dom.append(footer, ElementSpec::new("p").text("© 2025"));
        let sync = LanguageSynchronizer::new(OverrideTable::empty(Bilingual::new("版权", "Copyright")));

        sync.update_language_content(&dom, Lang::En);
        assert_eq!(dom.text(&line), "Copyright");

        dom.set_attribute(line, "data-zh", "属性版权");
        dom.set_attribute(line, "data-en", "Attribute copyright");
        let report = sync.update_language_content(&dom, Lang::En);
        assert!(report.footer_updated);
        assert_eq!(dom.text(&line), "Attribute copyright");
    }

    #[test]
    fn toggle_relabels_control_with_other_language() {
        let dom = MemoryDom::new();
        let toggle = dom.append(dom.root(), ElementSpec::new("button").id("langToggle").text("EN"));
        let mut sync = LanguageSynchronizer::default();

        assert_eq!(sync.toggle_language(&dom), Lang::En);
        assert_eq!(dom.text(&toggle), "中");
        assert_eq!(sync.toggle_language(&dom), Lang::Zh);
        assert_eq!(dom.text(&toggle), "EN");
    }

    #[test]
    fn content_ready_reasserts_brand_once() {
        let dom = MemoryDom::new();
        let logo = dom.append(dom.root(), ElementSpec::new("div").class("nav-logo"));
        let brand = dom.append(logo, ElementSpec::new("h2").bilingual("羅筠笙", "Yun-Sheng Lo"));
        let mut sync = LanguageSynchronizer::default();

        assert!(!sync.notify_content_ready(&dom));
        sync.toggle_language(&dom);
        assert!(sync.reassert_pending());

        // 模拟其他脚本在语言切换后改写 logo
        dom.set_text(&brand, "overwritten");
        assert!(sync.notify_content_ready(&dom));
        assert_eq!(dom.text(&brand), "Yun-Sheng Lo");
        assert!(!sync.notify_content_ready(&dom));
    }

    #[test]
    fn overlapping_toggles_end_on_latest_language() {
        let dom = MemoryDom::new();
        let logo = dom.append(dom.root(), ElementSpec::new("div").class("nav-logo"));
        let brand = dom.append(logo, ElementSpec::new("h2").bilingual("羅筠笙", "Yun-Sheng Lo"));
        let mut sync = LanguageSynchronizer::default();

        sync.toggle_language(&dom);
        sync.toggle_language(&dom);
        assert!(sync.notify_content_ready(&dom));
        assert!(!sync.notify_content_ready(&dom));
        assert_eq!(dom.text(&brand), "羅筠笙");
    }
}
