//! Translation table for content blocks that carry no language attributes.
//!
//! Each section names a container selector for its repeated block (a card,
//! a timeline entry, a paragraph). Blocks are resolved by their
//! `data-i18n-slot` key when the markup provides one, and by position
//! otherwise.

use crate::lang::Bilingual;

/// Attribute carrying a block's stable slot key.
pub const SLOT_ATTRIBUTE: &str = "data-i18n-slot";

/// Where an entry's block sits: its stable key, and its position for
/// markup that predates slot keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Value of [`SLOT_ATTRIBUTE`] on the block.
    pub key: &'static str,
    /// Zero-based index among the section's blocks.
    pub index: usize,
}

/// Which node inside a block receives the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Selector evaluated inside the block.
    pub selector: &'static str,
    /// Which match to use, zero-based.
    pub nth: usize,
}

/// One text substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideEntry {
    /// Block holding the node.
    pub slot: Slot,
    /// Node inside the block; `None` writes the block itself.
    pub target: Option<Target>,
    /// Text for each language.
    pub text: Bilingual,
}

/// A group of entries sharing one container selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideSection {
    /// Stable section identifier, used in logs and reports.
    pub id: &'static str,
    /// Selector matching every block of the section.
    pub container: &'static str,
    /// Entries in table order.
    pub entries: Vec<OverrideEntry>,
}

impl OverrideSection {
    /// Number of blocks positional resolution needs before it writes
    /// anything.
    pub fn required_blocks(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.slot.index + 1)
            .max()
            .unwrap_or(0)
    }

    /// Entries belonging to the block with slot `key`.
    pub fn entries_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a OverrideEntry> + 'a {
        self.entries.iter().filter(move |entry| entry.slot.key == key)
    }

    /// Distinct slots in table order.
    pub fn slots(&self) -> Vec<Slot> {
        let mut slots: Vec<Slot> = Vec::new();
        for entry in &self.entries {
            if !slots.iter().any(|slot| slot.key == entry.slot.key) {
                slots.push(entry.slot);
            }
        }
        slots
    }
}

/// Ordered override sections plus the footer copyright fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideTable {
    sections: Vec<OverrideSection>,
    footer: Bilingual,
}

impl OverrideTable {
    /// Build a table from its parts.
    pub fn new(sections: Vec<OverrideSection>, footer: Bilingual) -> Self {
        Self {
            sections,
            footer,
        }
    }

    /// A table with no sections and the given footer text.
    pub fn empty(footer: Bilingual) -> Self {
        Self::new(Vec::new(), footer)
    }

    /// Sections in application order.
    pub fn sections(&self) -> &[OverrideSection] {
        &self.sections
    }

    /// Section with identifier `id`.
    pub fn section(&self, id: &str) -> Option<&OverrideSection> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Footer text used when the footer paragraph has no attribute pair.
    pub fn footer(&self) -> Bilingual {
        self.footer
    }
}

const fn slot(key: &'static str, index: usize) -> Slot {
    Slot {
        key,
        index,
    }
}

const fn whole(slot: Slot, zh: &'static str, en: &'static str) -> OverrideEntry {
    OverrideEntry {
        slot,
        target: None,
        text: Bilingual::new(zh, en),
    }
}

const fn inner(
    slot: Slot,
    selector: &'static str,
    nth: usize,
    zh: &'static str,
    en: &'static str,
) -> OverrideEntry {
    OverrideEntry {
        slot,
        target: Some(Target {
            selector,
            nth,
        }),
        text: Bilingual::new(zh, en),
    }
}

/// Section identifiers of [`portfolio_table`].
pub mod section_ids {
    /// Biography paragraphs.
    pub const ABOUT: &str = "about";
    /// Highlight cards.
    pub const HIGHLIGHTS: &str = "highlights";
    /// Experience timeline.
    pub const TIMELINE: &str = "timeline";
    /// Skill categories, titles and items.
    pub const SKILLS: &str = "skills";
}

/// The portfolio page's override table.
pub fn portfolio_table() -> OverrideTable {
    let bio_intro = slot("intro", 0);
    let bio_sports = slot("sports", 1);

    let ml = slot("machine-learning", 0);
    let instructor = slot("instructor", 1);
    let learning = slot("learning", 2);

    let snowboard = slot("snowboard", 0);
    let ntu = slot("ntu", 1);
    let ncku = slot("ncku", 2);

    let languages = slot("languages", 0);
    let tools = slot("tools", 1);
    let soft = slot("soft", 2);

    let sections = vec![
        OverrideSection {
            id: section_ids::ABOUT,
            container: ".about-text p",
            entries: vec![
                whole(
                    bio_intro,
                    "我是一名對程式設計充滿熱忱的學生，目前就讀於國立臺灣大學。我對程式設計有著深厚的興趣，特別是關於機器學習、影像辨識以及網頁設計。",
                    "I am a student passionate about programming, currently studying at National Taiwan University. I have a deep interest in programming, particularly in machine learning, image recognition, and web design.",
                ),
                whole(
                    bio_sports,
                    "除了學術以外，我對於運動也很有興趣，目前規劃冬季要到日本進行受訓，並考取滑雪教練的證照，目前主要是往單板滑雪方向精進，滑雪這項運動培養了我的溝通技巧和領導能力。我相信這樣的經驗讓我成為一個更全面的專業人士。",
                    "Beyond academics, I am also very interested in sports. I am currently planning to go to Japan for training this winter and obtain a ski instructor certification, focusing mainly on snowboarding. Skiing has developed my communication skills and leadership abilities. I believe this experience makes me a more well-rounded professional.",
                ),
            ],
        },
        OverrideSection {
            id: section_ids::HIGHLIGHTS,
            container: ".highlight",
            entries: vec![
                inner(ml, "h4", 0, "機器學習", "Machine Learning"),
                inner(
                    ml,
                    "p",
                    0,
                    "專精於影像辨識與深度學習，熱愛解決複雜的技術問題",
                    "Specialized in image recognition and deep learning, passionate about solving complex technical problems",
                ),
                inner(instructor, "h4", 0, "滑雪教練", "Snowboard Instructor"),
                inner(
                    instructor,
                    "p",
                    0,
                    "規劃前往日本受訓，準備考取滑雪教練證照",
                    "Planning to go to Japan for training to obtain snowboard instructor certification",
                ),
                inner(learning, "h4", 0, "持續學習", "Continuous Learning"),
                inner(
                    learning,
                    "p",
                    0,
                    "保持對新技術的熱忱，不斷提升專業技能",
                    "Maintain enthusiasm for new technologies and continuously improve professional skills",
                ),
            ],
        },
        OverrideSection {
            id: section_ids::TIMELINE,
            container: ".timeline-content",
            entries: vec![
                inner(snowboard, "h3", 0, "滑雪教練", "Snowboard Instructor"),
                inner(
                    snowboard,
                    ".timeline-description",
                    0,
                    "冬季期間擔任滑雪教練，教授初學者滑雪技巧。培養了良好的溝通能力、耐心和領導技巧，這些技能也應用在團隊合作和專案管理中。",
                    "Work as a snowboard instructor during winter, teaching skiing techniques to beginners. Developed excellent communication skills, patience and leadership skills, which are also applied in teamwork and project management.",
                ),
                inner(ntu, "h3", 0, "國立臺灣大學", "National Taiwan University"),
                inner(
                    ntu,
                    "h4",
                    0,
                    "工程科學及海洋工程學系暨研究所",
                    "Department and Graduate Institute of Engineering Science and Ocean Engineering",
                ),
                inner(
                    ntu,
                    ".timeline-description",
                    0,
                    "就讀國立臺灣大學工程科學及海洋工程學系暨研究所，目前碩士二年級，專精於程式設計、資料結構、演算法、系統設計等核心課程。積極參與專案開發，累積實務經驗。",
                    "Studying in the Department and Graduate Institute of Engineering Science and Ocean Engineering at National Taiwan University, currently in second year of master's program, specializing in programming, data structures, algorithms, system design and other core courses. Actively participating in project development and accumulating practical experience.",
                ),
                inner(ncku, "h3", 0, "國立成功大學", "National Cheng Kung University"),
                inner(
                    ncku,
                    "h4",
                    0,
                    "水利及海洋工程學系學系輔工程科學系",
                    "Department of Hydraulic and Ocean Engineering, Minor in Engineering Science",
                ),
                inner(
                    ncku,
                    ".timeline-description",
                    0,
                    "在大學期間內除了本系上的課程外，因為對於程式設計有著濃厚的興趣所以選擇工程科學系作為輔系。在輔系期間內修習了許多程式設計相關的課程，包含程式設計、資料結構、作業系統等資工領域相關課程，在現階段奠定了不錯的程式基礎。",
                    "During university, in addition to courses in my major, I chose Engineering Science as a minor due to my strong interest in programming. During the minor program, I studied many programming-related courses, including programming, data structures, operating systems and other computer science courses, establishing a solid programming foundation.",
                ),
            ],
        },
        OverrideSection {
            id: section_ids::SKILLS,
            container: ".skill-category",
            entries: vec![
                inner(languages, "h3", 0, "程式語言", "Programming Languages"),
                inner(languages, ".skill-item span", 0, "Python", "Python"),
                inner(languages, ".skill-item span", 1, "HTML/CSS", "HTML/CSS"),
                inner(languages, ".skill-item span", 2, "JavaScript", "JavaScript"),
                inner(tools, "h3", 0, "技術框架與工具", "Technical Frameworks & Tools"),
                inner(tools, ".skill-item span", 0, "TensorFlow", "TensorFlow"),
                inner(tools, ".skill-item span", 1, "Git", "Git"),
                inner(tools, ".skill-item span", 2, "Object Detection", "Object Detection"),
                inner(tools, ".skill-item span", 3, "SketchUp", "SketchUp"),
                inner(tools, ".skill-item span", 4, "AutoCAD", "AutoCAD"),
                inner(soft, "h3", 0, "軟技能", "Soft Skills"),
                inner(soft, ".skill-item span", 0, "團隊合作", "Teamwork"),
                inner(soft, ".skill-item span", 1, "溝通能力", "Communication"),
                inner(soft, ".skill-item span", 2, "問題解決", "Problem Solving"),
                inner(soft, ".skill-item span", 3, "教學指導", "Teaching & Mentoring"),
            ],
        },
    ];

    OverrideTable::new(
        sections,
        Bilingual::new("© 2025 羅筠笙. 保留所有權利.", "© 2025 Yun-Sheng Lo. All rights reserved."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_sections_keep_structural_minimums() {
        let table = portfolio_table();
        let required: Vec<(&str, usize)> = table
            .sections()
            .iter()
            .map(|section| (section.id, section.required_blocks()))
            .collect();
        assert_eq!(
            required,
            vec![
                (section_ids::ABOUT, 2),
                (section_ids::HIGHLIGHTS, 3),
                (section_ids::TIMELINE, 3),
                (section_ids::SKILLS, 3),
            ]
        );
    }

    #[test]
    fn slot_keys_are_unique_and_consistently_indexed() {
        let table = portfolio_table();
        for section in table.sections() {
            let slots = section.slots();
            for (position, slot) in slots.iter().enumerate() {
                assert_eq!(slot.index, position, "section {} slot {}", section.id, slot.key);
                assert!(section
                    .entries_for(slot.key)
                    .all(|entry| entry.slot.index == slot.index));
            }
        }
    }

    #[test]
    fn empty_table_reports_no_sections() {
        let table = OverrideTable::empty(Bilingual::new("页脚", "Footer"));
        assert!(table.sections().is_empty());
        assert!(table.section(section_ids::ABOUT).is_none());
        assert_eq!(table.footer().en, "Footer");
    }
}
