//! The two display languages and paired text in both.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 页面支持的两种显示语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Chinese, the language the page ships with.
    #[default]
    Zh,
    /// English.
    En,
}

impl Lang {
    /// Both languages in display order.
    pub const ALL: [Lang; 2] = [Lang::Zh, Lang::En];

    /// Short language code (`zh` / `en`).
    pub fn code(self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
        }
    }

    /// Name of the element attribute holding this language's text variant.
    pub fn attribute(self) -> &'static str {
        match self {
            Lang::Zh => "data-zh",
            Lang::En => "data-en",
        }
    }

    /// The other language.
    #[must_use]
    pub fn toggled(self) -> Lang {
        match self {
            Lang::Zh => Lang::En,
            Lang::En => Lang::Zh,
        }
    }

    /// Label of a control that switches *to* this language.
    pub fn switch_label(self) -> &'static str {
        match self {
            Lang::Zh => "中",
            Lang::En => "EN",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A fixed pair of Chinese and English text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    /// Chinese variant.
    pub zh: &'static str,
    /// English variant.
    pub en: &'static str,
}

impl Bilingual {
    /// Build a pair from its two variants.
    pub const fn new(zh: &'static str, en: &'static str) -> Self {
        Self {
            zh,
            en,
        }
    }

    /// The variant for `lang`.
    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Zh => self.zh,
            Lang::En => self.en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_languages() {
        assert_eq!(Lang::Zh.toggled(), Lang::En);
        assert_eq!(Lang::En.toggled(), Lang::Zh);
        assert_eq!(Lang::default(), Lang::Zh);
    }

    #[test]
    fn serde_uses_short_codes() {
        let encoded = serde_json::to_string(&Lang::En).expect("serialize lang");
        assert_eq!(encoded, "\"en\"");
        let decoded: Lang = serde_json::from_str("\"zh\"").expect("deserialize lang");
        assert_eq!(decoded, Lang::Zh);
    }

    #[test]
    fn bilingual_picks_variant() {
        let text = Bilingual::new("你好", "Hello");
        assert_eq!(text.get(Lang::Zh), "你好");
        assert_eq!(text.get(Lang::En), "Hello");
    }
}
