//! Cosmetic effect values: typing animation frames, parallax, skill bars and
//! card hover styles.

/// Successive prefixes of `text`, one more character each, ending with the
/// whole text. Splits on character boundaries so CJK names type correctly.
pub fn typing_frames(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.char_indices()
        .map(move |(start, ch)| &text[..start + ch.len_utf8()])
}

/// Parallax translation for the hero at `scroll_y`.
pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

/// CSS `transform` value for a vertical translation.
pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

/// CSS width for a skill bar's `data-width` percentage, clamped to
/// `0..=100`. Non-numeric values yield `None`.
pub fn skill_width(data_width: &str) -> Option<String> {
    let value: f64 = data_width.trim().trim_end_matches('%').parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(format!("{}%", value.clamp(0.0, 100.0)))
}

/// Inline style applied to a card on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverStyle {
    /// `transform` value.
    pub transform: &'static str,
    /// `box-shadow` value.
    pub box_shadow: &'static str,
}

impl HoverStyle {
    /// Pointer over the card.
    pub const LIFTED: HoverStyle = HoverStyle {
        transform: "translateY(-5px)",
        box_shadow: "0 10px 25px rgba(0, 0, 0, 0.1)",
    };

    /// Pointer gone.
    pub const REST: HoverStyle = HoverStyle {
        transform: "translateY(0)",
        box_shadow: "0 4px 6px rgba(0, 0, 0, 0.05)",
    };

    /// Style for the hovered / not-hovered state.
    pub fn for_hover(hovered: bool) -> HoverStyle {
        if hovered {
            Self::LIFTED
        } else {
            Self::REST
        }
    }
}

/// Cards that lift on hover.
pub const HOVER_CARD_SELECTOR: &str = ".highlight, .timeline-content, .skill-items, .contact-form";

/// Elements revealed when they scroll into view.
pub const REVEAL_SELECTOR: &str = ".fade-in, .slide-in-left, .slide-in-right, .skill-progress";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_frames_respect_char_boundaries() {
        let frames: Vec<&str> = typing_frames("羅筠笙").collect();
        assert_eq!(frames, vec!["羅", "羅筠", "羅筠笙"]);
        assert_eq!(typing_frames("").count(), 0);
    }

    #[test]
    fn parallax_moves_against_scroll() {
        assert_eq!(parallax_offset(200.0, -0.5), -100.0);
        assert_eq!(translate_y(-100.0), "translateY(-100px)");
        assert_eq!(translate_y(0.0), "translateY(0px)");
    }

    #[test]
    fn skill_width_parses_and_clamps() {
        assert_eq!(skill_width("85").as_deref(), Some("85%"));
        assert_eq!(skill_width(" 72.5% ").as_deref(), Some("72.5%"));
        assert_eq!(skill_width("140").as_deref(), Some("100%"));
        assert_eq!(skill_width("-3").as_deref(), Some("0%"));
        assert_eq!(skill_width("wide"), None);
        assert_eq!(skill_width(""), None);
        assert_eq!(skill_width("NaN"), None);
    }

    #[test]
    fn hover_style_switches() {
        assert_eq!(HoverStyle::for_hover(true), HoverStyle::LIFTED);
        assert_eq!(HoverStyle::for_hover(false).transform, "translateY(0)");
    }
}
