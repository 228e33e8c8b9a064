//! Scroll-position rules behind the navbar, back-to-top button, anchor
//! links and page navigation.

/// Whether the navbar switches to its compact "scrolled" look.
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Whether the back-to-top button is shown.
pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Scroll target for an in-page anchor, leaving room for the fixed navbar.
pub fn anchor_scroll_top(offset_top: f64, navbar_offset: f64) -> f64 {
    offset_top - navbar_offset
}

/// Vertical extent of a page section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox<'a> {
    /// Section `id` attribute.
    pub id: &'a str,
    /// Offset from the top of the document.
    pub top: f64,
    /// Rendered height.
    pub height: f64,
}

/// The section containing `scroll_y + offset`.
///
/// When sections overlap the last one in document order wins. `None`
/// means no section contains the probe and the current highlight should
/// stay as it is.
pub fn active_section<'a>(sections: &[SectionBox<'a>], scroll_y: f64, offset: f64) -> Option<&'a str> {
    let probe = scroll_y + offset;
    sections
        .iter()
        .rev()
        .find(|section| probe >= section.top && probe < section.top + section.height)
        .map(|section| section.id)
}

/// Whether a navigation item's `href` points at section `id`.
pub fn nav_item_targets(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        assert!(!navbar_scrolled(100.0, 100.0));
        assert!(navbar_scrolled(100.5, 100.0));
        assert!(!back_to_top_visible(300.0, 300.0));
        assert!(back_to_top_visible(301.0, 300.0));
    }

    #[test]
    fn scroll_flags_change_only_at_their_threshold() {
        let positions = (0..=60).map(|step| f64::from(step) * 10.0);
        let navbar_flips = positions
            .clone()
            .map(|y| navbar_scrolled(y, 100.0))
            .collect::<Vec<_>>()
            .windows(2)
            .filter(|pair| pair[0] != pair[1])
            .count();
        let button_flips = positions
            .map(|y| back_to_top_visible(y, 300.0))
            .collect::<Vec<_>>()
            .windows(2)
            .filter(|pair| pair[0] != pair[1])
            .count();
        assert_eq!(navbar_flips, 1);
        assert_eq!(button_flips, 1);
    }

    #[test]
    fn anchor_target_leaves_navbar_room() {
        assert_eq!(anchor_scroll_top(870.0, 70.0), 800.0);
        assert_eq!(anchor_scroll_top(0.0, 70.0), -70.0);
    }

    #[test]
    fn active_section_uses_half_open_ranges() {
        let sections = [
            SectionBox {
                id: "home",
                top: 0.0,
                height: 600.0,
            },
            SectionBox {
                id: "about",
                top: 600.0,
                height: 400.0,
            },
        ];
        assert_eq!(active_section(&sections, 0.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 500.0, 100.0), Some("about"));
        assert_eq!(active_section(&sections, 899.0, 100.0), Some("about"));
        assert_eq!(active_section(&sections, 900.0, 100.0), None);
        assert_eq!(active_section(&[], 10.0, 100.0), None);
    }

    #[test]
    fn nav_items_match_by_fragment() {
        assert!(nav_item_targets("#about", "about"));
        assert!(!nav_item_targets("about", "about"));
        assert!(!nav_item_targets("#about-me", "about"));
    }
}
