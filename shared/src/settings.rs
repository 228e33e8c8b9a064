//! Runtime tunables for the page behaviors.
//!
//! Every field has a default, so a page without a settings island (or one
//! that sets only a few keys) still gets the standard behavior.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Timings, thresholds and logging level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `tracing` filter directive, e.g. `info` or `portfolio_shared=debug`.
    pub log_level: String,
    /// Space left above an anchor target for the fixed navbar, in px.
    pub navbar_offset: f64,
    /// Scroll depth after which the navbar turns compact, in px.
    pub navbar_scrolled_threshold: f64,
    /// Scroll depth after which the back-to-top button shows, in px.
    pub back_to_top_threshold: f64,
    /// Probe offset below the viewport top for page-nav highlighting, in px.
    pub page_nav_offset: f64,
    /// Hero translation per scrolled pixel.
    pub parallax_rate: f64,
    /// Visible fraction that triggers a reveal animation.
    pub reveal_threshold: f64,
    /// Intersection root margin for reveal animations.
    pub reveal_root_margin: String,
    /// Delay before a revealed skill bar fills, in ms.
    pub skill_bar_delay_ms: u32,
    /// Simulated contact form round trip, in ms.
    pub submit_delay_ms: u32,
    /// Delay before a toast slides in, in ms.
    pub toast_enter_delay_ms: u32,
    /// How long a toast stays, in ms.
    pub toast_visible_ms: u32,
    /// Slide-out duration before a toast is removed, in ms.
    pub toast_exit_ms: u32,
    /// Delay before the hero name starts typing, in ms.
    pub typing_start_delay_ms: u32,
    /// Delay between typed characters, in ms.
    pub typing_interval_ms: u32,
    /// Time the loader stays after the window load event, in ms.
    pub loader_hold_ms: u32,
    /// Loader fade-out duration, in ms.
    pub loader_fade_ms: u32,
    /// Fallback content-ready signal after a language toggle, in ms.
    /// `None` relies solely on collaborators signalling.
    pub brand_reassert_delay_ms: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            navbar_offset: 70.0,
            navbar_scrolled_threshold: 100.0,
            back_to_top_threshold: 300.0,
            page_nav_offset: 100.0,
            parallax_rate: -0.5,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            skill_bar_delay_ms: 200,
            submit_delay_ms: 1500,
            toast_enter_delay_ms: 100,
            toast_visible_ms: 5000,
            toast_exit_ms: 300,
            typing_start_delay_ms: 1000,
            typing_interval_ms: 100,
            loader_hold_ms: 1000,
            loader_fade_ms: 500,
            brand_reassert_delay_ms: Some(100),
        }
    }
}

impl Settings {
    /// Parse settings JSON. Missing keys take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(raw).context("failed to parse site settings")?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            anyhow::bail!("reveal_threshold must be within 0..=1, got {}", self.reveal_threshold);
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("log_level cannot be empty");
        }
        Ok(())
    }
}
