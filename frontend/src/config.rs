/// Configuration for the frontend application
use portfolio_shared::Settings;

/// Base URL for static assets
pub const BASE_URL: &str = "/";

/// `<script type="application/json">` island carrying [`Settings`] overrides.
pub const SETTINGS_ISLAND_ID: &str = "site-settings";

/// Language switch button, relabelled by the synchronizer.
pub const LANG_TOGGLE_ID: &str = "langToggle";
/// Floating back-to-top button.
pub const BACK_TO_TOP_ID: &str = "backToTop";
/// Floating in-page navigation.
pub const PAGE_NAV_ID: &str = "pageNav";
/// Contact form.
pub const CONTACT_FORM_ID: &str = "contactForm";

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}

/// Read the settings island. `Ok(None)` when the page carries none.
pub fn load_settings() -> anyhow::Result<Option<Settings>> {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(SETTINGS_ISLAND_ID))
        .and_then(|island| island.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => Settings::from_json(&raw).map(Some),
        _ => Ok(None),
    }
}
