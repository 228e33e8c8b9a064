// Reusable components live here.

pub mod contact_form;
pub mod footer;
pub mod header;
pub mod loader;
pub mod page_nav;
pub mod scroll_to_top_button;
pub mod toast;
