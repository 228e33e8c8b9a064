//! Renderer-agnostic core of the portfolio site.
//!
//! The heart of the crate is [`sync::LanguageSynchronizer`], which keeps
//! every annotated node of the page in the active language. It talks to
//! the page only through the [`dom::ContentDom`] trait, implemented by the
//! browser adapter in the frontend and by [`memory::MemoryDom`] here.
//!
//! The remaining modules hold the pure rules behind the other page
//! behaviors (contact form validation, scroll thresholds, cosmetic effects)
//! and the runtime [`settings::Settings`].

pub mod contact;
pub mod dom;
pub mod effects;
pub mod lang;
pub mod memory;
pub mod overrides;
pub mod scroll;
pub mod selector;
pub mod settings;
pub mod sync;

pub use dom::ContentDom;
pub use lang::{Bilingual, Lang};
pub use settings::Settings;
pub use sync::{LanguageSynchronizer, SyncReport};
