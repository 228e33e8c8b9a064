//! Static UI strings that are not part of the bilingual page content
//! (aria labels, tooltips).

pub mod zh_cn;

pub use zh_cn as current;
