//! Pure business logic, independent of storage and transport.

pub mod template_matcher;
pub mod view_resolver;

pub use template_matcher::merge_template_candidates;
pub use view_resolver::{resolve_view, PresentationView};
