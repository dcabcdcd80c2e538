pub mod formatters;
pub mod spinner;
pub mod view_models;

pub use formatters::{RenderOptions, format_badge, format_summary};
pub use spinner::Spinner;
