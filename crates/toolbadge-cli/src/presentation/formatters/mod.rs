pub mod badge;

pub use badge::{RenderOptions, format_badge, format_summary};
