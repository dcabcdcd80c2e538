mod context;

pub mod config;
pub mod inspect;
pub mod render;
pub mod stream;

pub use context::HandlerContext;
