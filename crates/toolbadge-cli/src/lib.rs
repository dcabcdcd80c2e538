mod args;
mod commands;
pub mod config;
mod handlers;
mod input;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
