use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use crate::config::{Config, resolve_config_path};
use crate::logging;
use crate::presentation::RenderOptions;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref());
    // `config init` must work even when the existing file does not parse
    let config = match (&cli.command, &config_path) {
        (
            Commands::Config {
                command: ConfigCommand::Init { .. },
            },
            _,
        )
        | (_, None) => Config::default(),
        (_, Some(path)) => Config::load_from(path)?,
    };
    tracing::debug!(path = ?config_path, "loaded config");

    let options = RenderOptions::from_config(&config.display, cli.color);
    let ctx = HandlerContext::new(cli.format, options);

    match cli.command {
        Commands::Render { input } => handlers::render::handle(&ctx, input.as_deref()),

        Commands::Stream { input, final_only } => {
            handlers::stream::handle(&ctx, input.as_deref(), final_only)
        }

        Commands::Inspect { input } => handlers::inspect::handle(&ctx, input.as_deref()),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx, config_path.as_deref(), &config),
            ConfigCommand::Init { force } => handlers::config::init(config_path.as_deref(), force),
        },
    }
}
