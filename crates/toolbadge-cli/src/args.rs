use crate::types::{ColorChoice, LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "toolbadge")]
#[command(about = "Render status badges for AI assistant tool calls", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $TOOLBADGE_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Overrides `display.color` from the config file
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one badge per invocation record (JSON array, object, or JSON Lines)
    Render {
        /// Input file; reads stdin when omitted or "-"
        input: Option<PathBuf>,
    },

    /// Follow JSON Lines updates and track each call by toolCallId
    Stream {
        /// Input file; reads stdin when omitted or "-"
        input: Option<PathBuf>,

        /// Print only the final state of every call
        #[arg(long)]
        final_only: bool,
    },

    /// Show the normalized payload behind each badge
    Inspect {
        /// Input file; reads stdin when omitted or "-"
        input: Option<PathBuf>,
    },

    /// Show or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
