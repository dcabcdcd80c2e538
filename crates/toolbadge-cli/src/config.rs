use crate::types::ColorChoice;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "TOOLBADGE_CONFIG";

pub const DEFAULT_SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
pub const DEFAULT_COMPLETE_GLYPH: &str = "●";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TOOLBADGE_CONFIG environment variable (with tilde expansion)
/// 3. `<config dir>/toolbadge/config.toml`
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("toolbadge").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: ColorChoice,
    pub spinner_frames: Vec<String>,
    pub complete_glyph: String,
    pub show_kind: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            spinner_frames: DEFAULT_SPINNER_FRAMES.iter().map(|s| s.to_string()).collect(),
            complete_glyph: DEFAULT_COMPLETE_GLYPH.to_string(),
            show_kind: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;

        if config.display.spinner_frames.is_empty() {
            config.display.spinner_frames = DisplayConfig::default().spinner_frames;
        }
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        Ok(())
    }
}
