use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use toolbadge_format::Badge;
use toolbadge_types::ToolKind;

use crate::config::DisplayConfig;
use crate::presentation::spinner::Spinner;
use crate::types::ColorChoice;

/// Terminal rendering options
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub enable_color: bool,
    pub show_kind: bool,
    pub spinner: Spinner,
    pub complete_glyph: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default(), Some(ColorChoice::Never))
    }
}

impl RenderOptions {
    pub fn from_config(display: &DisplayConfig, color_override: Option<ColorChoice>) -> Self {
        let enable_color = match color_override.unwrap_or(display.color) {
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Self {
            enable_color,
            show_kind: display.show_kind,
            spinner: Spinner::new(display.spinner_frames.clone()),
            complete_glyph: display.complete_glyph.clone(),
        }
    }
}

/// Paint one badge: a spinner frame while pending, a dot once complete
pub fn format_badge(badge: &Badge, options: &RenderOptions, tick: usize) -> String {
    let glyph = if badge.is_complete {
        paint(&options.complete_glyph, options.enable_color, |s: &str| {
            s.green().to_string()
        })
    } else {
        paint(options.spinner.frame(tick), options.enable_color, |s: &str| {
            s.blue().to_string()
        })
    };

    let mut line = if badge.display_text.is_empty() {
        glyph
    } else {
        format!("{} {}", glyph, badge.display_text)
    };

    if options.show_kind {
        line.push(' ');
        line.push_str(&format_kind(badge.kind, options.enable_color));
    }
    line
}

/// `N complete, M pending`
pub fn format_summary(complete: usize, pending: usize, enable_color: bool) -> String {
    let complete = paint(&format!("{} complete", complete), enable_color, |s: &str| {
        s.green().to_string()
    });
    let pending = paint(&format!("{} pending", pending), enable_color, |s: &str| {
        s.blue().to_string()
    });
    format!("{}, {}", complete, pending)
}

fn format_kind(kind: ToolKind, enable_color: bool) -> String {
    let label = format!("[{}]", kind);
    if !enable_color {
        return label;
    }
    match kind {
        ToolKind::Read => label.cyan().to_string(),
        ToolKind::Write => label.yellow().to_string(),
        ToolKind::Move => label.magenta().to_string(),
        ToolKind::Delete => label.red().to_string(),
        ToolKind::Other => label.bright_black().to_string(),
    }
}

fn paint(text: &str, enable_color: bool, color: fn(&str) -> String) -> String {
    if enable_color {
        color(text)
    } else {
        text.to_string()
    }
}
