use crate::config::Config;
use crate::handlers::HandlerContext;
use anyhow::{Result, bail};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ConfigView<'a> {
    path: Option<String>,
    exists: bool,
    config: &'a Config,
}

pub fn show(ctx: &HandlerContext, path: Option<&Path>, config: &Config) -> Result<()> {
    let exists = path.is_some_and(Path::exists);

    if ctx.is_json() {
        return ctx.print_json(&ConfigView {
            path: path.map(|p| p.display().to_string()),
            exists,
            config,
        });
    }

    match path {
        Some(p) if exists => println!("# {}", p.display()),
        Some(p) => println!("# {} (not found, using defaults)", p.display()),
        None => println!("# no config path available, using defaults"),
    }
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

pub fn init(path: Option<&Path>, force: bool) -> Result<()> {
    let Some(path) = path else {
        bail!("could not determine a config path; pass --config or set TOOLBADGE_CONFIG");
    };

    if path.exists() && !force {
        bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    tracing::info!(path = %path.display(), "wrote default config");
    println!("Wrote {}", path.display());
    Ok(())
}
