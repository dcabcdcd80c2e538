use crate::handlers::HandlerContext;
use crate::input;
use crate::presentation::format_badge;
use anyhow::{Context, Result};
use std::path::Path;
use toolbadge_format::Badge;
use toolbadge_types::parse_records;

pub fn handle(ctx: &HandlerContext, input: Option<&Path>) -> Result<()> {
    let content = input::read_to_string(input)?;
    let records = parse_records(&content).context("failed to decode invocation records")?;
    tracing::info!(records = records.len(), "rendering badges");

    let badges: Vec<Badge> = records.iter().map(Badge::from_invocation).collect();

    if ctx.is_json() {
        return ctx.print_json(&badges);
    }

    for badge in &badges {
        println!("{}", format_badge(badge, &ctx.options, 0));
    }
    Ok(())
}
