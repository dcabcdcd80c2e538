use crate::handlers::HandlerContext;
use crate::input;
use crate::presentation::format_badge;
use crate::presentation::view_models::InspectEntry;
use anyhow::{Context, Result};
use std::path::Path;
use toolbadge_types::parse_records;

pub fn handle(ctx: &HandlerContext, input: Option<&Path>) -> Result<()> {
    let content = input::read_to_string(input)?;
    let records = parse_records(&content).context("failed to decode invocation records")?;
    let entries: Vec<InspectEntry> = records.iter().map(InspectEntry::from).collect();

    if ctx.is_json() {
        return ctx.print_json(&entries);
    }

    for (idx, entry) in entries.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        let id = if entry.tool_call_id.is_empty() {
            "(no id)"
        } else {
            entry.tool_call_id.as_str()
        };
        println!("{}  {}", id, entry.tool_name);
        println!("  payload: {}", serde_json::to_string(&entry.payload)?);
        println!(
            "  badge:   {} ({}, {})",
            format_badge(&entry.badge, &ctx.options, 0),
            entry.badge.status(),
            entry.badge.kind
        );
    }
    Ok(())
}
