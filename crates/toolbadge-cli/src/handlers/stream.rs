use crate::handlers::HandlerContext;
use crate::input;
use crate::presentation::view_models::BoardSummary;
use crate::presentation::{format_badge, format_summary};
use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::Path;
use toolbadge_format::{Badge, BadgeBoard, BoardUpdate};
use toolbadge_types::parse_record;

/// Follow a JSON Lines feed of invocation updates
///
/// Each line is the current version of one record. Updates that change a
/// record are echoed as they arrive unless `final_only` is set; the final
/// board is summarized at the end. Lines that are not UTF-8 or not a record
/// are logged and skipped.
pub fn handle(ctx: &HandlerContext, input: Option<&Path>, final_only: bool) -> Result<()> {
    let reader = input::open_lines(input)?;
    let mut board = BadgeBoard::new();
    let mut tick = 0usize;
    let mut skipped = 0usize;

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.context("failed to read input line")?;
        let line_no = idx + 1;
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "skipping malformed record");
                skipped += 1;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let invocation = match parse_record(&line) {
            Ok(invocation) => invocation,
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "skipping malformed record");
                skipped += 1;
                continue;
            }
        };

        let badge = Badge::from_invocation(&invocation);
        let update = board.upsert(invocation);
        tracing::debug!(
            line = line_no,
            tool_call_id = %badge.tool_call_id,
            ?update,
            complete = badge.is_complete,
            "board update"
        );

        if final_only || update == BoardUpdate::Unchanged {
            continue;
        }

        if ctx.is_json() {
            ctx.print_json_line(&badge)?;
        } else {
            println!("{}", format_badge(&badge, &ctx.options, tick));
            if !badge.is_complete {
                tick += 1;
            }
        }
    }

    let summary = BoardSummary::from(&board);
    tracing::info!(
        calls = board.len(),
        complete = summary.complete,
        pending = summary.pending,
        skipped,
        "stream finished"
    );

    if ctx.is_json() {
        if final_only {
            ctx.print_json(&summary)?;
        } else {
            ctx.print_json_line(&summary)?;
        }
        return Ok(());
    }

    if final_only {
        for badge in &summary.badges {
            println!("{}", format_badge(badge, &ctx.options, 0));
        }
    }
    println!(
        "{}",
        format_summary(summary.complete, summary.pending, ctx.options.enable_color)
    );
    Ok(())
}
