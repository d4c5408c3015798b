use anyhow::Result;
use kindred_core::build_notifications;
use kindred_core::notification::badge_count;
use owo_colors::OwoColorize;

use crate::commands::Context;
use crate::render::{Render, render_badge};

pub async fn run(ctx: &Context, days: Option<u32>, json: bool) -> Result<()> {
    let lookahead_days = days.unwrap_or(ctx.config.lookahead_days);

    let client = ctx.client()?;
    let members = client.list_members().await?;
    let events = build_notifications(&members, ctx.today, lookahead_days);

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    println!("{}", render_badge(badge_count(&events), lookahead_days));

    if events.is_empty() {
        println!("   {}", "No birthdays or memorials coming up".dimmed());
        return Ok(());
    }

    for event in &events {
        println!("   {}", event.render());
    }

    Ok(())
}
