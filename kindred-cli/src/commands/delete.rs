use anyhow::Result;
use dialoguer::Confirm;
use kindred_core::MemberId;
use owo_colors::OwoColorize;

use crate::commands::{Context, find_member, refresh_feed};

pub async fn run(ctx: &Context, id: MemberId, yes: bool) -> Result<()> {
    let client = ctx.client()?;
    let members = client.list_members().await?;
    let member = find_member(&members, &id)?;

    // Confirm unless --yes
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete {} from your family members?",
                member.name
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    client.delete_member(&id).await?;

    println!("{} {}", "Deleted".red(), member.name.bold());
    refresh_feed(ctx, &client).await
}
