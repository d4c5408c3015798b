use anyhow::Result;
use kindred_core::RelationFilter;
use kindred_core::member::filter_by_relation;
use owo_colors::OwoColorize;

use crate::commands::Context;
use crate::render::Render;

pub async fn run(ctx: &Context, filter: RelationFilter) -> Result<()> {
    let client = ctx.client()?;
    let members = client.list_members().await?;
    let shown = filter_by_relation(&members, filter);

    if shown.is_empty() {
        match filter {
            RelationFilter::All => {
                println!("{}", "No family members yet. Add one with `kindred add`".dimmed())
            }
            RelationFilter::Only(rel) => {
                let message = format!("No family members with relation '{}'", rel);
                println!("{}", message.dimmed())
            }
        }
        return Ok(());
    }

    for (i, member) in shown.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", member.render());
    }

    Ok(())
}
