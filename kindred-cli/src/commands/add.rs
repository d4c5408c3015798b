use anyhow::Result;
use kindred_core::MemberForm;
use owo_colors::OwoColorize;

use crate::commands::{Context, refresh_feed};

pub async fn run(ctx: &Context, form: MemberForm) -> Result<()> {
    let form = form.normalized();
    form.validate()?;

    let client = ctx.client()?;
    client.create_member(&form).await?;

    println!("{} {}", "Added".green(), form.name.bold());
    refresh_feed(ctx, &client).await
}
