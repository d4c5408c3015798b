use anyhow::{Context as _, Result};
use kindred_core::api::{LoginRequest, RegisterRequest};
use kindred_core::session::Session;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::commands::{Context, refresh_feed};

pub struct Credentials {
    pub username: String,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn login(ctx: &Context, creds: Credentials) -> Result<()> {
    let password = password_or_prompt(creds.password)?;
    let client = Client::new(&ctx.config.api_url)?;

    let resp = client
        .login(&LoginRequest {
            username: creds.username,
            password,
            email: creds.email,
        })
        .await?;

    let session = Session::from(resp);
    session.save()?;

    println!("{} {}", "Logged in as".green(), session.user.username.bold());

    let client = Client::authenticated(&ctx.config.api_url, &session)?;
    refresh_feed(ctx, &client).await
}

pub async fn register(ctx: &Context, creds: Credentials, email: String) -> Result<()> {
    let password = password_or_prompt(creds.password)?;
    let client = Client::new(&ctx.config.api_url)?;

    client
        .register(&RegisterRequest {
            username: creds.username.clone(),
            email,
            password,
        })
        .await?;

    println!("{}", "Registration successful! Please login.".green());
    println!("  kindred login --username {}", creds.username);
    Ok(())
}

pub fn logout() -> Result<()> {
    if Session::clear()? {
        println!("Logged out");
    } else {
        println!("{}", "Not logged in".dimmed());
    }
    Ok(())
}

/// Prompt the user for password input (hidden).
fn password_or_prompt(password: Option<String>) -> Result<String> {
    match password {
        Some(p) => Ok(p),
        None => rpassword::prompt_password("Password: ").context("Failed to read password"),
    }
}
