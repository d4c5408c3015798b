pub mod add;
pub mod auth;
pub mod delete;
pub mod members;
pub mod update;
pub mod upcoming;

use anyhow::Result;
use chrono::NaiveDate;
use kindred_core::notification::badge_count;
use kindred_core::{FamilyMember, MemberId, build_notifications};
use kindred_core::config::KindredConfig;
use kindred_core::session::Session;

use crate::client::Client;
use crate::render::{Render, render_badge};

/// Per-invocation state handed to every command.
pub struct Context {
    pub config: KindredConfig,
    /// Reference date for the notification feed, read once at startup.
    pub today: NaiveDate,
}

impl Context {
    /// Client carrying the stored session's token.
    pub fn client(&self) -> Result<Client> {
        let session = Session::require()?;
        Client::authenticated(&self.config.api_url, &session)
    }
}

/// Re-fetch the roster after a change and show the rebuilt feed.
pub async fn refresh_feed(ctx: &Context, client: &Client) -> Result<()> {
    let members = client.list_members().await?;
    let events = build_notifications(&members, ctx.today, ctx.config.lookahead_days);

    println!("{}", render_badge(badge_count(&events), ctx.config.lookahead_days));
    for event in &events {
        println!("   {}", event.render());
    }

    Ok(())
}

/// Look up a member in a freshly fetched roster.
pub fn find_member<'a>(members: &'a [FamilyMember], id: &MemberId) -> Result<&'a FamilyMember> {
    members
        .iter()
        .find(|m| m.id.matches(id))
        .ok_or_else(|| anyhow::anyhow!("Family member #{} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_core::RelationType;

    fn member(id: MemberId, name: &str) -> FamilyMember {
        FamilyMember {
            id,
            name: name.into(),
            relation_type: RelationType::Child,
            date_of_birth: None,
            date_of_death: None,
            notes: None,
        }
    }

    #[test]
    fn find_member_matches_numeric_and_string_ids() {
        let roster = vec![
            member(MemberId::Number(7), "Numeric"),
            member(MemberId::Text("19".into()), "Stringly"),
        ];

        assert_eq!(find_member(&roster, &MemberId::from("7")).unwrap().name, "Numeric");
        assert_eq!(find_member(&roster, &MemberId::from("19")).unwrap().name, "Stringly");
        assert!(find_member(&roster, &MemberId::from("8")).is_err());
    }

    #[test]
    fn find_member_keeps_leading_zeros() {
        let roster = vec![
            member(MemberId::Number(7), "Seven"),
            member(MemberId::Text("007".into()), "Bond"),
        ];

        assert_eq!(find_member(&roster, &MemberId::from("007")).unwrap().name, "Bond");
        assert_eq!(find_member(&roster, &MemberId::from("7")).unwrap().name, "Seven");
    }
}
