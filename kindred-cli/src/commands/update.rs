use anyhow::Result;
use kindred_core::{MemberForm, MemberId, RelationType};
use owo_colors::OwoColorize;

use crate::commands::{Context, find_member, refresh_feed};

/// Fields given on the command line. `None` keeps the current value; an
/// empty string clears an optional field.
#[derive(Debug, Default)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub relation: Option<RelationType>,
    pub born: Option<String>,
    pub died: Option<String>,
    pub notes: Option<String>,
}

impl MemberPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.relation.is_none()
            && self.born.is_none()
            && self.died.is_none()
            && self.notes.is_none()
    }

    /// Apply on top of the member's current form.
    pub fn apply(self, mut form: MemberForm) -> MemberForm {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(relation) = self.relation {
            form.relation_type = relation;
        }
        if let Some(born) = self.born {
            form.date_of_birth = Some(born);
        }
        if let Some(died) = self.died {
            form.date_of_death = Some(died);
        }
        if let Some(notes) = self.notes {
            form.notes = Some(notes);
        }
        form.normalized()
    }
}

pub async fn run(ctx: &Context, id: MemberId, patch: MemberPatch) -> Result<()> {
    if patch.is_empty() {
        anyhow::bail!("Nothing to update. Pass at least one of --name, --relation, --born, --died, --notes");
    }

    let client = ctx.client()?;
    let members = client.list_members().await?;
    let member = find_member(&members, &id)?;

    let form = patch.apply(MemberForm::from_member(member));
    form.validate()?;

    client.update_member(&id, &form).await?;

    println!("{} {}", "Updated".yellow(), form.name.bold());
    refresh_feed(ctx, &client).await
}
