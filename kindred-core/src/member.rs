//! Family roster types.
//!
//! These mirror the JSON shape served by the roster API. Dates are kept as
//! the raw wire strings so that one malformed value never fails the whole
//! roster; use [`FamilyMember::birth_date`] and [`FamilyMember::death_date`]
//! to read them as calendar dates.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::{format_iso_date, parse_iso_date, parse_optional_date};
use crate::error::{KindredError, KindredResult};

/// Server-assigned member identifier.
///
/// Backends differ on whether ids are integers or strings, so both are
/// accepted and rendered back unchanged. Ids are compared by their rendered
/// form (see [`MemberId::matches`]), never by variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberId {
    Number(i64),
    Unsigned(u64),
    Text(String),
}

impl MemberId {
    /// True when both ids render the same, e.g. `Number(7)` and `Text("7")`.
    pub fn matches(&self, other: &MemberId) -> bool {
        self.to_string() == other.to_string()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberId::Number(n) => write!(f, "{}", n),
            MemberId::Unsigned(n) => write!(f, "{}", n),
            MemberId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Ids typed by the user are kept verbatim so that `007` stays `007` in
/// lookups and URLs.
impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        MemberId::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationType {
    GrandParent,
    #[default]
    Parent,
    Child,
    Sibling,
    GrandChild,
    Spouse,
    #[serde(other)]
    Other,
}

impl RelationType {
    pub const ALL: [RelationType; 7] = [
        RelationType::GrandParent,
        RelationType::Parent,
        RelationType::Child,
        RelationType::Sibling,
        RelationType::GrandChild,
        RelationType::Spouse,
        RelationType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::GrandParent => "grand-parent",
            RelationType::Parent => "parent",
            RelationType::Child => "child",
            RelationType::Sibling => "sibling",
            RelationType::GrandChild => "grand-child",
            RelationType::Spouse => "spouse",
            RelationType::Other => "other",
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationType {
    type Err = KindredError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationType::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| KindredError::UnknownRelation(s.to_string()))
    }
}

/// A person on the user's roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: MemberId,
    pub name: String,
    #[serde(default = "missing_relation", deserialize_with = "relation_or_other")]
    pub relation_type: RelationType,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub date_of_death: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn missing_relation() -> RelationType {
    RelationType::Other
}

/// A `null` relation reads as `other`, like an unknown one.
fn relation_or_other<'de, D>(deserializer: D) -> Result<RelationType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<RelationType>::deserialize(deserializer)?.unwrap_or(RelationType::Other))
}

/// Decode a roster response body.
///
/// Only a body that is not a JSON array is an error. A record that still
/// cannot be read (no name, an id that is neither a number nor a string) is
/// dropped with a warning so the rest of the roster loads.
pub fn roster_from_json(body: &str) -> KindredResult<Vec<FamilyMember>> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| KindredError::Serialization(e.to_string()))?;

    let members = records
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| match serde_json::from_value(record) {
            Ok(member) => Some(member),
            Err(e) => {
                log::warn!("skipping unreadable roster record #{}: {}", i, e);
                None
            }
        })
        .collect();

    Ok(members)
}

impl FamilyMember {
    /// Birth date, if present and well-formed.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        parse_optional_date(self.date_of_birth.as_deref())
    }

    /// Death date, if present and well-formed.
    pub fn death_date(&self) -> Option<NaiveDate> {
        parse_optional_date(self.date_of_death.as_deref())
    }

    /// A recorded date of death (even one that fails to parse) marks the
    /// member as deceased.
    pub fn is_deceased(&self) -> bool {
        self.date_of_death
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    /// Notes with surrounding whitespace removed, `None` when blank.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Request body for creating or updating a member.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemberForm {
    pub name: String,
    pub relation_type: RelationType,
    pub date_of_birth: Option<String>,
    pub date_of_death: Option<String>,
    pub notes: Option<String>,
}

impl MemberForm {
    pub fn new(name: impl Into<String>, relation_type: RelationType) -> Self {
        MemberForm {
            name: name.into(),
            relation_type,
            ..Default::default()
        }
    }

    /// Pre-fill a form from an existing member, as done when editing.
    pub fn from_member(member: &FamilyMember) -> Self {
        MemberForm {
            name: member.name.clone(),
            relation_type: member.relation_type,
            date_of_birth: member.date_of_birth.clone(),
            date_of_death: member.date_of_death.clone(),
            notes: member.notes.clone(),
        }
        .normalized()
    }

    /// Trim text fields and turn empty strings into absent values.
    pub fn normalized(self) -> Self {
        MemberForm {
            name: self.name.trim().to_string(),
            relation_type: self.relation_type,
            date_of_birth: canonical_date(self.date_of_birth),
            date_of_death: canonical_date(self.date_of_death),
            notes: blank_to_none(self.notes),
        }
    }

    /// Check the form before it is sent to the server.
    pub fn validate(&self) -> KindredResult<()> {
        if self.name.trim().is_empty() {
            return Err(KindredError::InvalidMember("name must not be empty".into()));
        }

        for date in [&self.date_of_birth, &self.date_of_death].into_iter().flatten() {
            if !date.trim().is_empty() {
                parse_iso_date(date)?;
            }
        }

        Ok(())
    }
}

/// Blank dates become absent; readable ones are rewritten as plain
/// `YYYY-MM-DD`. Unreadable ones are kept for `validate` to report.
fn canonical_date(value: Option<String>) -> Option<String> {
    blank_to_none(value).map(|s| match parse_iso_date(&s) {
        Ok(date) => format_iso_date(date),
        Err(_) => s,
    })
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Which relations to show when listing the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelationFilter {
    #[default]
    All,
    Only(RelationType),
}

impl FromStr for RelationFilter {
    type Err = KindredError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(RelationFilter::All),
            other => other.parse().map(RelationFilter::Only),
        }
    }
}

/// Members matching `filter`, in roster order.
pub fn filter_by_relation(members: &[FamilyMember], filter: RelationFilter) -> Vec<&FamilyMember> {
    members
        .iter()
        .filter(|m| match filter {
            RelationFilter::All => true,
            RelationFilter::Only(rel) => m.relation_type == rel,
        })
        .collect()
}
