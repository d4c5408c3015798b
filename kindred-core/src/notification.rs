//! Upcoming birthday and memorial notifications.
//!
//! The feed is rebuilt from scratch for a given roster and reference date.
//! It holds no state between calls: the same inputs always give the same
//! list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::anniversary::next_occurrence;
use crate::constants::DEFAULT_LOOKAHEAD_DAYS;
use crate::member::{FamilyMember, RelationType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Birthday,
    Memorial,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Birthday => "Birthday",
            EventKind::Memorial => "Memorial",
        }
    }
}

/// One upcoming anniversary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub event_type: EventKind,
    pub subject_name: String,
    pub occurs_on: NaiveDate,
    pub days_until: i64,
    pub relation_type: RelationType,
}

impl NotificationEvent {
    /// e.g. "Rose's Birthday"
    pub fn headline(&self) -> String {
        format!("{}'s {}", self.subject_name, self.event_type.label())
    }

    /// "Today", "In 1 day", "In 5 days"
    pub fn when_label(&self) -> String {
        match self.days_until {
            0 => "Today".to_string(),
            1 => "In 1 day".to_string(),
            n => format!("In {} days", n),
        }
    }
}

/// Notifications within the default seven-day window.
pub fn upcoming(members: &[FamilyMember], today: NaiveDate) -> Vec<NotificationEvent> {
    build_notifications(members, today, DEFAULT_LOOKAHEAD_DAYS)
}

/// Every birthday and memorial falling within `lookahead_days` of `today`
/// (both ends inclusive), soonest first.
///
/// Events on the same day keep roster order; a member's birthday comes
/// before their memorial.
pub fn build_notifications(
    members: &[FamilyMember],
    today: NaiveDate,
    lookahead_days: u32,
) -> Vec<NotificationEvent> {
    let window = 0..=i64::from(lookahead_days);
    let mut events = Vec::new();

    for member in members {
        let anchors = [
            (EventKind::Birthday, member.birth_date()),
            (EventKind::Memorial, member.death_date()),
        ];

        for (kind, anchor) in anchors {
            let Some(anchor) = anchor else {
                continue;
            };
            let Some(occurrence) = next_occurrence(anchor, today) else {
                continue;
            };

            if window.contains(&occurrence.days_until) {
                events.push(NotificationEvent {
                    event_type: kind,
                    subject_name: member.name.clone(),
                    occurs_on: occurrence.occurs_on,
                    days_until: occurrence.days_until,
                    relation_type: member.relation_type,
                });
            }
        }
    }

    // Stable: ties stay in roster order
    events.sort_by_key(|e| e.days_until);
    events
}

/// Number shown on the notification badge.
pub fn badge_count(events: &[NotificationEvent]) -> usize {
    events.len()
}
