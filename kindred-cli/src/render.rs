//! TUI rendering traits for kindred types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to kindred-core types using owo_colors. Colors are dropped when stdout is
//! not a terminal.

use std::fmt::Display;

use kindred_core::date::parse_iso_date;
use kindred_core::{EventKind, FamilyMember, NotificationEvent};
use owo_colors::{OwoColorize, Stream, Style};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventKind {
    fn render(&self) -> String {
        match self {
            EventKind::Birthday => "🎂".to_string(),
            EventKind::Memorial => "🕯".to_string(),
        }
    }
}

impl Render for NotificationEvent {
    fn render(&self) -> String {
        let headline = match self.event_type {
            EventKind::Birthday => paint(self.headline(), Style::new().green().bold()),
            EventKind::Memorial => paint(self.headline(), Style::new().purple().bold()),
        };
        let when = if self.days_until == 0 {
            paint(self.when_label(), Style::new().yellow().bold())
        } else {
            self.when_label()
        };
        let date = self.occurs_on.format("%a %b %-d, %Y");
        let detail = format!("{} · {}", date, self.relation_type);

        format!(
            "{} {} {} {}",
            self.event_type.render(),
            headline,
            when,
            paint(detail, Style::new().dimmed())
        )
    }
}

impl Render for FamilyMember {
    fn render(&self) -> String {
        let mut header = format!(
            "{} {} {}",
            paint(format!("#{}", self.id), Style::new().dimmed()),
            paint(&self.name, Style::new().bold()),
            paint(format!("({})", self.relation_type), Style::new().cyan())
        );
        if self.is_deceased() {
            header.push_str(" †");
        }

        let mut lines = vec![header];

        if let Some(born) = non_blank(self.date_of_birth.as_deref()) {
            let label = paint("Born:", Style::new().dimmed());
            lines.push(format!("   {} {}", label, render_date(born)));
        }
        if let Some(died) = non_blank(self.date_of_death.as_deref()) {
            let label = paint("Passed:", Style::new().dimmed());
            lines.push(format!("   {} {}", label, render_date(died)));
        }
        if let Some(notes) = self.notes() {
            lines.push(format!("   {}", paint(notes, Style::new().italic())));
        }

        lines.join("\n")
    }
}

/// Apply `style` only when stdout supports colors.
pub fn paint<T: Display>(text: T, style: Style) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.style(style)).to_string()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Show a wire date in long form, or flag it when it can't be read.
fn render_date(raw: &str) -> String {
    match parse_iso_date(raw) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => format!("{} {}", raw, paint("(unreadable date)", Style::new().red())),
    }
}

/// Header line with the badge count, e.g. "🔔 3 upcoming events".
pub fn render_badge(count: usize, lookahead_days: u32) -> String {
    let noun = if count == 1 { "event" } else { "events" };
    let badge = format!("🔔 {} upcoming {}", count, noun);
    let window = format!("(next {} days)", lookahead_days);

    let badge_style = if count == 0 { Style::new().dimmed() } else { Style::new().bold() };
    format!("{} {}", paint(badge, badge_style), paint(window, Style::new().dimmed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kindred_core::{MemberId, RelationType};

    #[test]
    fn notification_line_has_headline_and_when() {
        owo_colors::set_override(false);
        let event = NotificationEvent {
            event_type: EventKind::Birthday,
            subject_name: "Rose".into(),
            occurs_on: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
            days_until: 2,
            relation_type: RelationType::GrandParent,
        };

        assert_eq!(
            event.render(),
            "🎂 Rose's Birthday In 2 days Wed Jun 12, 2024 · grand-parent"
        );
    }

    #[test]
    fn member_card_shows_dates_and_notes() {
        owo_colors::set_override(false);
        let member = FamilyMember {
            id: MemberId::Number(4),
            name: "Tomas".into(),
            relation_type: RelationType::Sibling,
            date_of_birth: Some("1970-03-05".into()),
            date_of_death: Some("bad".into()),
            notes: Some("Played the cello".into()),
        };

        let card = member.render();
        let lines: Vec<&str> = card.lines().collect();
        assert_eq!(
            lines,
            [
                "#4 Tomas (sibling) †",
                "   Born: March 5, 1970",
                "   Passed: bad (unreadable date)",
                "   Played the cello",
            ]
        );
    }

    #[test]
    fn badge_pluralizes() {
        owo_colors::set_override(false);
        assert_eq!(render_badge(1, 7), "🔔 1 upcoming event (next 7 days)");
        assert_eq!(render_badge(0, 7), "🔔 0 upcoming events (next 7 days)");
        assert_eq!(render_badge(3, 14), "🔔 3 upcoming events (next 14 days)");
    }
}
