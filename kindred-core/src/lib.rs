//! Core types for kindred.
//!
//! This crate provides everything the CLI needs apart from I/O to the
//! roster API:
//! - `member` for the family roster and the create/update form
//! - `anniversary` and `notification` for the upcoming-event feed
//! - `api`, `config` and `session` for the client plumbing

pub mod anniversary;
pub mod api;
pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod member;
pub mod notification;
pub mod session;

// Re-export the roster and feed types at crate root for convenience
pub use member::{FamilyMember, MemberForm, MemberId, RelationFilter, RelationType};
pub use notification::{EventKind, NotificationEvent, build_notifications, upcoming};
