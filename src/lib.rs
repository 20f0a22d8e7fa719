//! Project-management toolkit library
//!
//! This library models a small project-management domain: projects, tasks,
//! team members, milestones, risks, and change records, with a pluggable
//! notification mechanism that broadcasts a message to every team member
//! whenever project state changes.
//!
//! # Architecture
//!
//! The library follows a 3-layer structure:
//! - **Domain Layer**: `model` module - data records and the `Project`
//!   aggregate with its mutation/broadcast protocol
//! - **Notification Layer**: `notify` module - strategy trait, simulated
//!   email/SMS strategies, and the delegating context
//! - **Input Layer**: `config` module - TOML project-definition loader
//!
//! Report rendering lives in the `report` module.
//!
//! # Example
//!
//! ```
//! use projtrack::{EmailNotification, Member, Project};
//! use chrono::NaiveDate;
//!
//! let mut project = Project::new(
//!     "Alpha",
//!     "Web application development",
//!     NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
//!     100_000.0,
//! );
//! project.set_notification_strategy(Box::new(EmailNotification));
//! project.add_team_member(Member::new("Alice", "Project lead"));
//! println!("{}", project.generate_report());
//! ```

pub mod config;
mod model;
mod notify;
pub mod report;

// Re-export commonly used types
pub use model::{Change, EmptyProjectError, Member, Milestone, Project, Risk, Task, Team};
pub use notify::{
    EmailNotification, NotificationContext, NotificationKind, NotificationStrategy,
    SmsNotification,
};
