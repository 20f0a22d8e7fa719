//! Project-management domain models
//!
//! This module contains the core data structures and the `Project`
//! aggregate. It is split into submodules for better organization:
//! - `member`: `Member` and the ordered `Team` collection
//! - `task`: `Task` with dates, responsible member, and dependencies
//! - `record`: `Milestone`, `Risk`, and `Change` value records
//! - `project`: the `Project` aggregate with its mutation/broadcast protocol

mod member;
mod project;
mod record;
mod task;

// Re-export all public types
pub use member::{Member, Team};
pub use project::{EmptyProjectError, Project};
pub use record::{Change, Milestone, Risk};
pub use task::Task;
