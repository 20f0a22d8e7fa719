//! TOML project-definition loader
//!
//! A project definition file describes the project header plus
//! `[[members]]`, `[[tasks]]`, `[[risks]]`, `[[milestones]]`, and
//! `[[changes]]` sections. Dates are `YYYY-MM-DD` strings. The loader
//! applies every entry through the project's mutating operations in file
//! order, so an active notification strategy broadcasts during loading
//! exactly as it would during manual construction.
//!
//! Tasks reference members by name via `responsible`, and earlier tasks
//! by name via `depends_on`; forward references are rejected.

use crate::model::{Change, Member, Milestone, Project, Risk, Task};
use crate::notify::NotificationKind;
use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::rc::Rc;

/// Raw shape of a project definition file.
#[derive(Debug, Deserialize)]
pub struct ProjectFile {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    /// Optional delivery channel: "email" or "sms".
    pub notification: Option<String>,
    #[serde(default)]
    pub members: Vec<MemberEntry>,
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,
    #[serde(default)]
    pub risks: Vec<RiskEntry>,
    #[serde(default)]
    pub milestones: Vec<MilestoneEntry>,
    #[serde(default)]
    pub changes: Vec<ChangeEntry>,
}

#[derive(Debug, Deserialize)]
pub struct MemberEntry {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct TaskEntry {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Name of a member declared in `[[members]]`.
    pub responsible: String,
    pub status: String,
    /// Names of tasks declared earlier in the file.
    #[serde(default)]
    pub depends_on: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RiskEntry {
    pub description: String,
    pub probability: f64,
    pub impact: String,
}

#[derive(Debug, Deserialize)]
pub struct MilestoneEntry {
    pub name: String,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct ChangeEntry {
    pub description: String,
    pub version: String,
    pub date: NaiveDate,
}

/// Read and parse a project definition file.
pub fn load(path: impl AsRef<Path>) -> Result<ProjectFile> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read project file {}", path.display()))?;
    let file: ProjectFile = toml::from_str(&content)
        .with_context(|| format!("failed to parse project file {}", path.display()))?;
    Ok(file)
}

impl ProjectFile {
    /// Assemble the project, applying every entry through the aggregate's
    /// mutating operations in file order.
    ///
    /// # Arguments
    /// * `notify_override` - Delivery channel overriding the file's
    ///   `notification` key, if any
    pub fn build(self, notify_override: Option<NotificationKind>) -> Result<Project> {
        let mut project = Project::new(
            self.name,
            self.description,
            self.start_date,
            self.end_date,
            self.budget,
        );

        let kind = match notify_override {
            Some(kind) => Some(kind),
            None => self
                .notification
                .as_deref()
                .map(str::parse)
                .transpose()
                .map_err(|e: String| anyhow!(e))?,
        };
        if let Some(kind) = kind {
            project.set_notification_strategy(kind.strategy());
        }

        let mut members: Vec<Rc<Member>> = Vec::new();
        for entry in self.members {
            let member = Member::new(entry.name, entry.role);
            members.push(Rc::clone(&member));
            project.add_team_member(member);
        }

        let mut tasks: Vec<Rc<Task>> = Vec::new();
        for entry in self.tasks {
            let responsible = members
                .iter()
                .find(|m| m.name == entry.responsible)
                .cloned()
                .ok_or_else(|| {
                    anyhow!(
                        "task '{}' references unknown member '{}'",
                        entry.name,
                        entry.responsible
                    )
                })?;

            let mut dependencies = Vec::new();
            for dep_name in &entry.depends_on {
                match tasks.iter().find(|t| t.name == *dep_name) {
                    Some(dep) => dependencies.push(Rc::clone(dep)),
                    None => bail!(
                        "task '{}' depends on unknown task '{}' (dependencies must be declared earlier in the file)",
                        entry.name,
                        dep_name
                    ),
                }
            }

            let task = Task::with_dependencies(
                entry.name,
                entry.description,
                entry.start_date,
                entry.end_date,
                responsible,
                entry.status,
                dependencies,
            );
            tasks.push(Rc::clone(&task));
            project.add_task(task);
        }

        for entry in self.risks {
            project.add_risk(Risk::new(entry.description, entry.probability, entry.impact));
        }
        for entry in self.milestones {
            project.add_milestone(Milestone::new(entry.name, entry.date));
        }
        for entry in self.changes {
            project.add_change(Change::new(entry.description, entry.version, entry.date));
        }

        Ok(project)
    }
}

/// Load a project definition and assemble the project in one step.
pub fn load_project(
    path: impl AsRef<Path>,
    notify_override: Option<NotificationKind>,
) -> Result<Project> {
    load(path)?.build(notify_override)
}
