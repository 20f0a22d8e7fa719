use crate::model::{Change, Member, Milestone, Risk, Task, Team};
use crate::notify::{NotificationContext, NotificationStrategy};
use crate::report;
use chrono::NaiveDate;
use std::rc::Rc;
use thiserror::Error;

/// Returned by [`Project::critical_path`] when the project holds no tasks.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("project has no tasks")]
pub struct EmptyProjectError;

/// The aggregate root: owns the team, task list, and risk/milestone/change
/// lists, and broadcasts a notification to every team member on each
/// state change.
///
/// Every mutating operation follows the same two-step protocol: append the
/// new value to the owned collection (or replace the field), then send a
/// derived message to each current member, in team order, before
/// returning. Broadcasts are fire-and-forget; with no notification
/// context configured they are silently skipped.
#[derive(Debug)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,

    /// Tasks in insertion order.
    ///
    /// Vec is the primary storage: it keeps insertion order, which is the
    /// only ordering the aggregate guarantees, and gives the project sole
    /// ownership of the list while the tasks themselves stay shareable.
    tasks: Vec<Rc<Task>>,
    team: Team,
    risks: Vec<Risk>,
    milestones: Vec<Milestone>,
    changes: Vec<Change>,

    /// Absent until a strategy is configured; broadcasts no-op while absent.
    notification: Option<NotificationContext>,
}

impl Project {
    /// Create a project with empty collections and no notification channel.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            start_date,
            end_date,
            budget,
            tasks: Vec::new(),
            team: Team::new(),
            risks: Vec::new(),
            milestones: Vec::new(),
            changes: Vec::new(),
            notification: None,
        }
    }

    /// Configure the notification channel for subsequent mutations.
    ///
    /// Replaces any previously configured strategy.
    pub fn set_notification_strategy(&mut self, strategy: Box<dyn NotificationStrategy>) {
        match &mut self.notification {
            Some(context) => context.set_strategy(strategy),
            None => self.notification = Some(NotificationContext::new(strategy)),
        }
    }

    /// Send `message` to every current team member, in team order.
    ///
    /// No-op when no notification context is configured.
    fn notify_members(&self, message: &str) {
        if let Some(context) = &self.notification {
            for member in self.team.members() {
                context.send(message, &member.name);
            }
        }
    }

    /// Append a member to the team and notify the members.
    ///
    /// The new member is part of the team when the broadcast runs, so they
    /// are notified of their own addition.
    pub fn add_team_member(&mut self, member: Rc<Member>) {
        let message = format!("{} was added to the team", member.name);
        self.team.add_member(member);
        self.notify_members(&message);
    }

    /// Append a task to the project and notify the members.
    pub fn add_task(&mut self, task: Rc<Task>) {
        let message = format!("New task added: {}", task.name);
        self.tasks.push(task);
        self.notify_members(&message);
    }

    /// Append a risk to the project and notify the members.
    pub fn add_risk(&mut self, risk: Risk) {
        let message = format!("New risk added: {}", risk.description);
        self.risks.push(risk);
        self.notify_members(&message);
    }

    /// Append a milestone to the project and notify the members.
    pub fn add_milestone(&mut self, milestone: Milestone) {
        let message = format!("New milestone added: {}", milestone.name);
        self.milestones.push(milestone);
        self.notify_members(&message);
    }

    /// Append a change record to the project and notify the members.
    pub fn add_change(&mut self, change: Change) {
        let message = format!(
            "Change recorded: {} (version {})",
            change.description, change.version
        );
        self.changes.push(change);
        self.notify_members(&message);
    }

    /// Replace the project budget and notify the members.
    pub fn set_budget(&mut self, budget: f64) {
        self.budget = budget;
        self.notify_members(&format!(
            "Project budget was set to {} currency units",
            budget
        ));
    }

    /// The tasks in insertion order.
    pub fn tasks(&self) -> &[Rc<Task>] {
        &self.tasks
    }

    /// The project team.
    pub fn team(&self) -> &Team {
        &self.team
    }

    /// The risks in insertion order.
    pub fn risks(&self) -> &[Risk] {
        &self.risks
    }

    /// The milestones in insertion order.
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    /// The change records in insertion order.
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// The task with the latest end date.
    ///
    /// When several tasks share the latest end date, the first one added
    /// wins (stable scan with a strict comparison).
    ///
    /// # Returns
    /// The winning task, or [`EmptyProjectError`] when the project holds
    /// no tasks.
    pub fn critical_path(&self) -> Result<&Rc<Task>, EmptyProjectError> {
        let mut latest: Option<&Rc<Task>> = None;
        for task in &self.tasks {
            match latest {
                Some(current) if task.end_date <= current.end_date => {}
                _ => latest = Some(task),
            }
        }
        latest.ok_or(EmptyProjectError)
    }

    /// Render the full project report.
    ///
    /// Read-only and deterministic: two calls without an intervening
    /// mutation produce identical strings.
    pub fn generate_report(&self) -> String {
        report::project_report(self)
    }
}
