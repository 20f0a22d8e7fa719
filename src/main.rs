//! projtrack - Main Entry Point
//!
//! Command-line driver for the project-management library. Loads a
//! project definition from a TOML file, or runs a built-in demo scenario
//! when no file is given, and prints the project report.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use projtrack::{Change, Member, Milestone, NotificationKind, Project, Risk, Task, config};

/// Project tracker - builds a project, broadcasts change notifications to
/// the team, and prints the project report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML project definition; runs the demo scenario if omitted
    file: Option<String>,

    /// Notification channel (email or sms), overriding the file's setting
    #[arg(long, value_parser = str::parse::<NotificationKind>)]
    notify: Option<NotificationKind>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let project = match args.file {
        Some(path) => config::load_project(path, args.notify)?,
        None => demo_project(args.notify.unwrap_or(NotificationKind::Email)),
    };

    print!("{}", project.generate_report());
    Ok(())
}

/// Fixed demo scenario: one project, two members, two tasks, a budget
/// revision, and one risk/milestone/change each.
fn demo_project(notify: NotificationKind) -> Project {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

    let mut project = Project::new(
        "Atlas",
        "Customer portal rollout",
        date(2023, 1, 1),
        date(2023, 12, 31),
        50_000.0,
    );
    project.set_notification_strategy(notify.strategy());

    let mara = Member::new("Mara", "Developer");
    let adam = Member::new("Adam", "Analyst");
    project.add_team_member(mara.clone());
    project.add_team_member(adam.clone());

    let analysis = Task::new(
        "Requirements analysis",
        "Collect and analyse customer requirements",
        date(2023, 2, 1),
        date(2023, 2, 28),
        mara,
        "in progress",
    );
    project.add_task(analysis.clone());
    project.add_task(Task::with_dependencies(
        "Development",
        "Implement the portal features",
        date(2023, 3, 1),
        date(2023, 6, 30),
        adam,
        "pending",
        vec![analysis],
    ));

    project.set_budget(50_000.0);
    project.add_risk(Risk::new("Delivery slips past Q2", 0.4, "high"));
    project.add_milestone(Milestone::new("Phase 1 complete", date(2023, 6, 30)));
    project.add_change(Change::new(
        "Project scope extended to mobile",
        "2",
        date(2023, 5, 1),
    ));

    project
}
