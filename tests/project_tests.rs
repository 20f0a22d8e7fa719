// Tests for the Project aggregate: collection ordering, reference
// identity, and critical-path selection.

mod common;

use common::{date, test_project, test_task};
use projtrack::{Change, EmptyProjectError, Member, Milestone, Risk, Task};
use std::rc::Rc;

#[test]
fn test_new_project_starts_empty() {
    let project = test_project();
    assert!(project.team().is_empty());
    assert!(project.tasks().is_empty());
    assert!(project.risks().is_empty());
    assert!(project.milestones().is_empty());
    assert!(project.changes().is_empty());
}

#[test]
fn test_add_team_member_preserves_call_order() {
    let mut project = test_project();
    let alice = Member::new("Alice", "Project lead");
    let bob = Member::new("Bob", "Developer");
    let carol = Member::new("Carol", "Analyst");

    project.add_team_member(alice.clone());
    project.add_team_member(bob.clone());
    project.add_team_member(carol.clone());

    let members = project.team().members();
    assert_eq!(members.len(), 3);
    assert!(Rc::ptr_eq(&members[0], &alice));
    assert!(Rc::ptr_eq(&members[1], &bob));
    assert!(Rc::ptr_eq(&members[2], &carol));
}

#[test]
fn test_duplicate_members_are_not_rejected() {
    let mut project = test_project();
    let alice = Member::new("Alice", "Project lead");
    project.add_team_member(alice.clone());
    project.add_team_member(alice);
    assert_eq!(project.team().len(), 2);
}

#[test]
fn test_members_with_same_fields_are_distinct() {
    let first = Member::new("Alice", "Project lead");
    let second = Member::new("Alice", "Project lead");
    assert!(!Rc::ptr_eq(&first, &second));
}

#[test]
fn test_add_task_preserves_order_and_identity() {
    let mut project = test_project();
    let alice = Member::new("Alice", "Project lead");
    let first = test_task("first", date(2023, 6, 1), alice.clone());
    let second = test_task("second", date(2023, 7, 1), alice);

    project.add_task(first.clone());
    project.add_task(second.clone());

    let tasks = project.tasks();
    assert_eq!(tasks.len(), 2);
    assert!(Rc::ptr_eq(&tasks[0], &first));
    assert!(Rc::ptr_eq(&tasks[1], &second));
}

#[test]
fn test_responsible_member_is_shared_with_team() {
    let mut project = test_project();
    let alice = Member::new("Alice", "Project lead");
    project.add_team_member(alice.clone());
    project.add_task(test_task("analysis", date(2023, 6, 1), alice));

    let task = &project.tasks()[0];
    assert!(Rc::ptr_eq(&task.responsible, &project.team().members()[0]));
}

#[test]
fn test_task_dependencies_reference_existing_tasks() {
    let alice = Member::new("Alice", "Project lead");
    let analysis = test_task("analysis", date(2023, 6, 1), alice.clone());
    let build = Task::with_dependencies(
        "build",
        "implementation",
        date(2023, 6, 2),
        date(2023, 8, 1),
        alice,
        "pending",
        vec![analysis.clone()],
    );

    assert_eq!(build.dependencies.len(), 1);
    assert!(Rc::ptr_eq(&build.dependencies[0], &analysis));
}

#[test]
fn test_set_budget_replaces_value() {
    let mut project = test_project();
    assert_eq!(project.budget, 100_000.0);
    project.set_budget(150_000.0);
    assert_eq!(project.budget, 150_000.0);
}

#[test]
fn test_risks_milestones_changes_append_in_order() {
    let mut project = test_project();
    project.add_risk(Risk::new("slippage", 0.4, "high"));
    project.add_risk(Risk::new("attrition", 0.1, "medium"));
    project.add_milestone(Milestone::new("phase 1", date(2023, 6, 30)));
    project.add_change(Change::new("scope extended", "2", date(2023, 5, 1)));

    assert_eq!(project.risks().len(), 2);
    assert_eq!(project.risks()[0].description, "slippage");
    assert_eq!(project.risks()[1].description, "attrition");
    assert_eq!(project.milestones().len(), 1);
    assert_eq!(project.changes().len(), 1);
    assert_eq!(project.changes()[0].version, "2");
}

#[test]
fn test_critical_path_single_task() {
    let mut project = test_project();
    let alice = Member::new("Alice", "Project lead");
    let task = test_task("only", date(2023, 5, 15), alice);
    project.add_task(task.clone());

    let critical = project.critical_path().unwrap();
    assert!(Rc::ptr_eq(critical, &task));
}

#[test]
fn test_critical_path_picks_latest_end_date() {
    let mut project = test_project();
    let alice = Member::new("Alice", "Project lead");
    project.add_task(test_task("short", date(2023, 5, 15), alice.clone()));
    let longest = test_task("long", date(2023, 9, 30), alice.clone());
    project.add_task(longest.clone());
    project.add_task(test_task("middle", date(2023, 7, 1), alice));

    let critical = project.critical_path().unwrap();
    assert!(Rc::ptr_eq(critical, &longest));
    for task in project.tasks() {
        assert!(critical.end_date >= task.end_date);
    }
}

#[test]
fn test_critical_path_tie_break_first_added_wins() {
    let mut project = test_project();
    let alice = Member::new("Alice", "Project lead");
    let first = test_task("first", date(2023, 9, 30), alice.clone());
    let second = test_task("second", date(2023, 9, 30), alice);
    project.add_task(first.clone());
    project.add_task(second);

    assert!(Rc::ptr_eq(project.critical_path().unwrap(), &first));
}

#[test]
fn test_critical_path_on_empty_project_is_an_error() {
    let project = test_project();
    assert_eq!(project.critical_path().unwrap_err(), EmptyProjectError);
}
