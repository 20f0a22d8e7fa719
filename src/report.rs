//! Report rendering for projects
//!
//! Builds the human-readable project report. The output is for display
//! only; it is not a machine-readable contract.

use crate::model::Project;

/// Render a project into a full textual report.
///
/// Sections appear in a fixed order: header, team, tasks, risks,
/// milestones, changes. Within each section, items appear in insertion
/// order.
pub fn project_report(project: &Project) -> String {
    let mut result = format!("Project report: {}\n", project.name);
    result.push_str(&format!("Description: {}\n", project.description));
    result.push_str(&format!("Start date: {}\n", project.start_date));
    result.push_str(&format!("End date: {}\n", project.end_date));
    result.push_str(&format!("Budget: {}\n", project.budget));

    result.push_str("Team:\n");
    for member in project.team().members() {
        result.push_str(&format!("  - {} ({})\n", member.name, member.role));
    }

    result.push_str("Tasks:\n");
    for task in project.tasks() {
        result.push_str(&format!(
            "  - {}: {} (from {} to {})\n",
            task.name, task.status, task.start_date, task.end_date
        ));
    }

    result.push_str("Risks:\n");
    for risk in project.risks() {
        result.push_str(&format!(
            "  - {} (probability: {}, impact: {})\n",
            risk.description, risk.probability, risk.impact
        ));
    }

    result.push_str("Milestones:\n");
    for milestone in project.milestones() {
        result.push_str(&format!("  - {} on {}\n", milestone.name, milestone.date));
    }

    result.push_str("Changes:\n");
    for change in project.changes() {
        result.push_str(&format!(
            "  - {} (version {} on {})\n",
            change.description, change.version, change.date
        ));
    }

    result
}
