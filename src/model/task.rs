use crate::model::Member;
use chrono::NaiveDate;
use std::rc::Rc;

/// A unit of work within a project.
///
/// Tasks are shared as `Rc<Task>`: a task held by a project may also
/// appear in other tasks' dependency lists. Dependency cycles are not
/// checked; keeping the graph acyclic is the caller's responsibility.
#[derive(Debug)]
pub struct Task {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Member responsible for the task, shared with the team.
    pub responsible: Rc<Member>,
    /// Free-form status label (e.g. "En cours", "done").
    pub status: String,
    /// Tasks this task depends on, in declaration order.
    pub dependencies: Vec<Rc<Task>>,
}

impl Task {
    /// Create a task with no dependencies, ready for sharing.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        responsible: Rc<Member>,
        status: impl Into<String>,
    ) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            description: description.into(),
            start_date,
            end_date,
            responsible,
            status: status.into(),
            dependencies: Vec::new(),
        })
    }

    /// Create a task with an explicit dependency list.
    pub fn with_dependencies(
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        responsible: Rc<Member>,
        status: impl Into<String>,
        dependencies: Vec<Rc<Task>>,
    ) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            description: description.into(),
            start_date,
            end_date,
            responsible,
            status: status.into(),
            dependencies,
        })
    }
}
