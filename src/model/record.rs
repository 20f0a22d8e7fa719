use chrono::NaiveDate;

/// A dated checkpoint in the project plan.
#[derive(Debug, Clone)]
pub struct Milestone {
    pub name: String,
    pub date: NaiveDate,
}

impl Milestone {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }
}

/// An identified project risk.
///
/// `probability` is conventionally in `[0, 1]` but is not validated.
#[derive(Debug, Clone)]
pub struct Risk {
    pub description: String,
    pub probability: f64,
    pub impact: String,
}

impl Risk {
    pub fn new(description: impl Into<String>, probability: f64, impact: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            probability,
            impact: impact.into(),
        }
    }
}

/// A recorded change to the project, tagged with a version.
#[derive(Debug, Clone)]
pub struct Change {
    pub description: String,
    pub version: String,
    pub date: NaiveDate,
}

impl Change {
    pub fn new(description: impl Into<String>, version: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            version: version.into(),
            date,
        }
    }
}
