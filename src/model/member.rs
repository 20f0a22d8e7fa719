use std::rc::Rc;

/// A team member, identified by reference.
///
/// Members are created once and shared: the same `Rc<Member>` may sit in a
/// project's team and be the responsible party of any number of tasks.
/// Two members with identical name and role are still distinct members.
#[derive(Debug)]
pub struct Member {
    pub name: String,
    pub role: String,
}

impl Member {
    /// Create a member, ready for sharing.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            role: role.into(),
        })
    }
}

/// An ordered collection of members.
///
/// Insertion order is preserved and is the only ordering. Uniqueness is
/// not enforced.
#[derive(Debug, Default)]
pub struct Team {
    members: Vec<Rc<Member>>,
}

impl Team {
    /// Create an empty team.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member to the team.
    pub fn add_member(&mut self, member: Rc<Member>) {
        self.members.push(member);
    }

    /// The members in insertion order.
    pub fn members(&self) -> &[Rc<Member>] {
        &self.members
    }

    /// Number of members in the team.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the team has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
