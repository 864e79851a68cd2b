//! Participant records as supplied by the roster collaborator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::role::Role;

/// One entry of the input roster.
///
/// Records are read-only to the balancer. Assignment produces
/// [`Member`](crate::balance::Member) copies instead of mutating these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    /// Playable roles, in the participant's own order.
    pub roles: Vec<Role>,
    /// Preferred roles. `None` means no stated preference, which is never
    /// penalised; `Some(vec![])` penalises every assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<Vec<Role>>,
    /// Rating per role. A missing entry means the role cannot be rated and
    /// therefore cannot be assigned.
    #[serde(default)]
    pub skills: BTreeMap<Role, u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_heroes: Vec<String>,
}

impl Participant {
    /// Creates a participant with no roles, ratings or preferences.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Participant {
            id: id.into(),
            name: name.into(),
            roles: Vec::new(),
            primary: None,
            skills: BTreeMap::new(),
            preferred_heroes: Vec::new(),
        }
    }

    /// Adds a playable role with its rating.
    pub fn with_role(mut self, role: Role, rating: u32) -> Self {
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
        self.skills.insert(role, rating);
        self
    }

    /// Adds a playable role without a rating.
    pub fn with_unrated_role(mut self, role: Role) -> Self {
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
        self
    }

    /// Sets the preferred roles.
    pub fn with_primary(mut self, roles: &[Role]) -> Self {
        self.primary = Some(roles.to_vec());
        self
    }

    /// Sets the preferred heroes.
    pub fn with_heroes<I, S>(mut self, heroes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_heroes = heroes.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `role` is one of the stated preferred roles.
    pub fn prefers(&self, role: Role) -> bool {
        self.primary.as_ref().is_some_and(|p| p.contains(&role))
    }
}
