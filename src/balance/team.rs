//! Teams and the assembled match result.

use std::fmt;

use serde::Serialize;

use crate::catalog::GameMap;
use crate::roster::{skill_or_zero, Participant, Role};

/// A participant placed on a team in a specific role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    #[serde(flatten)]
    pub participant: Participant,
    pub assigned_role: Role,
}

impl Member {
    pub fn new(participant: Participant, assigned_role: Role) -> Self {
        Member {
            participant,
            assigned_role,
        }
    }

    pub fn id(&self) -> &str {
        &self.participant.id
    }

    /// Rating at the assigned role.
    pub fn skill(&self) -> u32 {
        skill_or_zero(&self.participant, self.assigned_role)
    }

    /// True when the member stated preferred roles and this is not one of them.
    pub fn off_preference(&self) -> bool {
        self.participant
            .primary
            .as_ref()
            .is_some_and(|p| !p.contains(&self.assigned_role))
    }
}

/// One side of a match.
///
/// `total_skill` is always the exact sum of member skills; the only way to
/// build a `Team` is through constructors that recompute it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Team {
    members: Vec<Member>,
    total_skill: u64,
}

impl Team {
    pub fn new(members: Vec<Member>) -> Self {
        let total_skill = members.iter().map(|m| u64::from(m.skill())).sum();
        Team {
            members,
            total_skill,
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn total_skill(&self) -> u64 {
        self.total_skill
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members assigned to `role`, in team order.
    pub fn in_role(&self, role: Role) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(move |m| m.assigned_role == role)
    }

    /// Number of members assigned to `role`.
    pub fn role_count(&self, role: Role) -> usize {
        self.in_role(role).count()
    }

    /// Combined rating of the members assigned to `role`.
    pub fn role_skill(&self, role: Role) -> u64 {
        self.in_role(role).map(|m| u64::from(m.skill())).sum()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.iter().any(|m| m.id() == id)
    }

    /// Returns a new team with `member` appended.
    pub fn with_member(&self, member: Member) -> Team {
        let mut members = self.members.clone();
        members.push(member);
        Team::new(members)
    }

    /// Returns a new team with the member at `slot` replaced.
    pub fn with_replaced(&self, slot: usize, member: Member) -> Team {
        let mut members = self.members.clone();
        members[slot] = member;
        Team::new(members)
    }
}

/// A role that could not be filled on both teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    pub role: Role,
    pub required: usize,
    pub assigned: usize,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} role is short of players (required {}, got {})",
            self.role, self.required, self.assigned
        )
    }
}

/// Outcome of balancing a roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub team_a: Team,
    pub team_b: Team,
    /// Participants not placed on either team, in shuffled order.
    pub spectators: Vec<Participant>,
    pub warnings: Vec<Shortfall>,
    pub selected_map: Option<GameMap>,
    pub banned_heroes: Vec<String>,
}

impl MatchResult {
    /// Human-readable warning lines.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Number of participants placed on a team.
    pub fn assigned_count(&self) -> usize {
        self.team_a.len() + self.team_b.len()
    }
}
