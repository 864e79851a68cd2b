//! Skill lookup and role eligibility.

use super::participant::Participant;
use super::role::Role;

/// Returns the participant's rating for `role`, or `None` if unrated.
pub fn skill(participant: &Participant, role: Role) -> Option<u32> {
    participant.skills.get(&role).copied()
}

/// A participant can be assigned `role` only if it is one of their playable
/// roles and they have a rating for it.
pub fn can_play_role(participant: &Participant, role: Role) -> bool {
    participant.roles.contains(&role) && participant.skills.contains_key(&role)
}

/// Rating for `role`, or 0 if unrated. Only for scoring and sorting once
/// eligibility is settled; never use it to decide eligibility.
pub fn skill_or_zero(participant: &Participant, role: Role) -> u32 {
    skill(participant, role).unwrap_or(0)
}
