//! Roster types.
//!
//! Contains the fixed role set and capacity table, participant records as
//! supplied by the caller, the skill accessors that decide eligibility, and
//! the rating-to-tier ladder.

pub mod participant;
pub mod role;
pub mod skill;
pub mod tier;

pub use participant::Participant;
pub use role::{Role, RoleCapacity, ALL_ROLES};
pub use skill::{can_play_role, skill, skill_or_zero};
pub use tier::{tier_for_rating, Tier, TIERS};
