//! Team balancing.
//!
//! Greedy role-balanced placement followed by same-role swap search, scored
//! by team skill gap plus preference penalties. All entry points are pure:
//! the roster is never mutated and no state survives between calls.

pub mod assign;
pub mod improve;
pub mod score;
pub mod sweep;
pub mod team;

pub use assign::{assign, assign_with};
pub use improve::{improve, improve_report, improve_with, ImproveStats};
pub use score::{is_better, score, score_with};
pub use sweep::{sweep, SweepOutcome};
pub use team::{MatchResult, Member, Shortfall, Team};

use crate::config::BalanceConfig;
use crate::roster::Participant;
use crate::shuffle::Seed;

/// Greedy assignment followed, when `config.improve` is set, by the swap
/// search. This is the full pipeline for one seed.
pub fn balance(roster: &[Participant], seed: Seed, config: &BalanceConfig) -> MatchResult {
    let result = assign_with(roster, seed, config);
    if config.improve {
        improve_with(result, config)
    } else {
        result
    }
}
