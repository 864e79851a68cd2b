//! Same-role swap local search.
//!
//! Repeatedly tries exchanging two members of the same role between the
//! teams, keeping a swap as soon as it strictly lowers the score. Stops
//! after an iteration with no improving swap, or once the iteration cap in
//! [`BalanceConfig::max_swap_iterations`] is reached.

use tracing::debug;

use crate::config::BalanceConfig;
use crate::roster::{Role, ALL_ROLES};

use super::score::{is_better, score_with};
use super::team::{MatchResult, Team};

/// Counters from one improver run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImproveStats {
    pub swaps: usize,
    pub iterations: usize,
    pub initial_score: f64,
    pub final_score: f64,
}

/// Improves a result with the default configuration.
pub fn improve(result: MatchResult) -> MatchResult {
    improve_with(result, &BalanceConfig::default())
}

pub fn improve_with(result: MatchResult, config: &BalanceConfig) -> MatchResult {
    improve_report(result, config).0
}

/// Runs the swap search and returns the improved result with its counters.
///
/// Only team sides change: assigned roles, spectators, warnings and the
/// cosmetic selections pass through as they are.
pub fn improve_report(mut result: MatchResult, config: &BalanceConfig) -> (MatchResult, ImproveStats) {
    let scoring = &config.scoring;
    let mut current = score_with(&result.team_a, &result.team_b, scoring);
    let mut stats = ImproveStats {
        initial_score: current,
        ..ImproveStats::default()
    };

    for _ in 0..config.max_swap_iterations {
        stats.iterations += 1;
        let mut improved = false;

        for role in ALL_ROLES {
            // Slot indices stay valid: a swap replaces members in place
            // with another member of the same role.
            let slots_a = role_slots(&result.team_a, role);
            let slots_b = role_slots(&result.team_b, role);

            for &i in &slots_a {
                for &j in &slots_b {
                    let (team_a, team_b) = swapped(&result.team_a, &result.team_b, i, j);
                    let candidate = score_with(&team_a, &team_b, scoring);
                    if is_better(candidate, current) {
                        debug!(
                            role = %role,
                            from_a = result.team_a.members()[i].id(),
                            from_b = result.team_b.members()[j].id(),
                            score = candidate,
                            "swap improved balance"
                        );
                        result.team_a = team_a;
                        result.team_b = team_b;
                        current = candidate;
                        improved = true;
                        stats.swaps += 1;
                    }
                }
            }
        }

        if !improved {
            break;
        }
    }

    stats.final_score = current;
    (result, stats)
}

fn role_slots(team: &Team, role: Role) -> Vec<usize> {
    team.members()
        .iter()
        .enumerate()
        .filter(|(_, m)| m.assigned_role == role)
        .map(|(i, _)| i)
        .collect()
}

/// New teams with member `i` of `a` and member `j` of `b` exchanged.
fn swapped(a: &Team, b: &Team, i: usize, j: usize) -> (Team, Team) {
    let from_a = a.members()[i].clone();
    let from_b = b.members()[j].clone();
    (a.with_replaced(i, from_b), b.with_replaced(j, from_a))
}
