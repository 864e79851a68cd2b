//! Balance score.
//!
//! Lower is better and 0 is ideal. The score is the absolute gap between
//! team totals, plus a charge for every member playing off their stated
//! preference, plus (optionally) a charge for preferred heroes repeated
//! within a team.

use std::collections::HashSet;

use crate::config::ScoringConfig;

use super::team::Team;

/// Scores a pair of teams with the default weights.
pub fn score(team_a: &Team, team_b: &Team) -> f64 {
    score_with(team_a, team_b, &ScoringConfig::default())
}

/// Scores a pair of teams.
pub fn score_with(team_a: &Team, team_b: &Team, config: &ScoringConfig) -> f64 {
    let gap = team_a.total_skill().abs_diff(team_b.total_skill()) as f64;

    // Summed as integers first so the result does not depend on member order.
    let off_preference_skill = off_preference_skill(team_a) + off_preference_skill(team_b);
    let preference_penalty = off_preference_skill as f64 * config.preference_penalty_rate;

    let overlap_penalty = if config.hero_overlap {
        (hero_overlaps(team_a) + hero_overlaps(team_b)) as f64 * config.hero_overlap_penalty
    } else {
        0.0
    };

    gap + preference_penalty + overlap_penalty
}

/// Strict improvement only, so equal-score swaps are never taken.
#[inline]
pub fn is_better(new_score: f64, current_score: f64) -> bool {
    new_score < current_score
}

fn off_preference_skill(team: &Team) -> u64 {
    team.members()
        .iter()
        .filter(|m| m.off_preference())
        .map(|m| u64::from(m.skill()))
        .sum()
}

/// Counts preferred heroes already claimed by an earlier teammate.
fn hero_overlaps(team: &Team) -> usize {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut repeats = 0;
    for member in team.members() {
        for hero in &member.participant.preferred_heroes {
            if !seen.insert(hero.as_str()) {
                repeats += 1;
            }
        }
    }
    repeats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::team::Member;
    use crate::roster::{Participant, Role};

    fn member(id: &str, role: Role, rating: u32) -> Member {
        Member::new(Participant::new(id, id).with_role(role, rating), role)
    }

    #[test]
    fn equal_teams_score_zero() {
        let a = Team::new(vec![member("a", Role::Tank, 2000)]);
        let b = Team::new(vec![member("b", Role::Tank, 2000)]);
        assert_eq!(score(&a, &b), 0.0);
    }

    #[test]
    fn gap_is_symmetric() {
        let a = Team::new(vec![member("a", Role::Tank, 2300)]);
        let b = Team::new(vec![member("b", Role::Tank, 2000)]);
        assert_eq!(score(&a, &b), 300.0);
        assert_eq!(score(&b, &a), 300.0);
    }

    #[test]
    fn off_preference_costs_a_tenth_of_skill() {
        let p = Participant::new("a", "a")
            .with_role(Role::Tank, 2000)
            .with_role(Role::Dps, 2000)
            .with_primary(&[Role::Dps]);
        let a = Team::new(vec![Member::new(p, Role::Tank)]);
        let b = Team::new(vec![member("b", Role::Tank, 2000)]);
        assert!((score(&a, &b) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn overlap_only_counts_when_enabled() {
        let mk = |id: &str| {
            Member::new(
                Participant::new(id, id)
                    .with_role(Role::Support, 2000)
                    .with_heroes(["Ana", "Kiriko"]),
                Role::Support,
            )
        };
        let a = Team::new(vec![mk("a"), mk("b")]);
        let b = Team::new(vec![
            member("c", Role::Support, 2000),
            member("d", Role::Support, 2000),
        ]);
        assert_eq!(score(&a, &b), 0.0);

        let config = ScoringConfig {
            hero_overlap: true,
            ..ScoringConfig::default()
        };
        assert_eq!(score_with(&a, &b, &config), 1000.0);
    }

    #[test]
    fn overlap_is_within_team_only() {
        let config = ScoringConfig {
            hero_overlap: true,
            ..ScoringConfig::default()
        };
        let mk = |id: &str| {
            Member::new(
                Participant::new(id, id)
                    .with_role(Role::Dps, 2000)
                    .with_heroes(["Tracer"]),
                Role::Dps,
            )
        };
        let a = Team::new(vec![mk("a")]);
        let b = Team::new(vec![mk("b")]);
        assert_eq!(score_with(&a, &b, &config), 0.0);
    }

    #[test]
    fn ties_are_not_better() {
        assert!(is_better(1.0, 2.0));
        assert!(!is_better(2.0, 2.0));
        assert!(!is_better(3.0, 2.0));
    }
}
