//! Greedy role-balanced assignment.
//!
//! The roster is shuffled with the match seed, which is the only source of
//! tie-breaking. For each role in turn the eligible participants are
//! ranked (stated preference first, then rating) and dealt one at a time to
//! whichever team currently has less combined rating in that role. Anyone
//! left over is offered their best still-open role on the team with the
//! lower overall total; whoever still does not fit becomes a spectator.

use std::cmp::Reverse;
use std::collections::HashSet;

use tracing::debug;

use crate::catalog::{perform_random_ban_pick, select_random_map};
use crate::config::BalanceConfig;
use crate::roster::{can_play_role, skill_or_zero, Participant, Role, RoleCapacity, ALL_ROLES};
use crate::shuffle::{seeded_shuffle, Seed};

use super::team::{MatchResult, Member, Shortfall, Team};

/// Assigns a roster with the default configuration.
pub fn assign(roster: &[Participant], seed: Seed) -> MatchResult {
    assign_with(roster, seed, &BalanceConfig::default())
}

/// Assigns a roster to two teams.
///
/// Never fails: participants who cannot be placed are returned as
/// spectators and unfilled roles are reported as [`Shortfall`] warnings.
pub fn assign_with(roster: &[Participant], seed: Seed, config: &BalanceConfig) -> MatchResult {
    let capacity = config.capacity;
    let shuffled = seeded_shuffle(roster, seed);

    let mut team_a = Team::default();
    let mut team_b = Team::default();
    let mut assigned: HashSet<&str> = HashSet::new();

    // Role pass: deal ranked candidates to the weaker side of each role.
    for role in ALL_ROLES {
        let slots = capacity.get(role);
        for participant in role_candidates(&shuffled, role, capacity.required(role)) {
            if assigned.contains(participant.id.as_str()) {
                continue;
            }
            let target = if team_a.role_skill(role) <= team_b.role_skill(role) {
                &mut team_a
            } else {
                &mut team_b
            };
            if target.role_count(role) < slots {
                *target = target.with_member(Member::new(participant.clone(), role));
                assigned.insert(participant.id.as_str());
            }
        }
    }

    // Fallback pass: anyone still unplaced takes their best open role on
    // the team with the lower overall total.
    for participant in &shuffled {
        if assigned.contains(participant.id.as_str()) {
            continue;
        }
        let Some(role) = fallback_role(participant, &team_a, &team_b, &capacity) else {
            continue;
        };
        let slots = capacity.get(role);
        let prefer_a = team_a.total_skill() <= team_b.total_skill();
        let to_a = if prefer_a {
            team_a.role_count(role) < slots
        } else {
            team_b.role_count(role) >= slots
        };
        let member = Member::new(participant.clone(), role);
        if to_a {
            team_a = team_a.with_member(member);
        } else {
            team_b = team_b.with_member(member);
        }
        assigned.insert(participant.id.as_str());
    }

    let spectators: Vec<Participant> = shuffled
        .iter()
        .filter(|p| !assigned.contains(p.id.as_str()))
        .cloned()
        .collect();

    let warnings = shortfalls(&team_a, &team_b, &capacity);
    for w in &warnings {
        debug!(role = %w.role, required = w.required, assigned = w.assigned, "role shortfall");
    }
    debug!(
        seed = seed.value(),
        team_a = team_a.total_skill(),
        team_b = team_b.total_skill(),
        spectators = spectators.len(),
        "greedy assignment"
    );

    MatchResult {
        team_a,
        team_b,
        spectators,
        warnings,
        selected_map: Some(select_random_map(seed)),
        banned_heroes: perform_random_ban_pick(seed, &config.ban_pick)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

/// Eligible participants for `role`, those who prefer it first, each group
/// by descending rating with shuffle order kept on ties, cut to `limit`.
fn role_candidates(shuffled: &[Participant], role: Role, limit: usize) -> Vec<&Participant> {
    let (mut preferred, mut others): (Vec<&Participant>, Vec<&Participant>) = shuffled
        .iter()
        .filter(|p| can_play_role(p, role))
        .partition(|p| p.prefers(role));

    preferred.sort_by_key(|p| Reverse(skill_or_zero(p, role)));
    others.sort_by_key(|p| Reverse(skill_or_zero(p, role)));

    preferred.extend(others);
    preferred.truncate(limit);
    preferred
}

/// The participant's highest-rated eligible role that still has a free slot
/// on either team. Ties keep the role listed first.
fn fallback_role(
    participant: &Participant,
    team_a: &Team,
    team_b: &Team,
    capacity: &RoleCapacity,
) -> Option<Role> {
    let mut best: Option<Role> = None;
    for &role in &participant.roles {
        if !can_play_role(participant, role) {
            continue;
        }
        let slots = capacity.get(role);
        if team_a.role_count(role) >= slots && team_b.role_count(role) >= slots {
            continue;
        }
        match best {
            Some(b) if skill_or_zero(participant, role) <= skill_or_zero(participant, b) => {}
            _ => best = Some(role),
        }
    }
    best
}

/// One warning per role with fewer members than its two-team requirement.
fn shortfalls(team_a: &Team, team_b: &Team, capacity: &RoleCapacity) -> Vec<Shortfall> {
    ALL_ROLES
        .iter()
        .filter_map(|&role| {
            let assigned = team_a.role_count(role) + team_b.role_count(role);
            let required = capacity.required(role);
            (assigned < required).then_some(Shortfall {
                role,
                required,
                assigned,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solo(id: &str, role: Role, rating: u32) -> Participant {
        Participant::new(id, id).with_role(role, rating)
    }

    fn ids(team: &Team) -> Vec<&str> {
        team.members().iter().map(|m| m.id()).collect()
    }

    #[test]
    fn empty_roster_warns_every_role() {
        let result = assign(&[], Seed::from(1u32));
        assert!(result.team_a.is_empty());
        assert!(result.team_b.is_empty());
        assert!(result.spectators.is_empty());
        assert_eq!(result.warnings.len(), 3);
        assert_eq!(result.warnings[0].role, Role::Tank);
        assert_eq!(result.warnings[0].assigned, 0);
        assert_eq!(result.warnings[1].required, 4);
    }

    #[test]
    fn preferred_candidates_rank_first() {
        let roster = vec![
            solo("high", Role::Dps, 3000),
            solo("fan", Role::Dps, 1000).with_primary(&[Role::Dps]),
            solo("mid", Role::Dps, 2000),
        ];
        let ranked: Vec<&str> = role_candidates(&roster, Role::Dps, 4)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ranked, vec!["fan", "high", "mid"]);
    }

    #[test]
    fn candidates_are_cut_to_both_teams_slots() {
        let roster: Vec<Participant> = (0..5)
            .map(|i| solo(&format!("t{}", i), Role::Tank, 2000 + i))
            .collect();
        let ranked = role_candidates(&roster, Role::Tank, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].id, "t4");
        assert_eq!(ranked[1].id, "t3");
    }

    #[test]
    fn equal_ratings_keep_shuffle_order() {
        let roster = vec![
            solo("x", Role::Support, 2000),
            solo("y", Role::Support, 2000),
            solo("z", Role::Support, 2000),
        ];
        let ranked: Vec<&str> = role_candidates(&roster, Role::Support, 4)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ranked, vec!["x", "y", "z"]);
    }

    #[test]
    fn tie_goes_to_team_a() {
        let result = assign(&[solo("only", Role::Tank, 2500)], Seed::from(9u32));
        assert_eq!(ids(&result.team_a), vec!["only"]);
        assert!(result.team_b.is_empty());
    }

    #[test]
    fn capacity_skip_is_recovered_by_fallback() {
        let roster = vec![
            solo("d1", Role::Dps, 2000),
            solo("d2", Role::Dps, 1000),
            solo("d3", Role::Dps, 900),
            solo("d4", Role::Dps, 800),
        ];
        let result = assign(&roster, Seed::from(3u32));
        // d1 -> A, d2 -> B, d3 -> B (1000 < 2000), d4 targets full B and
        // falls through to the fallback, which sends it to A.
        assert_eq!(ids(&result.team_a), vec!["d1", "d4"]);
        assert_eq!(ids(&result.team_b), vec!["d2", "d3"]);
        assert!(result.spectators.is_empty());
    }

    #[test]
    fn unrated_and_roleless_participants_spectate() {
        let roster = vec![
            solo("tank", Role::Tank, 2000),
            Participant::new("unrated", "unrated").with_unrated_role(Role::Dps),
            Participant::new("nobody", "nobody"),
        ];
        let result = assign(&roster, Seed::from(5u32));
        assert_eq!(result.assigned_count(), 1);
        let mut spectators: Vec<&str> = result.spectators.iter().map(|p| p.id.as_str()).collect();
        spectators.sort();
        assert_eq!(spectators, vec!["nobody", "unrated"]);
    }

    #[test]
    fn overflow_players_spectate() {
        let roster: Vec<Participant> = (0..4)
            .map(|i| solo(&format!("t{}", i), Role::Tank, 2000 + i * 10))
            .collect();
        let result = assign(&roster, Seed::from(11u32));
        assert_eq!(result.team_a.role_count(Role::Tank), 1);
        assert_eq!(result.team_b.role_count(Role::Tank), 1);
        assert_eq!(result.spectators.len(), 2);
        assert!(result.team_a.contains("t3"));
        assert!(result.team_b.contains("t2"));
    }

    #[test]
    fn fallback_role_takes_best_open_rating() {
        let capacity = RoleCapacity::default();
        let flex = Participant::new("flex", "flex")
            .with_role(Role::Tank, 1500)
            .with_role(Role::Support, 2600)
            .with_role(Role::Dps, 2600);
        let empty = Team::default();
        assert_eq!(
            fallback_role(&flex, &empty, &empty, &capacity),
            Some(Role::Support)
        );

        let full_support = Team::new(vec![
            Member::new(solo("s1", Role::Support, 1), Role::Support),
            Member::new(solo("s2", Role::Support, 1), Role::Support),
        ]);
        assert_eq!(
            fallback_role(&flex, &full_support, &full_support, &capacity),
            Some(Role::Dps)
        );
    }

    #[test]
    fn fallback_role_ignores_unrated_roles() {
        let p = Participant::new("p", "p")
            .with_unrated_role(Role::Tank)
            .with_role(Role::Dps, 100);
        let empty = Team::default();
        assert_eq!(
            fallback_role(&p, &empty, &empty, &RoleCapacity::default()),
            Some(Role::Dps)
        );
    }

    #[test]
    fn roster_is_not_mutated() {
        let roster = vec![solo("a", Role::Tank, 2000), solo("b", Role::Tank, 1900)];
        let before = roster.clone();
        let _ = assign(&roster, Seed::from(2u32));
        assert_eq!(roster, before);
    }

    #[test]
    fn cosmetics_follow_config() {
        let mut config = BalanceConfig::default();
        let result = assign_with(&[], Seed::from(4u32), &config);
        assert_eq!(result.selected_map, Some(select_random_map(Seed::from(4u32))));
        assert!(result.banned_heroes.is_empty());

        config.ban_pick.enabled = true;
        let result = assign_with(&[], Seed::from(4u32), &config);
        assert_eq!(result.banned_heroes.len(), 3);
    }
}
