//! Hero catalog and seeded random bans.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::config::BanPickSettings;
use crate::roster::{Role, ALL_ROLES};
use crate::shuffle::{seeded_shuffle, Seed};

const TANK_HEROES: &[&str] = &[
    "D.Va",
    "Doomfist",
    "Hazard",
    "Junker Queen",
    "Mauga",
    "Orisa",
    "Ramattra",
    "Reinhardt",
    "Roadhog",
    "Sigma",
    "Winston",
    "Wrecking Ball",
    "Zarya",
];

const DPS_HEROES: &[&str] = &[
    "Ashe",
    "Bastion",
    "Cassidy",
    "Echo",
    "Freja",
    "Genji",
    "Hanzo",
    "Junkrat",
    "Mei",
    "Pharah",
    "Reaper",
    "Sojourn",
    "Soldier: 76",
    "Sombra",
    "Symmetra",
    "Torbjorn",
    "Tracer",
    "Vendetta",
    "Venture",
    "Widowmaker",
];

const SUPPORT_HEROES: &[&str] = &[
    "Ana",
    "Baptiste",
    "Brigitte",
    "Illari",
    "Juno",
    "Kiriko",
    "Lifeweaver",
    "Lucio",
    "Mercy",
    "Moira",
    "Wuyang",
    "Zenyatta",
];

/// Hero pools indexed by [`Role::index`].
pub const HEROES: [&[&str]; 3] = [TANK_HEROES, DPS_HEROES, SUPPORT_HEROES];

/// Heroes available to `role`.
pub fn heroes_for(role: Role) -> &'static [&'static str] {
    HEROES[role.index()]
}

/// Bans a seeded selection of heroes. Returns nothing when bans are disabled.
///
/// The number of bans is the smallest of three per-role slots, four
/// per-position slots and the whole hero pool.
pub fn perform_random_ban_pick(seed: Seed, settings: &BanPickSettings) -> Vec<&'static str> {
    if !settings.enabled {
        return Vec::new();
    }

    let all: Vec<&'static str> = HEROES.iter().flat_map(|pool| pool.iter().copied()).collect();
    let total_bans = (settings.max_bans_per_role * 3)
        .min(settings.max_bans_per_position * 4)
        .min(all.len());

    let mut banned = seeded_shuffle(&all, seed);
    banned.truncate(total_bans);
    debug!(seed = seed.value(), bans = total_bans, "random ban-pick");
    banned
}

/// Groups banned heroes by role. Names that are not in the catalog are dropped.
pub fn categorize_banned_heroes<S: AsRef<str>>(banned: &[S]) -> BTreeMap<Role, Vec<String>> {
    let mut by_role: BTreeMap<Role, Vec<String>> =
        ALL_ROLES.iter().map(|&r| (r, Vec::new())).collect();
    for hero in banned {
        let hero: &str = hero.as_ref();
        if let Some(role) = ALL_ROLES.iter().find(|r| heroes_for(**r).contains(&hero)) {
            by_role.entry(*role).or_default().push(hero.to_string());
        }
    }
    by_role
}

/// Fraction of the role's hero pool that is banned, in `[0, 1]`.
pub fn ban_impact<S: AsRef<str>>(banned: &[S], role: Role) -> f64 {
    let pool = heroes_for(role);
    let hit = banned
        .iter()
        .filter(|h| {
            let name: &str = h.as_ref();
            pool.contains(&name)
        })
        .count();
    hit as f64 / pool.len() as f64
}

/// Per-role totals for a ban list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BanSummary {
    pub total_bans: usize,
    pub by_role: BTreeMap<Role, usize>,
    pub impact: BTreeMap<Role, f64>,
}

pub fn summarize_ban_pick<S: AsRef<str>>(banned: &[S]) -> BanSummary {
    let categorized = categorize_banned_heroes(banned);
    BanSummary {
        total_bans: banned.len(),
        by_role: categorized.iter().map(|(r, v)| (*r, v.len())).collect(),
        impact: ALL_ROLES
            .iter()
            .map(|&r| (r, ban_impact(banned, r)))
            .collect(),
    }
}
