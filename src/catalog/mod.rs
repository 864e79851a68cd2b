//! Cosmetic match catalogs.
//!
//! Map selection and random hero bans. Both are drawn from the same seeded
//! shuffle as team assignment but have no effect on balance.

pub mod heroes;
pub mod maps;

pub use heroes::{
    ban_impact, categorize_banned_heroes, perform_random_ban_pick, summarize_ban_pick, BanSummary,
    HEROES,
};
pub use maps::{maps_by_type, select_random_map, GameMap, MapType, MAPS};
