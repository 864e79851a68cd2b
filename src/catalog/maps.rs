//! Map catalog and seeded map selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shuffle::{seeded_shuffle, Seed};

/// Game mode of a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MapType {
    Assault,
    Escort,
    Hybrid,
    Control,
    Push,
    Flashpoint,
}

impl MapType {
    pub const fn name(self) -> &'static str {
        match self {
            MapType::Assault => "ASSAULT",
            MapType::Escort => "ESCORT",
            MapType::Hybrid => "HYBRID",
            MapType::Control => "CONTROL",
            MapType::Push => "PUSH",
            MapType::Flashpoint => "FLASHPOINT",
        }
    }

    /// One-line description of the mode's objective.
    pub const fn description(self) -> &'static str {
        match self {
            MapType::Assault => "Attackers capture two points in sequence",
            MapType::Escort => "Attackers escort a payload to its destination",
            MapType::Hybrid => "Attackers capture a point, then escort a payload",
            MapType::Control => "Both teams fight over a single central point",
            MapType::Push => "Both teams push a robot toward the enemy base",
            MapType::Flashpoint => "Teams fight over points that unlock one after another",
        }
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playable map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameMap {
    pub name: &'static str,
    pub map_type: MapType,
    pub description: &'static str,
}

const fn map(name: &'static str, map_type: MapType, description: &'static str) -> GameMap {
    GameMap {
        name,
        map_type,
        description,
    }
}

/// Every map in the rotation.
pub const MAPS: [GameMap; 27] = [
    map("Hanamura", MapType::Assault, "Traditional Japanese village"),
    map("Temple of Anubis", MapType::Assault, "Ancient Egyptian temple"),
    map("Volskaya Industries", MapType::Assault, "Russian mech factory"),
    map("Paris", MapType::Assault, "Streets of Montmartre"),
    map("Horizon Lunar Colony", MapType::Assault, "Research base on the moon"),
    map("Dorado", MapType::Escort, "Mexican coastal town"),
    map("Havana", MapType::Escort, "Historic Cuban city"),
    map("Rialto", MapType::Escort, "Venetian canals"),
    map("Route 66", MapType::Escort, "American desert highway"),
    map("Watchpoint: Gibraltar", MapType::Escort, "Strategic rock outpost"),
    map("Junkertown", MapType::Escort, "Australian scrap fortress"),
    map("Hollywood", MapType::Hybrid, "American film studios"),
    map("Numbani", MapType::Hybrid, "Nigerian city of the future"),
    map("Blizzard World", MapType::Hybrid, "Theme park"),
    map("Eichenwalde", MapType::Hybrid, "German medieval castle"),
    map("King's Row", MapType::Hybrid, "London streets"),
    map("Midtown", MapType::Hybrid, "New York neighbourhood"),
    map("Busan", MapType::Control, "Korean harbour city"),
    map("Ilios", MapType::Control, "Greek island"),
    map("Lijiang Tower", MapType::Control, "Chinese tech tower"),
    map("Nepal", MapType::Control, "Himalayan monastery"),
    map("Oasis", MapType::Control, "Arabian city of the future"),
    map("Colosseo", MapType::Push, "Ancient Roman arena"),
    map("New Queen Street", MapType::Push, "Modern Toronto street"),
    map("Esperanca", MapType::Push, "Portuguese town"),
    map("Suravasa", MapType::Flashpoint, "Indian palace grounds"),
    map("New Junk City", MapType::Flashpoint, "Rebuilt Junkertown"),
];

/// Picks the first map of the seeded shuffle of [`MAPS`].
pub fn select_random_map(seed: Seed) -> GameMap {
    seeded_shuffle(&MAPS, seed)[0]
}

/// All maps of one mode, in catalog order.
pub fn maps_by_type(map_type: MapType) -> Vec<GameMap> {
    MAPS.iter()
        .filter(|m| m.map_type == map_type)
        .copied()
        .collect()
}
