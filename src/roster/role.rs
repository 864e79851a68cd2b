//! Roles and per-team role capacity.
//!
//! There are exactly three roles. Their declaration order (Tank, Dps,
//! Support) is the processing order used by the assignor, the improver and
//! the shortfall warnings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A role a participant can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Tank,
    Dps,
    Support,
}

/// All roles in processing order.
pub const ALL_ROLES: [Role; 3] = [Role::Tank, Role::Dps, Role::Support];

impl Role {
    /// Returns the canonical uppercase name used in reports and JSON.
    pub const fn name(self) -> &'static str {
        match self {
            Role::Tank => "TANK",
            Role::Dps => "DPS",
            Role::Support => "SUPPORT",
        }
    }

    /// Returns the single-character abbreviation used in participant notation.
    pub const fn abbr(self) -> char {
        match self {
            Role::Tank => 'T',
            Role::Dps => 'D',
            Role::Support => 'S',
        }
    }

    /// Parses a role from its full name or single-character abbreviation.
    /// Matching is case-insensitive.
    pub fn from_name(s: &str) -> Option<Role> {
        match s.to_ascii_uppercase().as_str() {
            "TANK" | "T" => Some(Role::Tank),
            "DPS" | "D" | "DAMAGE" => Some(Role::Dps),
            "SUPPORT" | "S" => Some(Role::Support),
            _ => None,
        }
    }

    /// Index into per-role arrays.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of slots per role on a single team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleCapacity {
    pub tank: usize,
    pub dps: usize,
    pub support: usize,
}

impl Default for RoleCapacity {
    fn default() -> Self {
        RoleCapacity {
            tank: 1,
            dps: 2,
            support: 2,
        }
    }
}

impl RoleCapacity {
    /// Slots for `role` on one team.
    pub const fn get(&self, role: Role) -> usize {
        match role {
            Role::Tank => self.tank,
            Role::Dps => self.dps,
            Role::Support => self.support,
        }
    }

    /// Sets the slots for `role` on one team.
    pub fn set(&mut self, role: Role, slots: usize) {
        match role {
            Role::Tank => self.tank = slots,
            Role::Dps => self.dps = slots,
            Role::Support => self.support = slots,
        }
    }

    /// Slots for `role` across both teams.
    pub const fn required(&self, role: Role) -> usize {
        self.get(role).saturating_mul(2)
    }

    /// Players per team.
    pub const fn team_size(&self) -> usize {
        self.tank.saturating_add(self.dps).saturating_add(self.support)
    }
}
