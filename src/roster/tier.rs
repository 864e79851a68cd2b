//! Competitive ladder tiers.
//!
//! Maps a raw rating onto the nearest named tier for display.

/// A named tier and its reference rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub name: &'static str,
    pub value: u32,
}

const fn tier(name: &'static str, value: u32) -> Tier {
    Tier { name, value }
}

/// The full ladder, lowest first.
pub const TIERS: [Tier; 40] = [
    tier("Bronze 5", 1100),
    tier("Bronze 4", 1200),
    tier("Bronze 3", 1300),
    tier("Bronze 2", 1400),
    tier("Bronze 1", 1499),
    tier("Silver 5", 1500),
    tier("Silver 4", 1600),
    tier("Silver 3", 1700),
    tier("Silver 2", 1800),
    tier("Silver 1", 1999),
    tier("Gold 5", 2000),
    tier("Gold 4", 2100),
    tier("Gold 3", 2200),
    tier("Gold 2", 2300),
    tier("Gold 1", 2499),
    tier("Platinum 5", 2500),
    tier("Platinum 4", 2600),
    tier("Platinum 3", 2700),
    tier("Platinum 2", 2800),
    tier("Platinum 1", 2999),
    tier("Diamond 5", 3000),
    tier("Diamond 4", 3100),
    tier("Diamond 3", 3200),
    tier("Diamond 2", 3300),
    tier("Diamond 1", 3499),
    tier("Master 5", 3500),
    tier("Master 4", 3600),
    tier("Master 3", 3700),
    tier("Master 2", 3800),
    tier("Master 1", 3999),
    tier("Grandmaster 5", 4000),
    tier("Grandmaster 4", 4100),
    tier("Grandmaster 3", 4200),
    tier("Grandmaster 2", 4300),
    tier("Grandmaster 1", 4500),
    tier("Champion 5", 4600),
    tier("Champion 4", 4700),
    tier("Champion 3", 4800),
    tier("Champion 2", 4900),
    tier("Champion 1", 5000),
];

/// Returns the name of the tier whose reference rating is closest to `sr`.
/// On a tie the lower tier wins.
pub fn tier_for_rating(sr: u32) -> &'static str {
    let mut closest = TIERS[0];
    let mut min_diff = sr.abs_diff(closest.value);
    for t in TIERS.iter().skip(1) {
        let diff = sr.abs_diff(t.value);
        if diff < min_diff {
            min_diff = diff;
            closest = *t;
        }
    }
    closest.name
}
