//! Text report of a match result.
//!
//! One fact per line, first token naming the kind of line, so both people
//! and scripts can read it:
//!
//! ```text
//! score 120.0
//! team a 11200
//! member a TANK 2600 Platinum 4 | p1 Mina
//! spectator p9 Jo
//! warning TANK role is short of players (required 2, got 1)
//! map Busan CONTROL
//! ban Ana
//! ```

use std::io::{self, Write};

use crate::balance::{MatchResult, Team};
use crate::roster::tier_for_rating;

/// Renders a result as report lines.
pub fn format_result(result: &MatchResult, score: f64) -> Vec<String> {
    let mut lines = vec![format!("score {:.1}", score)];
    team_lines(&mut lines, 'a', &result.team_a);
    team_lines(&mut lines, 'b', &result.team_b);
    for p in &result.spectators {
        lines.push(format!("spectator {} {}", p.id, p.name));
    }
    for w in &result.warnings {
        lines.push(format!("warning {}", w));
    }
    if let Some(map) = &result.selected_map {
        lines.push(format!("map {} {}", map.name, map.map_type));
    }
    for hero in &result.banned_heroes {
        lines.push(format!("ban {}", hero));
    }
    lines
}

/// Writes report lines to `out`.
pub fn write_result<W: Write>(out: &mut W, result: &MatchResult, score: f64) -> io::Result<()> {
    for line in format_result(result, score) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn team_lines(lines: &mut Vec<String>, side: char, team: &Team) {
    lines.push(format!("team {} {}", side, team.total_skill()));
    for m in team.members() {
        let skill = m.skill();
        lines.push(format!(
            "member {} {} {} {} | {} {}",
            side,
            m.assigned_role,
            skill,
            tier_for_rating(skill),
            m.participant.id,
            m.participant.name
        ));
    }
}
