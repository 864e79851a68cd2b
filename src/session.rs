//! Session state management.
//!
//! Holds the roster, seed and options accumulated between commands, and
//! runs the balancer for the `go` command.

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{info, warn};

use crate::balance::{balance, score_with, sweep};
use crate::config::{BalanceConfig, MAX_ROLE_SLOTS, MAX_SWAP_ITERATIONS, MAX_SWEEP_SEEDS};
use crate::protocol::notation::{parse_participant, NotationError};
use crate::protocol::parser::GoParams;
use crate::protocol::report::write_result;
use crate::protocol::roster::{load_roster, RosterError};
use crate::roster::{Participant, Role};
use crate::shuffle::Seed;

/// Errors reported by session commands.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid player record: {0}")]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("duplicate participant id '{0}'")]
    DuplicateId(String),
}

/// Holds the mutable state of a session between commands.
pub struct Session {
    pub roster: Vec<Participant>,
    pub seed: Option<Seed>,
    pub options: HashMap<String, String>,
    base_config: BalanceConfig,
    rng: SmallRng,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    /// Creates a session with an empty roster and default configuration.
    pub fn new() -> Self {
        Session::with_config(BalanceConfig::default())
    }

    /// Creates a session whose options start from `config`.
    pub fn with_config(config: BalanceConfig) -> Self {
        Session {
            roster: Vec::new(),
            seed: None,
            options: HashMap::new(),
            base_config: config,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Clears the roster and seed for a new match. Options are kept.
    pub fn new_match(&mut self) {
        self.roster.clear();
        self.seed = None;
    }

    /// Adds one participant from its notation.
    pub fn add_player(&mut self, record: &str) -> Result<(), SessionError> {
        let participant = parse_participant(record)?;
        if self.roster.iter().any(|p| p.id == participant.id) {
            return Err(SessionError::DuplicateId(participant.id));
        }
        self.roster.push(participant);
        Ok(())
    }

    /// Replaces the roster with the contents of a JSON file.
    pub fn load(&mut self, path: &Path) -> Result<(), SessionError> {
        self.roster = load_roster(path)?;
        info!(players = self.roster.len(), path = %path.display(), "roster loaded");
        Ok(())
    }

    pub fn set_seed(&mut self, seed: Seed) {
        self.seed = Some(seed);
    }

    /// Sets an option. A missing value is stored as an empty string, which
    /// check options read as `true`.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Builds the balancer configuration from the base config and options.
    pub fn config(&self) -> BalanceConfig {
        let mut config = self.base_config.clone();
        if let Some(n) = self.usize_option("MaxSwapIterations") {
            config.max_swap_iterations = n.clamp(1, MAX_SWAP_ITERATIONS);
        }
        if let Some(b) = self.bool_option("Improve") {
            config.improve = b;
        }
        if let Some(b) = self.bool_option("HeroOverlap") {
            config.scoring.hero_overlap = b;
        }
        if let Some(b) = self.bool_option("BanPick") {
            config.ban_pick.enabled = b;
        }
        for (name, role) in [
            ("TankSlots", Role::Tank),
            ("DpsSlots", Role::Dps),
            ("SupportSlots", Role::Support),
        ] {
            if let Some(n) = self.usize_option(name) {
                if n > MAX_ROLE_SLOTS {
                    warn!(option = name, value = n, max = MAX_ROLE_SLOTS, "clamping role slots");
                }
                config.capacity.set(role, n.min(MAX_ROLE_SLOTS));
            }
        }
        config
    }

    fn usize_option(&self, name: &str) -> Option<usize> {
        let raw = self.options.get(name)?;
        match raw.parse::<usize>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(option = name, value = %raw, "ignoring non-numeric option");
                None
            }
        }
    }

    fn bool_option(&self, name: &str) -> Option<bool> {
        let raw = self.options.get(name)?;
        match raw.to_ascii_lowercase().as_str() {
            "" | "true" | "1" | "on" | "yes" => Some(true),
            "false" | "0" | "off" | "no" => Some(false),
            _ => {
                warn!(option = name, value = %raw, "ignoring non-boolean option");
                None
            }
        }
    }

    /// Handles the handshake: writes id, options, protocol_version and hellook.
    pub fn handle_hello<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let defaults = &self.base_config;
        writeln!(out, "id name scrimbal")?;
        writeln!(out, "id author scrimbal")?;
        writeln!(
            out,
            "option name MaxSwapIterations type spin default {} min 1 max {}",
            defaults.max_swap_iterations, MAX_SWAP_ITERATIONS
        )?;
        writeln!(out, "option name Improve type check default {}", defaults.improve)?;
        writeln!(
            out,
            "option name HeroOverlap type check default {}",
            defaults.scoring.hero_overlap
        )?;
        writeln!(
            out,
            "option name BanPick type check default {}",
            defaults.ban_pick.enabled
        )?;
        writeln!(
            out,
            "option name Seeds type spin default 1 min 1 max {}",
            MAX_SWEEP_SEEDS
        )?;
        for (name, role) in [
            ("TankSlots", Role::Tank),
            ("DpsSlots", Role::Dps),
            ("SupportSlots", Role::Support),
        ] {
            writeln!(
                out,
                "option name {} type spin default {} min 0 max {}",
                name,
                defaults.capacity.get(role),
                MAX_ROLE_SLOTS
            )?;
        }
        writeln!(out, "protocol_version 1")?;
        writeln!(out, "hellook")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles the `go` command. Draws a random seed if none was set, so
    /// every run reports the seed needed to reproduce it.
    pub fn handle_go<W: Write>(&mut self, params: &GoParams, out: &mut W) -> io::Result<()> {
        let seed = match self.seed {
            Some(s) => s,
            None => Seed::from(self.rng.gen::<u32>()),
        };

        let mut config = self.config();
        if params.no_improve {
            config.improve = false;
        }
        let count = params
            .seeds
            .or_else(|| self.usize_option("Seeds"))
            .unwrap_or(1)
            .clamp(1, MAX_SWEEP_SEEDS);

        let (seed, result, score) = if count > 1 {
            let outcome = sweep(&self.roster, seed, count, &config);
            (outcome.seed, outcome.result, outcome.score)
        } else {
            let result = balance(&self.roster, seed, &config);
            let score = score_with(&result.team_a, &result.team_b, &config.scoring);
            (seed, result, score)
        };

        writeln!(
            out,
            "info seed {} players {} seeds {}",
            seed,
            self.roster.len(),
            count
        )?;
        write_result(out, &result, score)?;
        writeln!(out, "matchok")?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYERS: [&str; 10] = [
        "t1|Tank One|T:2600",
        "t2|Tank Two|T:2400",
        "d1|Dps One|D:2500",
        "d2|Dps Two|D:2300",
        "d3|Dps Three|D:2200",
        "d4|Dps Four|D:2000",
        "s1|Sup One|S:2450",
        "s2|Sup Two|S:2350",
        "s3|Sup Three|S:2150",
        "s4|Sup Four|S:1950",
    ];

    fn full_session() -> Session {
        let mut session = Session::new();
        for p in PLAYERS {
            session.add_player(p).unwrap();
        }
        session.set_seed(Seed::from(42u32));
        session
    }

    fn go_lines(session: &mut Session, params: GoParams) -> Vec<String> {
        let mut buf = Vec::new();
        session.handle_go(&params, &mut buf).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();
        assert!(session.roster.is_empty());
        assert!(session.seed.is_none());
        assert!(session.options.is_empty());
    }

    #[test]
    fn new_match_keeps_options() {
        let mut session = full_session();
        session.set_option("Improve".to_string(), Some("false".to_string()));
        session.new_match();
        assert!(session.roster.is_empty());
        assert!(session.seed.is_none());
        assert!(!session.config().improve);
    }

    #[test]
    fn duplicate_player_rejected() {
        let mut session = Session::new();
        session.add_player("a|A|T:1").unwrap();
        let err = session.add_player("a|Again|D:1").unwrap_err();
        assert!(matches!(err, SessionError::DuplicateId(id) if id == "a"));
        assert_eq!(session.roster.len(), 1);
    }

    #[test]
    fn malformed_player_rejected() {
        let mut session = Session::new();
        assert!(matches!(
            session.add_player("a|A|Q:1"),
            Err(SessionError::Notation(_))
        ));
    }

    #[test]
    fn options_map_onto_config() {
        let mut session = Session::new();
        session.set_option("MaxSwapIterations".to_string(), Some("7".to_string()));
        session.set_option("HeroOverlap".to_string(), None);
        session.set_option("TankSlots".to_string(), Some("2".to_string()));
        session.set_option("BanPick".to_string(), Some("on".to_string()));
        session.set_option("Improve".to_string(), Some("maybe".to_string()));
        let config = session.config();
        assert_eq!(config.max_swap_iterations, 7);
        assert!(config.scoring.hero_overlap);
        assert_eq!(config.capacity.get(Role::Tank), 2);
        assert!(config.ban_pick.enabled);
        assert!(config.improve);
    }

    #[test]
    fn oversized_options_are_clamped_to_advertised_range() {
        let mut session = full_session();
        session.set_option("TankSlots".to_string(), Some(usize::MAX.to_string()));
        session.set_option("MaxSwapIterations".to_string(), Some("999999".to_string()));
        let config = session.config();
        assert_eq!(config.capacity.get(Role::Tank), MAX_ROLE_SLOTS);
        assert_eq!(config.max_swap_iterations, MAX_SWAP_ITERATIONS);
        assert!(config.validate().is_ok());

        let lines = go_lines(&mut session, GoParams::default());
        assert_eq!(lines.last().map(String::as_str), Some("matchok"));
        assert!(lines
            .iter()
            .any(|l| l == "warning TANK role is short of players (required 10, got 2)"));
    }

    #[test]
    fn go_seed_count_is_capped() {
        let mut session = Session::new();
        session.set_seed(Seed::from(1u32));
        let lines = go_lines(
            &mut session,
            GoParams {
                seeds: Some(1_000_000),
                no_improve: true,
            },
        );
        assert_eq!(lines[0], format!("info seed 1 players 0 seeds {}", MAX_SWEEP_SEEDS));
    }

    #[test]
    fn hello_ends_with_hellook() {
        let session = Session::new();
        let mut buf = Vec::new();
        session.handle_hello(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("id name scrimbal\n"));
        assert!(text.contains("option name MaxSwapIterations type spin default 50"));
        assert!(text.ends_with("protocol_version 1\nhellook\n"));
    }

    #[test]
    fn go_places_full_roster() {
        let mut session = full_session();
        let lines = go_lines(&mut session, GoParams::default());
        assert_eq!(lines[0], "info seed 42 players 10 seeds 1");
        assert_eq!(lines.last().map(String::as_str), Some("matchok"));
        assert_eq!(lines.iter().filter(|l| l.starts_with("member ")).count(), 10);
        assert!(!lines.iter().any(|l| l.starts_with("spectator ")));
        assert!(!lines.iter().any(|l| l.starts_with("warning ")));
    }

    #[test]
    fn go_is_reproducible_with_seed() {
        let mut session = full_session();
        let first = go_lines(&mut session, GoParams::default());
        let second = go_lines(&mut session, GoParams::default());
        assert_eq!(first, second);
    }

    #[test]
    fn go_with_empty_roster_warns() {
        let mut session = Session::new();
        session.set_seed(Seed::from(1u32));
        let lines = go_lines(&mut session, GoParams::default());
        assert_eq!(lines.iter().filter(|l| l.starts_with("warning ")).count(), 3);
    }

    #[test]
    fn go_sweep_reports_count() {
        let mut session = full_session();
        let lines = go_lines(
            &mut session,
            GoParams {
                seeds: Some(4),
                no_improve: false,
            },
        );
        assert!(lines[0].ends_with("players 10 seeds 4"));
    }
}
