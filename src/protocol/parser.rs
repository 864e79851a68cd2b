//! Session command parser.
//!
//! Parses incoming session protocol lines into structured `Command`
//! variants that the main loop can dispatch on.

use crate::shuffle::Seed;

/// Constraints passed with the `go` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Number of consecutive seeds to sweep; overrides the `Seeds` option.
    pub seeds: Option<usize>,
    /// Skip the swap improver for this run.
    pub no_improve: bool,
}

/// A parsed client-to-balancer command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Protocol handshake.
    Hello,

    /// Synchronization ping; must be answered with `readyok`.
    IsReady,

    /// Set an option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Clear the roster and seed.
    NewMatch,

    /// Add a participant in one-line notation.
    Player { record: String },

    /// Load a JSON roster file, replacing the current roster.
    Load { path: String },

    /// Set the match seed.
    Seed { seed: Seed },

    /// Balance the current roster.
    Go(GoParams),

    /// Terminate the process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "hello" => Some(Command::Hello),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newmatch" => Some(Command::NewMatch),

        "setoption" => parse_setoption(&tokens),
        "player" => rest_of_line(trimmed, "player").map(|record| Command::Player { record }),
        "load" => rest_of_line(trimmed, "load").map(|path| Command::Load { path }),
        "seed" => parse_seed(&tokens),
        "go" => parse_go(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                eprintln!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Everything after the keyword, so records and paths may contain spaces.
fn rest_of_line(line: &str, keyword: &str) -> Option<String> {
    let rest = line.strip_prefix(keyword).unwrap_or("").trim();
    if rest.is_empty() {
        eprintln!("malformed {}: missing argument", keyword);
        return None;
    }
    Some(rest.to_string())
}

/// Parses `seed <int>`.
fn parse_seed(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed seed: expected 'seed <int>'");
        return None;
    }
    match tokens[1].parse::<Seed>() {
        Ok(seed) => Some(Command::Seed { seed }),
        Err(_) => {
            eprintln!("invalid seed value: '{}'", tokens[1]);
            None
        }
    }
}

/// Parses `go [seeds <n>] [noimprove]`.
fn parse_go(tokens: &[&str]) -> Option<Command> {
    let mut params = GoParams::default();
    let mut i = 1;

    while i < tokens.len() {
        match tokens[i] {
            "seeds" => {
                i += 1;
                if i < tokens.len() {
                    match tokens[i].parse::<usize>() {
                        Ok(v) => params.seeds = Some(v),
                        Err(_) => {
                            eprintln!("invalid seeds value: '{}'", tokens[i]);
                        }
                    }
                }
            }
            "noimprove" => {
                params.no_improve = true;
            }
            other => {
                eprintln!("unknown go parameter: '{}'", other);
            }
        }
        i += 1;
    }

    Some(Command::Go(params))
}
