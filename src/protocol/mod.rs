//! Collaborator protocols around the balancer.
//!
//! Roster input (JSON files and one-line participant notation), the text
//! report of a result, and the command parser for the session loop.

pub mod notation;
pub mod parser;
pub mod report;
pub mod roster;

pub use notation::{format_participant, parse_participant, NotationError};
pub use parser::{parse_command, Command, GoParams};
pub use report::{format_result, write_result};
pub use roster::{load_roster, parse_roster, roster_to_json, validate_roster, RosterError};
