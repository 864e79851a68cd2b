//! JSON roster files.
//!
//! A roster file is a JSON array of participant objects. Loading validates
//! the caller-side contract the balancer relies on: unique non-empty ids,
//! at least one role each, and ratings only for listed roles.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::roster::Participant;

/// Errors that can occur when loading a roster.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse roster JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("participant at index {0} has an empty id")]
    EmptyId(usize),

    #[error("duplicate participant id '{0}'")]
    DuplicateId(String),

    #[error("participant '{0}' has no roles")]
    NoRoles(String),

    #[error("participant '{id}' has a rating for {role}, which is not one of their roles")]
    RatingWithoutRole { id: String, role: String },
}

/// Loads and validates a roster from a JSON file.
pub fn load_roster(path: &Path) -> Result<Vec<Participant>, RosterError> {
    let data = fs::read_to_string(path).map_err(|source| RosterError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_roster(&data)
}

/// Parses and validates a roster from a JSON string.
pub fn parse_roster(json: &str) -> Result<Vec<Participant>, RosterError> {
    let roster: Vec<Participant> = serde_json::from_str(json)?;
    validate_roster(&roster)?;
    Ok(roster)
}

/// Serialises a roster as pretty-printed JSON.
pub fn roster_to_json(roster: &[Participant]) -> Result<String, RosterError> {
    Ok(serde_json::to_string_pretty(roster)?)
}

/// Checks the roster contract. The balancer itself never rejects input, so
/// this is where malformed rosters are caught.
pub fn validate_roster(roster: &[Participant]) -> Result<(), RosterError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for (i, p) in roster.iter().enumerate() {
        if p.id.is_empty() {
            return Err(RosterError::EmptyId(i));
        }
        if !seen.insert(p.id.as_str()) {
            return Err(RosterError::DuplicateId(p.id.clone()));
        }
        if p.roles.is_empty() {
            return Err(RosterError::NoRoles(p.id.clone()));
        }
        if let Some(role) = p.skills.keys().find(|r| !p.roles.contains(r)) {
            return Err(RosterError::RatingWithoutRole {
                id: p.id.clone(),
                role: role.to_string(),
            });
        }
    }
    Ok(())
}
