//! One-line participant notation.
//!
//! A participant is written as up to five `|`-separated sections:
//!
//! `<id>|<name>|<role>[:<rating>],...|[<primary>,...]|[<hero>,...]`
//!
//! Roles are `TANK`, `DPS`, `SUPPORT` or their abbreviations `T`, `D`, `S`.
//! A role without a rating is playable but unrated, so it is never
//! assigned. The primary and hero sections are optional. An empty primary
//! section means no stated preference; `-` states a preference for no
//! role, so every assignment is off-preference.
//!
//! A backslash escapes the next character, so ids, names and heroes may
//! contain `|`, `,` or `\` written as `\|`, `\,` and `\\`.

use thiserror::Error;

use crate::roster::{Participant, Role};

/// Primary section marker for a stated preference with no roles.
const NO_PRIMARY_ROLES: &str = "-";

/// Errors that can occur when parsing participant notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected 3 to 5 sections separated by '|', got {0}")]
    WrongSectionCount(usize),

    #[error("empty participant id")]
    EmptyId,

    #[error("participant '{0}' has no roles")]
    NoRoles(String),

    #[error("unknown role '{0}'")]
    UnknownRole(String),

    #[error("invalid rating '{0}'")]
    InvalidRating(String),

    #[error("role '{0}' listed twice")]
    DuplicateRole(String),
}

/// Parses a participant from its one-line notation.
pub fn parse_participant(s: &str) -> Result<Participant, NotationError> {
    let sections: Vec<&str> = split_unescaped(s.trim(), '|')
        .into_iter()
        .map(str::trim)
        .collect();
    if !(3..=5).contains(&sections.len()) {
        return Err(NotationError::WrongSectionCount(sections.len()));
    }

    let id = unescape(sections[0]);
    if id.is_empty() {
        return Err(NotationError::EmptyId);
    }
    let name = match unescape(sections[1]) {
        n if n.is_empty() => id.clone(),
        n => n,
    };
    let mut participant = Participant::new(id, name);

    for entry in list(sections[2]) {
        let (role_str, rating) = match entry.split_once(':') {
            Some((r, v)) => {
                let v = v.trim();
                let rating = v
                    .parse::<u32>()
                    .map_err(|_| NotationError::InvalidRating(v.to_string()))?;
                (r.trim(), Some(rating))
            }
            None => (entry, None),
        };
        let role = parse_role(role_str)?;
        if participant.roles.contains(&role) {
            return Err(NotationError::DuplicateRole(role_str.to_string()));
        }
        participant = match rating {
            Some(r) => participant.with_role(role, r),
            None => participant.with_unrated_role(role),
        };
    }
    if participant.roles.is_empty() {
        return Err(NotationError::NoRoles(participant.id));
    }

    match sections.get(3).copied() {
        None | Some("") => {}
        Some(NO_PRIMARY_ROLES) => participant.primary = Some(Vec::new()),
        Some(primary) => {
            let roles = list(primary)
                .map(parse_role)
                .collect::<Result<Vec<Role>, NotationError>>()?;
            participant.primary = Some(roles);
        }
    }

    if let Some(heroes) = sections.get(4) {
        participant.preferred_heroes = list(heroes).map(unescape).collect();
    }

    Ok(participant)
}

/// Formats a participant as one-line notation. Trailing empty sections are
/// omitted.
pub fn format_participant(p: &Participant) -> String {
    let roles: Vec<String> = p
        .roles
        .iter()
        .map(|r| match p.skills.get(r) {
            Some(rating) => format!("{}:{}", r, rating),
            None => r.to_string(),
        })
        .collect();

    let mut out = format!("{}|{}|{}", escape(&p.id), escape(&p.name), roles.join(","));
    let primary = match &p.primary {
        None => String::new(),
        Some(roles) if roles.is_empty() => NO_PRIMARY_ROLES.to_string(),
        Some(roles) => roles
            .iter()
            .map(|r| r.name())
            .collect::<Vec<_>>()
            .join(","),
    };

    if !p.preferred_heroes.is_empty() {
        let heroes: Vec<String> = p.preferred_heroes.iter().map(|h| escape(h)).collect();
        out.push('|');
        out.push_str(&primary);
        out.push('|');
        out.push_str(&heroes.join(","));
    } else if !primary.is_empty() {
        out.push('|');
        out.push_str(&primary);
    }
    out
}

/// Splits on `sep` wherever it is not preceded by an escaping backslash.
/// Escapes are left in place for the next level to handle.
fn split_unescaped(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == sep {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&s[start..]);
    parts
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            // A trailing lone backslash is kept as is.
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '|' | ',' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn list(section: &str) -> impl Iterator<Item = &str> {
    split_unescaped(section, ',')
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_role(s: &str) -> Result<Role, NotationError> {
    Role::from_name(s).ok_or_else(|| NotationError::UnknownRole(s.to_string()))
}
