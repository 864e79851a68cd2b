//! scrimbal library.
//!
//! Splits a roster of role-rated participants into two teams with fixed
//! role slots, keeping team totals close. Exposes the balancing core, the
//! roster and config types, the cosmetic catalogs, and the session protocol
//! used by the binaries.

pub mod balance;
pub mod catalog;
pub mod config;
pub mod protocol;
pub mod roster;
pub mod session;
pub mod shuffle;

pub use balance::{assign, improve, score, MatchResult, Team};
pub use config::BalanceConfig;
pub use roster::{Participant, Role};
pub use shuffle::{seeded_shuffle, Seed};
