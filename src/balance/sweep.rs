//! Multi-seed sweep.
//!
//! Balances the same roster under consecutive seeds in parallel and keeps
//! the lowest score. Ties go to the earliest seed, so the outcome does not
//! depend on thread scheduling.

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::info;

use crate::config::BalanceConfig;
use crate::roster::Participant;
use crate::shuffle::Seed;

use super::balance;
use super::score::score_with;
use super::team::MatchResult;

/// The winning seed of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutcome {
    pub seed: Seed,
    pub score: f64,
    pub result: MatchResult,
    pub seeds_tried: usize,
}

/// Tries seeds `base, base + 1, ...` (`count` of them, at least one).
pub fn sweep(roster: &[Participant], base: Seed, count: usize, config: &BalanceConfig) -> SweepOutcome {
    let count = count.clamp(1, u32::MAX as usize) as u32;

    let evaluate = |k: u32| {
        let seed = base.offset(k);
        let result = balance(roster, seed, config);
        let score = score_with(&result.team_a, &result.team_b, &config.scoring);
        (k, score, result)
    };

    let (k, score, result) = (0..count)
        .into_par_iter()
        .map(evaluate)
        .min_by(|x, y| earlier_best(x.1, x.0, y.1, y.0))
        .unwrap_or_else(|| evaluate(0));

    let seed = base.offset(k);
    info!(seed = seed.value(), score, tried = count, "sweep finished");
    SweepOutcome {
        seed,
        score,
        result,
        seeds_tried: count as usize,
    }
}

fn earlier_best(score_x: f64, k_x: u32, score_y: f64, k_y: u32) -> Ordering {
    score_x.total_cmp(&score_y).then(k_x.cmp(&k_y))
}
