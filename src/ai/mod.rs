//! AI move selection.
//!
//! The three difficulty tiers are interchangeable implementations of one
//! [`Strategy`] interface, chosen by configuration at game setup. Strategies
//! read an immutable game snapshot and return a [`Decision`]; they never
//! mutate live state, and any internal fault is downgraded to a pass at the
//! worker boundary so a single AI error cannot stall the game.

pub mod easy;
pub mod hard;
pub mod medium;
pub mod worker;

use crate::board::PlayerId;
use crate::game::Game;
use crate::moves::Move;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub use easy::EasyStrategy;
pub use hard::{EvalWeights, HardStrategy};
pub use medium::MediumStrategy;
pub use worker::{AiHandle, AiWorker};

/// AI difficulty tiers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Soft response-time target for the tier, enforced by the caller via
    /// cancellation rather than by the strategy itself.
    pub fn time_budget(&self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_secs(3),
            Difficulty::Medium => Duration::from_secs(5),
            Difficulty::Hard => Duration::from_secs(8),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", name)
    }
}

/// What a strategy decided to do with its turn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Decision {
    Play(Move),
    Pass,
}

/// Cooperative cancellation flag, shared between the requester and the
/// evaluation loop. Strategies check it between per-move evaluations and
/// bail out promptly once it is raised.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A move-selection strategy. Object-safe so seats can hold
/// `Box<dyn Strategy>` picked at setup.
pub trait Strategy: Send + Sync {
    /// Chooses a move for `player` on the snapshot, or decides to pass.
    /// Returns `Decision::Pass` when no legal move exists or when the
    /// computation was cancelled mid-flight.
    fn choose(&self, state: &Game, player: PlayerId, cancel: &CancelToken) -> Decision;
}

/// Builds the strategy for a difficulty tier. The seed makes Easy's random
/// choices reproducible; the heuristic tiers ignore it.
pub fn strategy_for(difficulty: Difficulty, seed: u64) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Easy => Box::new(EasyStrategy::new(seed)),
        Difficulty::Medium => Box::new(MediumStrategy::new()),
        Difficulty::Hard => Box::new(HardStrategy::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budgets_grow_with_difficulty() {
        assert!(Difficulty::Easy.time_budget() < Difficulty::Medium.time_budget());
        assert!(Difficulty::Medium.time_budget() < Difficulty::Hard.time_budget());
    }

    #[test]
    fn cancel_token_latches() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }
}
