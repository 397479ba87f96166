//! Hard tier: one-ply static evaluation of every candidate move.
//!
//! Each legal move is applied to a hypothetical copy of the state and scored
//! by a weighted sum of placed cells, the mobility swing it causes, the
//! corner openings it leaves, and a bias toward spending big pieces early.
//! Candidates are evaluated in parallel on a dedicated thread pool; this is
//! deliberately not a deep search, which keeps the tier inside its time
//! budget.

use crate::ai::{CancelToken, Decision, Strategy};
use crate::board::PlayerId;
use crate::game::Game;
use crate::movegen;
use crate::moves::Move;
use crate::pieces;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Weights of the evaluation terms.
#[derive(Clone, Copy, Debug)]
pub struct EvalWeights {
    /// Cells the move places.
    pub cells: f64,
    /// Own mobility minus the summed mobility of every opponent, both
    /// recomputed on the post-move board.
    pub mobility: f64,
    /// Diagonal openings left for the mover.
    pub corner_access: f64,
    /// Mean size of the pieces still in hand; negative so large pieces get
    /// spent while there is room for them.
    pub piece_bias: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            cells: 1.0,
            mobility: 0.5,
            corner_access: 0.4,
            piece_bias: -0.25,
        }
    }
}

pub struct HardStrategy {
    weights: EvalWeights,
    pool: ThreadPool,
}

impl HardStrategy {
    pub fn new() -> Self {
        Self::with_weights(EvalWeights::default())
    }

    pub fn with_weights(weights: EvalWeights) -> Self {
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_cpus::get().max(1))
            .build()
            .expect("failed to build the evaluation thread pool");
        HardStrategy { weights, pool }
    }

    fn evaluate(&self, state: &Game, mv: &Move) -> f64 {
        let after = state.hypothetical(mv);
        let me = mv.player;

        let own_mobility = movegen::legal_moves(after.board(), after.player(me)).len() as f64;
        let opponents_mobility: f64 = after
            .players()
            .iter()
            .filter(|p| p.id() != me)
            .map(|p| movegen::legal_moves(after.board(), p).len() as f64)
            .sum();
        let corner_access = movegen::corner_targets(after.board(), me).len() as f64;

        let unused = after.player(me).unused_pieces();
        let mean_remaining = if unused.is_empty() {
            0.0
        } else {
            let total: usize = unused.iter().map(|&p| pieces::piece_size(p)).sum();
            total as f64 / unused.len() as f64
        };

        self.weights.cells * mv.size() as f64
            + self.weights.mobility * (own_mobility - opponents_mobility)
            + self.weights.corner_access * corner_access
            + self.weights.piece_bias * mean_remaining
    }
}

impl Default for HardStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for HardStrategy {
    fn choose(&self, state: &Game, player: PlayerId, cancel: &CancelToken) -> Decision {
        let moves = movegen::legal_moves(state.board(), state.player(player));
        if moves.is_empty() {
            return Decision::Pass;
        }

        let scored: Vec<(usize, f64)> = self.pool.install(|| {
            moves
                .par_iter()
                .enumerate()
                .filter_map(|(index, mv)| {
                    if cancel.is_cancelled() {
                        None
                    } else {
                        Some((index, self.evaluate(state, mv)))
                    }
                })
                .collect()
        });
        if cancel.is_cancelled() {
            return Decision::Pass;
        }

        // Highest score wins; equal scores fall back to the lowest candidate
        // index so the choice is deterministic.
        let mut best: Option<(usize, f64)> = None;
        for (index, score) in scored {
            let better = match best {
                None => true,
                Some((best_index, best_score)) => {
                    score > best_score || (score == best_score && index < best_index)
                }
            };
            if better {
                best = Some((index, score));
            }
        }
        match best {
            Some((index, _)) => Decision::Play(moves[index]),
            None => Decision::Pass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerKind;

    #[test]
    fn chooses_a_valid_opening() {
        let game = Game::new(&[PlayerKind::Human, PlayerKind::Human]).unwrap();
        let strategy = HardStrategy::new();
        match strategy.choose(&game, 0, &CancelToken::new()) {
            Decision::Play(mv) => {
                assert!(game.board().validate(game.player(0), &mv).is_ok());
                // Every term rewards big openings, so a pentomino it is.
                assert_eq!(mv.size(), 5);
            }
            Decision::Pass => panic!("fresh board always has a first move"),
        }
    }

    #[test]
    fn same_position_same_choice() {
        let game = Game::new(&[PlayerKind::Human, PlayerKind::Human]).unwrap();
        let strategy = HardStrategy::new();
        let a = strategy.choose(&game, 0, &CancelToken::new());
        let b = strategy.choose(&game, 0, &CancelToken::new());
        assert_eq!(a, b);
    }

    #[test]
    fn pre_cancelled_evaluation_passes_without_touching_state() {
        let game = Game::new(&[PlayerKind::Human, PlayerKind::Human]).unwrap();
        let before = game.board().clone();
        let cancel = CancelToken::new();
        cancel.cancel();
        let decision = HardStrategy::new().choose(&game, 0, &cancel);
        assert_eq!(decision, Decision::Pass);
        assert_eq!(*game.board(), before);
    }
}
