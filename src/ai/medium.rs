//! Medium tier: corner-grabbing greedy.
//!
//! Board corners are premium real estate, so any legal move that occupies
//! one is taken (the largest such move wins). Failing that, moves are scored
//! by cell count plus the diagonal openings they create.

use crate::ai::{CancelToken, Decision, Strategy};
use crate::board::{PlayerId, START_CORNERS};
use crate::game::Game;
use crate::movegen;
use crate::moves::Move;

pub struct MediumStrategy;

impl MediumStrategy {
    pub fn new() -> Self {
        MediumStrategy
    }

    fn occupies_board_corner(mv: &Move) -> bool {
        let Some(cells) = mv.cells() else {
            return false;
        };
        START_CORNERS
            .iter()
            .any(|&(r, c)| cells.contains(&(r as i32, c as i32)))
    }
}

impl Default for MediumStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for MediumStrategy {
    fn choose(&self, state: &Game, player: PlayerId, cancel: &CancelToken) -> Decision {
        let moves = movegen::legal_moves(state.board(), state.player(player));
        if moves.is_empty() {
            return Decision::Pass;
        }

        // Corner grab: largest move that lands on a board corner, first
        // found on ties.
        let mut corner_best: Option<&Move> = None;
        for mv in &moves {
            if cancel.is_cancelled() {
                return Decision::Pass;
            }
            if Self::occupies_board_corner(mv)
                && corner_best.map_or(true, |best| mv.size() > best.size())
            {
                corner_best = Some(mv);
            }
        }
        if let Some(mv) = corner_best {
            return Decision::Play(*mv);
        }

        // Otherwise: cell count plus the corner openings the move leaves us.
        let mut best: Option<(usize, &Move)> = None;
        for mv in &moves {
            if cancel.is_cancelled() {
                return Decision::Pass;
            }
            let mut after = state.board().clone();
            after.commit(mv);
            let score = mv.size() + movegen::corner_targets(&after, player).len();
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, mv));
            }
        }
        match best {
            Some((_, mv)) => Decision::Play(*mv),
            None => Decision::Pass,
        }
    }
}
