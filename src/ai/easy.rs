//! Easy tier: uniform random choice among all legal moves.

use crate::ai::{CancelToken, Decision, Strategy};
use crate::board::PlayerId;
use crate::game::Game;
use crate::movegen;
use parking_lot::Mutex;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Picks uniformly at random. The generator sits behind a mutex so `choose`
/// can stay `&self` and the strategy can be shared across threads.
pub struct EasyStrategy {
    rng: Mutex<Xoshiro256PlusPlus>,
}

impl EasyStrategy {
    pub fn new(seed: u64) -> Self {
        EasyStrategy {
            rng: Mutex::new(Xoshiro256PlusPlus::seed_from_u64(seed)),
        }
    }
}

impl Strategy for EasyStrategy {
    fn choose(&self, state: &Game, player: PlayerId, _cancel: &CancelToken) -> Decision {
        let moves = movegen::legal_moves(state.board(), state.player(player));
        if moves.is_empty() {
            return Decision::Pass;
        }
        let index = self.rng.lock().gen_range(0..moves.len());
        Decision::Play(moves[index])
    }
}
