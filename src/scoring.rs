//! End-of-game scoring and winner determination.
//!
//! The formula also works mid-game as a live estimate: every cell of every
//! still-unused piece costs a point, a cleared rack earns a bonus, and
//! finishing on the monomino earns a little more.

use crate::board::PlayerId;
use crate::pieces::MONOMINO;
use crate::player::Player;

/// Bonus for placing all 21 pieces.
pub const ALL_PIECES_BONUS: i32 = 15;

/// Extra bonus when the very last piece placed was the monomino.
pub const MONOMINO_LAST_BONUS: i32 = 5;

/// A single player's score.
pub fn score(player: &Player) -> i32 {
    if player.has_placed_all() {
        let mut total = ALL_PIECES_BONUS;
        if player.last_placed() == Some(MONOMINO) {
            total += MONOMINO_LAST_BONUS;
        }
        total
    } else {
        -(player.unplaced_cells() as i32)
    }
}

/// `(player, score)` pairs sorted by score descending, then player id
/// ascending. The id tie-break keeps standings deterministic.
pub fn standings(players: &[Player]) -> Vec<(PlayerId, i32)> {
    let mut table: Vec<(PlayerId, i32)> = players.iter().map(|p| (p.id(), score(p))).collect();
    table.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    table
}

/// Every player sharing the top score. House rules differ on breaking score
/// ties, so joint winners are reported rather than picking one.
pub fn winners(players: &[Player]) -> Vec<PlayerId> {
    let Some(top) = players.iter().map(score).max() else {
        return Vec::new();
    };
    players
        .iter()
        .filter(|p| score(p) == top)
        .map(Player::id)
        .collect()
}

/// The single winner under the deterministic tie-break: lowest player id
/// among the top scorers.
pub fn winner(players: &[Player]) -> Option<PlayerId> {
    winners(players).into_iter().min()
}
