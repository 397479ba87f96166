//! Legal move enumeration.
//!
//! The naive scan (every piece x orientation x all 400 anchors) is correct
//! but wasteful: most anchors cannot produce corner contact. Enumeration is
//! instead anchored at the cells a placement could actually reach: the
//! start corner for a first move, and otherwise the empty diagonal neighbors
//! of the player's own cells. Every candidate still passes the full
//! validator before it is reported.

use crate::board::{Board, PlayerId, BOARD_SIZE};
use crate::moves::Move;
use crate::pieces;
use crate::player::Player;
use std::collections::HashSet;

/// Every legal placement for the player on this board. An empty result is
/// the normal "must pass" condition, not an error.
pub fn legal_moves(board: &Board, player: &Player) -> Vec<Move> {
    let targets = if player.first_move_pending() {
        vec![player.start_corner()]
    } else {
        corner_targets(board, player.id())
    };

    let unused = player.unused_pieces();
    let mut seen: HashSet<Move> = HashSet::new();
    let mut moves = Vec::new();

    for &(tr, tc) in &targets {
        for &piece in &unused {
            for (orientation, offsets) in pieces::orientations(piece).iter().enumerate() {
                for &(dr, dc) in offsets {
                    // Back-solve the anchor that maps this offset onto the
                    // target cell.
                    let ar = tr as i32 - dr;
                    let ac = tc as i32 - dc;
                    if ar < 0 || ac < 0 {
                        continue;
                    }
                    let mv = Move::new(player.id(), piece, orientation, (ar as usize, ac as usize));
                    if seen.insert(mv) && board.validate(player, &mv).is_ok() {
                        moves.push(mv);
                    }
                }
            }
        }
    }
    moves
}

/// Empty cells diagonally adjacent to the player's cells that are not
/// edge-adjacent to them, the only cells a new placement can cover.
/// Doubles as the "corner access" measure the AI evaluation uses.
pub fn corner_targets(board: &Board, player: PlayerId) -> Vec<(usize, usize)> {
    let mut marked = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut targets = Vec::new();

    for (r, c) in board.cells_owned(player) {
        for (dr, dc) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
            let tr = r as i32 + dr;
            let tc = c as i32 + dc;
            if tr < 0 || tr >= BOARD_SIZE as i32 || tc < 0 || tc >= BOARD_SIZE as i32 {
                continue;
            }
            let (tr, tc) = (tr as usize, tc as usize);
            if marked[tr][tc] || board.owner_at(tr as i32, tc as i32).is_some() {
                continue;
            }
            if board.touches_own_edge(tr as i32, tc as i32, player) {
                continue;
            }
            marked[tr][tc] = true;
            targets.push((tr, tc));
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::MONOMINO;
    use crate::player::PlayerKind;

    #[test]
    fn first_moves_all_cover_the_start_corner() {
        let board = Board::new();
        let player = Player::new(0, PlayerKind::Human);
        let moves = legal_moves(&board, &player);
        assert!(!moves.is_empty());
        for mv in &moves {
            let cells = mv.cells().unwrap();
            assert!(cells.contains(&(0, 0)), "{} misses the corner", mv);
        }
    }

    #[test]
    fn no_moves_when_everything_is_placed() {
        let board = Board::new();
        let mut player = Player::new(0, PlayerKind::Human);
        for piece in 0..crate::pieces::PIECE_COUNT {
            player.mark_placed(piece);
        }
        assert!(legal_moves(&board, &player).is_empty());
    }

    #[test]
    fn corner_targets_skip_occupied_and_edge_blocked_cells() {
        let mut board = Board::new();
        let mut player = Player::new(0, PlayerKind::Human);
        let opening = Move::new(0, MONOMINO, 0, (0, 0));
        board.commit(&opening);
        player.mark_placed(MONOMINO);

        // The monomino at (0,0) opens exactly one diagonal: (1,1).
        assert_eq!(corner_targets(&board, 0), vec![(1, 1)]);

        // An opponent occupying (1,1) closes it.
        let block = Move::new(1, MONOMINO, 0, (1, 1));
        board.commit(&block);
        assert!(corner_targets(&board, 0).is_empty());
    }

    #[test]
    fn generated_moves_never_touch_own_edges() {
        let mut board = Board::new();
        let mut player = Player::new(0, PlayerKind::Human);
        let opening = Move::new(0, 4, 0, (0, 0)); // O4 square in the corner
        board.commit(&opening);
        player.mark_placed(4);

        for mv in legal_moves(&board, &player) {
            assert!(board.validate(&player, &mv).is_ok());
        }
    }
}
