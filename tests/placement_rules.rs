//! Placement rule tests: the corner rule, the adjacency rules, and the
//! rejection taxonomy, driven through the public API.

use blokus::{Board, Game, Move, PlacementError, Player, PlayerKind, MONOMINO};

fn two_player_game() -> Game {
    Game::new(&[PlayerKind::Human, PlayerKind::Human]).unwrap()
}

#[test]
fn first_move_is_accepted_iff_it_covers_the_start_corner() {
    let mut game = two_player_game();

    let missing = Move::new(0, MONOMINO, 0, (9, 9));
    assert_eq!(
        game.submit_move(missing).unwrap_err(),
        PlacementError::MustCoverStartCorner
    );
    // A rejected move leaves the board untouched.
    assert_eq!(game.board().count_owned(0), 0);

    let covering = Move::new(0, MONOMINO, 0, (0, 0));
    assert!(game.submit_move(covering).is_ok());
    assert_eq!(game.board().count_owned(0), 1);
}

#[test]
fn a_piece_can_only_be_placed_once() {
    let mut game = two_player_game();
    game.submit_move(Move::new(0, MONOMINO, 0, (0, 0))).unwrap();
    game.submit_move(Move::new(1, MONOMINO, 0, (0, 19))).unwrap();

    let again = Move::new(0, MONOMINO, 0, (1, 1));
    assert_eq!(
        game.submit_move(again).unwrap_err(),
        PlacementError::AlreadyUsed
    );
}

#[test]
fn placements_may_not_leave_the_board() {
    let mut game = two_player_game();
    // I5 laid horizontally from column 16 runs off the right edge; covering
    // the corner is not even reached.
    let overflow = Move::new(0, 10, 0, (0, 16));
    assert_eq!(
        game.submit_move(overflow).unwrap_err(),
        PlacementError::OutOfBounds
    );
}

#[test]
fn placements_may_not_overlap_any_color() {
    let mut game = two_player_game();
    game.submit_move(Move::new(0, 1, 0, (0, 0))).unwrap(); // I2 at (0,0)-(0,1)
    game.submit_move(Move::new(1, MONOMINO, 0, (0, 19))).unwrap();

    // Overlap with the player's own domino.
    let on_own = Move::new(0, MONOMINO, 0, (0, 1));
    assert_eq!(
        game.submit_move(on_own).unwrap_err(),
        PlacementError::Overlap
    );

    // Overlap with an opponent is just as illegal: I3 from (0,17) runs
    // through the opponent's cell at (0,19).
    let on_opponent = Move::new(0, 3, 0, (0, 17));
    assert_eq!(
        game.submit_move(on_opponent).unwrap_err(),
        PlacementError::Overlap
    );
}

#[test]
fn own_edge_contact_is_rejected_even_with_corner_contact_elsewhere() {
    let mut game = two_player_game();
    game.submit_move(Move::new(0, 1, 0, (0, 0))).unwrap(); // I2 at (0,0)-(0,1)
    game.submit_move(Move::new(1, MONOMINO, 0, (0, 19))).unwrap();

    // (1,1) is diagonal to (0,0), valid corner contact, but shares an
    // edge with (0,1). The edge rule wins.
    let flush = Move::new(0, MONOMINO, 0, (1, 1));
    assert_eq!(
        game.submit_move(flush).unwrap_err(),
        PlacementError::EdgeAdjacentToSelf
    );
}

#[test]
fn moves_without_corner_contact_are_rejected() {
    let mut game = two_player_game();
    game.submit_move(Move::new(0, MONOMINO, 0, (0, 0))).unwrap();
    game.submit_move(Move::new(1, MONOMINO, 0, (0, 19))).unwrap();

    let floating = Move::new(0, 1, 0, (10, 10));
    assert_eq!(
        game.submit_move(floating).unwrap_err(),
        PlacementError::NoCornerContact
    );
}

#[test]
fn malformed_moves_are_rejected_up_front() {
    let mut game = two_player_game();
    let bad_piece = Move::new(0, 99, 0, (0, 0));
    assert_eq!(
        game.submit_move(bad_piece).unwrap_err(),
        PlacementError::InvalidPiece
    );
    let bad_orientation = Move::new(0, MONOMINO, 7, (0, 0));
    assert_eq!(
        game.submit_move(bad_orientation).unwrap_err(),
        PlacementError::InvalidPiece
    );
}

#[test]
fn opponent_contact_never_rejects() {
    // Board-level setup: player 0 holds a domino at (0,0)-(0,1); player 1
    // has made their first move and holds the single cell (0,2).
    let mut board = Board::new();
    board.commit(&Move::new(0, 1, 0, (0, 0)));
    let mut p1 = Player::new(1, PlayerKind::Human);
    board.commit(&Move::new(1, MONOMINO, 0, (0, 2)));
    p1.mark_placed(MONOMINO);

    // A vertical domino at (1,1)-(2,1): its top cell shares an edge with the
    // opponent's (0,1) and a diagonal with the opponent's (0,0). Neither
    // matters; the own-color diagonal to (0,2) carries the move.
    let snug = Move::new(1, 1, 1, (1, 1));
    assert_eq!(board.validate(&p1, &snug), Ok(()));
}

#[test]
fn conservation_of_cells() {
    let mut game = two_player_game();
    game.submit_move(Move::new(0, 16, 0, (0, 0))).unwrap(); // V5, 5 cells
    let second = game.legal_moves(1)[0];
    game.submit_move(second).unwrap();
    let third = game.legal_moves(0)[0];
    game.submit_move(third).unwrap();

    for player in game.players() {
        let placed_cells: usize = player
            .placed()
            .iter()
            .map(|&p| blokus::pieces::piece_size(p))
            .sum();
        assert_eq!(game.board().count_owned(player.id()), placed_cells);
    }
}
