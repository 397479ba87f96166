//! Board state and placement validation.
//!
//! The board is a fixed 20x20 grid where each cell is either empty or owned
//! by one player. It is only ever mutated by committing a placement that has
//! already passed [`Board::validate`]; a rejected move leaves it untouched.

use crate::moves::Move;
use crate::player::Player;
use std::error::Error;
use std::fmt;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 20;

/// Player index, `0..=3`.
pub type PlayerId = u8;

/// Start corners in player order: player 0 opens at (0,0), player 1 at
/// (0,19), and so on clockwise around the board.
pub const START_CORNERS: [(usize, usize); 4] = [
    (0, 0),
    (0, BOARD_SIZE - 1),
    (BOARD_SIZE - 1, BOARD_SIZE - 1),
    (BOARD_SIZE - 1, 0),
];

const EDGE_NEIGHBORS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL_NEIGHBORS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Why a proposed move was rejected. All variants are recoverable: the caller
/// surfaces the reason and the board stays unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlacementError {
    /// The piece id or orientation index does not name a real orientation.
    InvalidPiece,
    /// The player has already placed this piece.
    AlreadyUsed,
    /// A transformed cell (or queried coordinate) lies outside the grid.
    OutOfBounds,
    /// A transformed cell is already occupied.
    Overlap,
    /// A player's first placement must cover their assigned start corner.
    MustCoverStartCorner,
    /// A transformed cell shares an edge with the same player's cell.
    EdgeAdjacentToSelf,
    /// No transformed cell touches the same player's cells diagonally.
    NoCornerContact,
    /// The game has ended; no further moves or passes are accepted.
    GameAlreadyOver,
    /// The move names a player other than the one to act.
    NotYourTurn,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidPiece => write!(f, "Unknown piece or orientation"),
            PlacementError::AlreadyUsed => write!(f, "Piece has already been placed"),
            PlacementError::OutOfBounds => write!(f, "Placement leaves the board"),
            PlacementError::Overlap => write!(f, "Placement overlaps an occupied cell"),
            PlacementError::MustCoverStartCorner => {
                write!(f, "First placement must cover the start corner")
            }
            PlacementError::EdgeAdjacentToSelf => {
                write!(f, "Placement touches the player's own color edge-to-edge")
            }
            PlacementError::NoCornerContact => {
                write!(f, "Placement has no corner contact with the player's own color")
            }
            PlacementError::GameAlreadyOver => write!(f, "Game is already over"),
            PlacementError::NotYourTurn => write!(f, "Not this player's turn"),
        }
    }
}

impl Error for PlacementError {}

/// The 20x20 grid of cell owners.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<PlayerId>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    fn in_bounds(r: i32, c: i32) -> bool {
        r >= 0 && r < BOARD_SIZE as i32 && c >= 0 && c < BOARD_SIZE as i32
    }

    /// Owner of a cell, with bounds checking.
    pub fn cell_at(&self, r: usize, c: usize) -> Result<Option<PlayerId>, PlacementError> {
        if r < BOARD_SIZE && c < BOARD_SIZE {
            Ok(self.cells[r][c])
        } else {
            Err(PlacementError::OutOfBounds)
        }
    }

    /// Owner of a cell addressed with signed coordinates; off-board reads as
    /// empty, which is what the adjacency scans want.
    pub fn owner_at(&self, r: i32, c: i32) -> Option<PlayerId> {
        if Self::in_bounds(r, c) {
            self.cells[r as usize][c as usize]
        } else {
            None
        }
    }

    /// All cells currently owned by a player.
    pub fn cells_owned(&self, player: PlayerId) -> Vec<(usize, usize)> {
        let mut owned = Vec::new();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if self.cells[r][c] == Some(player) {
                    owned.push((r, c));
                }
            }
        }
        owned
    }

    /// Number of cells a player owns. Used by the conservation invariant:
    /// this always equals the sum of that player's placed piece sizes.
    pub fn count_owned(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(player))
            .count()
    }

    pub(crate) fn touches_own_edge(&self, r: i32, c: i32, player: PlayerId) -> bool {
        EDGE_NEIGHBORS
            .iter()
            .any(|&(dr, dc)| self.owner_at(r + dr, c + dc) == Some(player))
    }

    pub(crate) fn touches_own_corner(&self, r: i32, c: i32, player: PlayerId) -> bool {
        DIAGONAL_NEIGHBORS
            .iter()
            .any(|&(dr, dc)| self.owner_at(r + dr, c + dc) == Some(player))
    }

    /// Checks a proposed move against the placement rules.
    ///
    /// Checks run in a fixed order and the first failure wins: piece
    /// availability, bounds, overlap, the first-move corner rule, then the
    /// same-color adjacency rules. First-move-ness is derived from the
    /// player's placement record, never tracked separately. Contact with
    /// other players' cells, edge or diagonal, is always permitted.
    pub fn validate(&self, player: &Player, mv: &Move) -> Result<(), PlacementError> {
        debug_assert_eq!(mv.player, player.id());
        let offsets = mv.offsets().ok_or(PlacementError::InvalidPiece)?;
        if !player.is_unused(mv.piece) {
            return Err(PlacementError::AlreadyUsed);
        }

        let (ar, ac) = (mv.anchor.0 as i32, mv.anchor.1 as i32);
        for &(dr, dc) in offsets {
            let (r, c) = (ar + dr, ac + dc);
            if !Self::in_bounds(r, c) {
                return Err(PlacementError::OutOfBounds);
            }
            if self.owner_at(r, c).is_some() {
                return Err(PlacementError::Overlap);
            }
        }

        if player.first_move_pending() {
            let corner = player.start_corner();
            let covers = offsets
                .iter()
                .any(|&(dr, dc)| (ar + dr, ac + dc) == (corner.0 as i32, corner.1 as i32));
            if !covers {
                return Err(PlacementError::MustCoverStartCorner);
            }
            return Ok(());
        }

        for &(dr, dc) in offsets {
            if self.touches_own_edge(ar + dr, ac + dc, player.id()) {
                return Err(PlacementError::EdgeAdjacentToSelf);
            }
        }
        let corner_contact = offsets
            .iter()
            .any(|&(dr, dc)| self.touches_own_corner(ar + dr, ac + dc, player.id()));
        if !corner_contact {
            return Err(PlacementError::NoCornerContact);
        }
        Ok(())
    }

    /// Writes a validated move's cells onto the board. The caller owns the
    /// other half of the commit (marking the piece placed).
    pub fn commit(&mut self, mv: &Move) {
        if let Some(offsets) = mv.offsets() {
            let (ar, ac) = (mv.anchor.0 as i32, mv.anchor.1 as i32);
            for &(dr, dc) in offsets {
                let (r, c) = (ar + dr, ac + dc);
                debug_assert!(Self::in_bounds(r, c));
                if Self::in_bounds(r, c) {
                    self.cells[r as usize][c as usize] = Some(mv.player);
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(owner) => write!(f, "{}", owner)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board:\n{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::MONOMINO;
    use crate::player::PlayerKind;

    fn player(id: PlayerId) -> Player {
        Player::new(id, PlayerKind::Human)
    }

    #[test]
    fn cell_at_bounds() {
        let board = Board::new();
        assert_eq!(board.cell_at(0, 0), Ok(None));
        assert_eq!(board.cell_at(19, 19), Ok(None));
        assert_eq!(board.cell_at(20, 0), Err(PlacementError::OutOfBounds));
        assert_eq!(board.cell_at(0, 20), Err(PlacementError::OutOfBounds));
    }

    #[test]
    fn first_move_must_cover_start_corner() {
        let board = Board::new();
        let p = player(0);
        let at_corner = Move::new(0, MONOMINO, 0, (0, 0));
        let elsewhere = Move::new(0, MONOMINO, 0, (5, 5));
        assert_eq!(board.validate(&p, &at_corner), Ok(()));
        assert_eq!(
            board.validate(&p, &elsewhere),
            Err(PlacementError::MustCoverStartCorner)
        );
    }

    #[test]
    fn availability_is_checked_before_geometry() {
        let mut board = Board::new();
        let mut p = player(0);
        let mv = Move::new(0, MONOMINO, 0, (0, 0));
        board.commit(&mv);
        p.mark_placed(MONOMINO);

        // Re-placing an already-used piece, even out of bounds, reports
        // AlreadyUsed: availability short-circuits ahead of geometry.
        let again = Move::new(0, MONOMINO, 0, (25, 25));
        assert_eq!(board.validate(&p, &again), Err(PlacementError::AlreadyUsed));
    }

    #[test]
    fn overlap_is_rejected() {
        let mut board = Board::new();
        let mut p0 = player(0);
        let first = Move::new(0, MONOMINO, 0, (0, 0));
        board.commit(&first);
        p0.mark_placed(MONOMINO);

        let mut p1 = player(1);
        p1.mark_placed(MONOMINO); // not first move anymore
        let stacked = Move::new(1, 1, 0, (0, 0));
        assert_eq!(board.validate(&p1, &stacked), Err(PlacementError::Overlap));
    }

    #[test]
    fn edge_adjacency_beats_corner_contact() {
        let mut board = Board::new();
        let mut p = player(0);
        // Domino along the top edge from the corner.
        let opening = Move::new(0, 1, 0, (0, 0));
        assert_eq!(board.validate(&p, &opening), Ok(()));
        board.commit(&opening);
        p.mark_placed(1);

        // (1,1) has diagonal contact with (0,0) but shares an edge with
        // (0,1); the edge rule wins.
        let flush = Move::new(0, MONOMINO, 0, (1, 1));
        assert_eq!(
            board.validate(&p, &flush),
            Err(PlacementError::EdgeAdjacentToSelf)
        );

        // (1,2) borders only empty cells and touches (0,1) diagonally.
        let open = Move::new(0, MONOMINO, 0, (1, 2));
        assert_eq!(board.validate(&p, &open), Ok(()));

        // (2,2) touches nothing of the player's at all.
        let isolated = Move::new(0, MONOMINO, 0, (2, 2));
        assert_eq!(
            board.validate(&p, &isolated),
            Err(PlacementError::NoCornerContact)
        );
    }

    #[test]
    fn commit_sets_every_cell() {
        let mut board = Board::new();
        // V5 at the corner covers (0,0),(1,0),(2,0),(2,1),(2,2).
        let mv = Move::new(0, 16, 0, (0, 0));
        board.commit(&mv);
        assert_eq!(board.count_owned(0), 5);
        assert_eq!(board.cell_at(0, 0), Ok(Some(0)));
        assert_eq!(board.cell_at(2, 2), Ok(Some(0)));
        assert_eq!(board.cell_at(1, 1), Ok(None));
    }
}
