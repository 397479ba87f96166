//! Per-player state: identity, start corner, and the placement record.
//!
//! A player's "unused" pieces, first-move pendingness, and last-placed piece
//! are all derived from the single `placed` record. There is deliberately no
//! independent first-move flag to drift out of sync with the board.

use crate::ai::Difficulty;
use crate::board::{PlayerId, START_CORNERS};
use crate::pieces::{self, PieceId, PIECE_COUNT};
use std::fmt;

/// The four Blokus colors, assigned in player order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    Blue,
    Yellow,
    Red,
    Green,
}

impl Color {
    pub fn for_player(id: PlayerId) -> Color {
        match id % 4 {
            0 => Color::Blue,
            1 => Color::Yellow,
            2 => Color::Red,
            _ => Color::Green,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Red => "Red",
            Color::Green => "Green",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whether a seat is driven by a human or by an AI strategy tier.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlayerKind {
    Human,
    Ai(Difficulty),
}

/// One seat at the table.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    color: Color,
    kind: PlayerKind,
    start_corner: (usize, usize),
    placed: Vec<PieceId>,
    passed_last_turn: bool,
}

impl Player {
    /// A fresh seat with a full rack. `Game::new` builds these for normal
    /// play; standalone construction is for board-level validation setups.
    pub fn new(id: PlayerId, kind: PlayerKind) -> Self {
        Player {
            id,
            color: Color::for_player(id),
            kind,
            start_corner: START_CORNERS[(id as usize) % START_CORNERS.len()],
            placed: Vec::new(),
            passed_last_turn: false,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn start_corner(&self) -> (usize, usize) {
        self.start_corner
    }

    /// Pieces placed so far, in placement order.
    pub fn placed(&self) -> &[PieceId] {
        &self.placed
    }

    /// Piece ids not yet placed, ascending.
    pub fn unused_pieces(&self) -> Vec<PieceId> {
        (0..PIECE_COUNT).filter(|p| self.is_unused(*p)).collect()
    }

    pub fn is_unused(&self, piece: PieceId) -> bool {
        piece < PIECE_COUNT && !self.placed.contains(&piece)
    }

    /// True until the player's first placement lands. Derived, not stored.
    pub fn first_move_pending(&self) -> bool {
        self.placed.is_empty()
    }

    pub fn has_placed_all(&self) -> bool {
        self.placed.len() == PIECE_COUNT
    }

    pub fn last_placed(&self) -> Option<PieceId> {
        self.placed.last().copied()
    }

    /// Total cells across still-unused pieces; each costs a point at scoring.
    pub fn unplaced_cells(&self) -> usize {
        self.unused_pieces().iter().map(|&p| pieces::piece_size(p)).sum()
    }

    pub fn has_passed_last_turn(&self) -> bool {
        self.passed_last_turn
    }

    /// Records a placement. This is the piece-state half of committing a
    /// move; `Game` pairs it with `Board::commit`.
    pub fn mark_placed(&mut self, piece: PieceId) {
        debug_assert!(self.is_unused(piece));
        self.placed.push(piece);
    }

    pub(crate) fn set_passed(&mut self, passed: bool) {
        self.passed_last_turn = passed;
    }
}
